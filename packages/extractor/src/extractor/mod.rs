//! Mapping metadata extraction.
//!
//! [`MappingExtractor`] decides, per property, where a value is read from on
//! the source and where it is written to on the target, and answers the
//! serialization gating queries (max depth, groups, ignored) for a class.

pub mod src;

pub use crate::property_info::WriteContext;
pub use src::accessor::{ReadAccessor, ReadAccessorKind, WriteMutator, WriteMutatorKind};
pub use src::mapping_extractor::{MappingExtractor, MappingExtractorInterface};
