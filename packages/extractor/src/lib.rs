//! AutoMapper Extractor
//!
//! Metadata extraction for generated object-to-object mappers: how each
//! property is read from a source type, how it is written into a target
//! type, and which serialization hints gate the mapping.

#![deny(clippy::all)]

pub mod config;
pub mod error;
pub mod extractor;
pub mod logging;
pub mod property_info;
pub mod serializer_metadata;
pub mod transformer;

pub use config::ExtractorConfig;
pub use error::{ExtractorError, ExtractorResult};
pub use extractor::{
    MappingExtractor, MappingExtractorInterface, ReadAccessor, ReadAccessorKind, WriteContext,
    WriteMutator, WriteMutatorKind,
};
pub use transformer::{MapperDependencies, MapperDependency};

/// Type identifier used for untyped collections and plain arrays.
pub const ARRAY_TYPE: &str = "array";
