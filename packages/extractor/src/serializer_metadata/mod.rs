//! Serialization metadata consumed as mapping gating hints.
//!
//! A [`ClassMetadataFactory`] returns, per class, the declared attribute
//! metadata (max depth, groups, ignored flag). The extractor only reads it.

pub mod src;

pub use src::api::{AttributeMetadata, ClassMetadata, ClassMetadataFactory};
pub use src::registry::StaticClassMetadataFactory;
