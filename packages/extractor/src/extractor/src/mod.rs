//! Extractor source modules.

pub mod accessor;
pub mod mapping_extractor;
