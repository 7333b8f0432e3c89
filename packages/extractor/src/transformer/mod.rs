//! Transformer-side values produced during mapping-graph construction.

pub mod src;

pub use src::mapper_dependency::{MapperDependencies, MapperDependency};
