//! Serializer metadata source modules.

pub mod api;
pub mod registry;
