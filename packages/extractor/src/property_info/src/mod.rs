//! Property introspection source modules.

pub mod context;
pub mod host;
pub mod static_info;
