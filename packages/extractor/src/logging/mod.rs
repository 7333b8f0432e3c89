//! Logging setup.
//!
//! The extractor emits `tracing` events; embedders that do not install
//! their own subscriber can use [`init_logging`].

pub mod src;

pub use src::logger::{init_logging, LogLevel};
