//! Library exports for the strokematch input arbitration engine.
//!
//! Exposes the shortcut matcher, the profile configuration that feeds it and
//! the script replay used by the binary, so hosts and tools share one
//! implementation.

pub mod config;
pub mod input;
pub mod replay;

pub use config::Config;
