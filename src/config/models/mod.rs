//! Configuration data models
//!
//! This module defines all configuration structures used by the gateway.

#![allow(missing_docs)]

pub mod logging;
pub mod output;
pub mod pipeline;
pub mod server;
pub mod upstream;

pub use logging::*;
pub use output::*;
pub use pipeline::*;
pub use server::*;
pub use upstream::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8000
}

/// Default timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

/// Default maximum body size in bytes
pub fn default_max_body_size() -> usize {
    25 * 1024 * 1024 // 25MB
}

/// Default upstream request timeout in seconds
pub fn default_upstream_timeout() -> u64 {
    60
}

pub fn default_true() -> bool {
    true
}
