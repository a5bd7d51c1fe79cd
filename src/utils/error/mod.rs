//! Error handling for the gateway
//!
//! This module defines the error type shared by the pipeline and the HTTP layer.

#![allow(missing_docs)]

mod helpers;
mod response;
mod types;

pub use response::ErrorResponse;
pub use types::{GatewayError, Result};
