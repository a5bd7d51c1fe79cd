//! Error types for the gateway

use crate::core::speech::Stage;
use thiserror::Error;

/// Result type alias for the gateway
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Main error type for the gateway
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Invalid client input (missing form field, unreadable upload)
    #[error("{0}")]
    Validation(String),

    /// Declared upload content type is not on the allow-list
    #[error("{0}")]
    UnsupportedMediaType(String),

    /// Upload exceeds the configured body limit
    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    /// Upstream stage answered with a non-success status
    #[error("{}", stage.failure_message())]
    UpstreamStatus { stage: Stage, status: u16 },

    /// Upstream stage answered successfully but without the expected field
    #[error("{0}")]
    UpstreamContract(String),

    /// Upstream could not be reached
    #[error("Network error: {0}")]
    Network(String),

    /// Output file could not be written
    #[error("File storage error: {0}")]
    FileStorage(String),

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}
