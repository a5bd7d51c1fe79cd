//! Helper functions for creating specific error types

use super::types::GatewayError;
use crate::core::speech::Stage;

impl GatewayError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn unsupported_media_type<S: Into<String>>(message: S) -> Self {
        Self::UnsupportedMediaType(message.into())
    }

    pub fn payload_too_large<S: Into<String>>(message: S) -> Self {
        Self::PayloadTooLarge(message.into())
    }

    pub fn upstream_status(stage: Stage, status: u16) -> Self {
        Self::UpstreamStatus { stage, status }
    }

    pub fn upstream_contract<S: Into<String>>(message: S) -> Self {
        Self::UpstreamContract(message.into())
    }

    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network(message.into())
    }

    pub fn file_storage<S: Into<String>>(message: S) -> Self {
        Self::FileStorage(message.into())
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Whether the caller sent something we refused before any upstream call
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::UnsupportedMediaType(_) | Self::PayloadTooLarge(_)
        )
    }

    /// The stage whose non-success answer produced this error, if any
    pub fn failed_stage(&self) -> Option<Stage> {
        match self {
            Self::UpstreamStatus { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}
