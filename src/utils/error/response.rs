//! HTTP response handling for errors

use super::types::GatewayError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

impl GatewayError {
    fn error_code(&self) -> &'static str {
        match self {
            GatewayError::Config(_) => "CONFIG_ERROR",
            GatewayError::Io(_) => "IO_ERROR",
            GatewayError::HttpClient(_) => "HTTP_CLIENT_ERROR",
            GatewayError::Serialization(_) | GatewayError::Yaml(_) => "SERIALIZATION_ERROR",
            GatewayError::Validation(_) => "VALIDATION_ERROR",
            GatewayError::UnsupportedMediaType(_) => "UNSUPPORTED_MEDIA_TYPE",
            GatewayError::PayloadTooLarge(_) => "PAYLOAD_TOO_LARGE",
            GatewayError::UpstreamStatus { .. } => "UPSTREAM_ERROR",
            GatewayError::UpstreamContract(_) => "UPSTREAM_CONTRACT_VIOLATION",
            GatewayError::Network(_) => "NETWORK_ERROR",
            GatewayError::FileStorage(_) => "FILE_STORAGE_ERROR",
            GatewayError::NotFound(_) => "NOT_FOUND",
            GatewayError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::Validation(_) | GatewayError::UnsupportedMediaType(_) => {
                StatusCode::BAD_REQUEST
            }
            GatewayError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            GatewayError::UpstreamStatus { .. }
            | GatewayError::UpstreamContract(_)
            | GatewayError::Network(_)
            | GatewayError::HttpClient(_) => StatusCode::BAD_GATEWAY,
            GatewayError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        // Internal failures are logged in full but never echoed to the caller
        let detail = if status_code == StatusCode::INTERNAL_SERVER_ERROR {
            "An internal error occurred".to_string()
        } else {
            self.to_string()
        };

        HttpResponse::build(status_code).json(ErrorResponse {
            detail,
            code: self.error_code().to_string(),
            timestamp: chrono::Utc::now().timestamp(),
        })
    }
}

/// Uniform error envelope
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
    pub code: String,
    pub timestamp: i64,
}
