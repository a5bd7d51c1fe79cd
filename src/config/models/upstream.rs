//! Upstream speech API configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Environment variable holding the upstream subscription key
pub const API_KEY_ENV: &str = "SARVAM_API_KEY";
/// Environment variable overriding the upstream base URL
pub const API_BASE_ENV: &str = "SARVAM_API_BASE";

/// Connection settings for the transcription, translation and synthesis APIs
#[derive(Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Subscription key sent with every upstream call; never serialized
    #[serde(default, skip_serializing)]
    pub api_key: String,
    /// API base URL (default: https://api.sarvam.ai)
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Header carrying the subscription key
    #[serde(default = "default_auth_header")]
    pub auth_header: String,
    /// Per-call timeout in seconds
    #[serde(default = "default_upstream_timeout")]
    pub timeout: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_base: default_api_base(),
            auth_header: default_auth_header(),
            timeout: default_upstream_timeout(),
        }
    }
}

// The key never reaches the logs
impl fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("api_key", &"<redacted>")
            .field("api_base", &self.api_base)
            .field("auth_header", &self.auth_header)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl UpstreamConfig {
    /// Full URL for an endpoint path such as `/translate`
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Per-call timeout
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout)
    }

    /// Validate upstream configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.api_key.trim().is_empty() {
            return Err(format!(
                "Upstream API key is required (set upstream.api_key or {})",
                API_KEY_ENV
            ));
        }

        let url = url::Url::parse(&self.api_base)
            .map_err(|e| format!("Invalid upstream api_base '{}': {}", self.api_base, e))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(format!(
                "Upstream api_base must use http or https, got '{}'",
                url.scheme()
            ));
        }

        if self.auth_header.trim().is_empty() {
            return Err("Upstream auth_header cannot be empty".to_string());
        }

        if self.timeout == 0 {
            return Err("Upstream timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}

fn default_api_base() -> String {
    "https://api.sarvam.ai".to_string()
}

fn default_auth_header() -> String {
    "api-subscription-key".to_string()
}
