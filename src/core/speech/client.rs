//! HTTP client for the upstream speech APIs

use super::types::Stage;
use crate::config::UpstreamConfig;
use crate::utils::error::{GatewayError, Result};
use reqwest::RequestBuilder;
use reqwest::multipart::Form;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Longest upstream error body echoed into the logs
const MAX_LOGGED_BODY: usize = 512;

/// Shared client for the three upstream stages.
///
/// Holds one connection pool; every call carries the subscription key header.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    config: UpstreamConfig,
}

impl UpstreamClient {
    /// Create a client with the configured per-call timeout
    pub fn new(config: UpstreamConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("speechbridge/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GatewayError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { http, config })
    }

    /// POST a JSON body to the stage endpoint and decode the JSON answer
    pub async fn post_json<B, R>(&self, stage: Stage, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.config.endpoint(stage.endpoint_path());
        self.send(stage, self.http.post(url).json(body)).await
    }

    /// POST a multipart form to the stage endpoint and decode the JSON answer
    pub async fn post_multipart<R>(&self, stage: Stage, form: Form) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let url = self.config.endpoint(stage.endpoint_path());
        self.send(stage, self.http.post(url).multipart(form)).await
    }

    async fn send<R>(&self, stage: Stage, request: RequestBuilder) -> Result<R>
    where
        R: DeserializeOwned,
    {
        debug!(stage = %stage, "Calling upstream");

        let response = request
            .header(self.config.auth_header.as_str(), self.config.api_key.as_str())
            .send()
            .await
            .map_err(|e| {
                warn!(stage = %stage, error = %e, "Upstream request failed");
                if e.is_timeout() {
                    GatewayError::network(format!("{} request timed out", stage))
                } else {
                    GatewayError::network(format!("{} request failed: {}", stage, e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(
                stage = %stage,
                status = status.as_u16(),
                body = %truncate(&body, MAX_LOGGED_BODY),
                "Upstream returned non-success status"
            );
            return Err(GatewayError::upstream_status(stage, status.as_u16()));
        }

        let bytes = response.bytes().await.map_err(|e| {
            GatewayError::network(format!("Failed to read {} response: {}", stage, e))
        })?;

        serde_json::from_slice(&bytes).map_err(|e| {
            warn!(stage = %stage, error = %e, "Upstream response did not match the expected shape");
            GatewayError::upstream_contract(stage.missing_field_message())
        })
    }
}

fn truncate(body: &str, max: usize) -> &str {
    if body.len() <= max {
        return body;
    }
    let mut end = max;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}
