//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::speech::SpeechPipeline;
use crate::utils::error::Result;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Everything here is read-only after startup; workers share it through `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Gateway configuration
    pub config: Arc<Config>,
    /// Speech-to-speech translation pipeline
    pub pipeline: Arc<SpeechPipeline>,
}

impl AppState {
    /// Build the state from validated configuration
    pub fn new(config: Config) -> Result<Self> {
        let pipeline = SpeechPipeline::new(&config)?;

        Ok(Self {
            config: Arc::new(config),
            pipeline: Arc::new(pipeline),
        })
    }

    /// Get gateway configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
