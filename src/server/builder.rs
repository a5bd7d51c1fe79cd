//! Server builder and run_server function
//!
//! This module provides the ServerBuilder for easier server configuration
//! and the run_server function for automatic configuration loading.

use crate::config::{Config, LoggingConfig};
use crate::server::server::HttpServer;
use crate::utils::error::{GatewayError, Result};
use crate::utils::logging::init_tracing;
use std::path::PathBuf;
use tracing::{error, info};

/// Server builder for easier configuration
#[derive(Default)]
pub struct ServerBuilder {
    config: Option<Config>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the HTTP server
    pub async fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| GatewayError::Config("Configuration is required".to_string()))?;

        config.validate()?;
        HttpServer::new(&config).await
    }
}

/// Load configuration, install logging and serve until shutdown
pub async fn run_server(config_path: Option<PathBuf>) -> Result<()> {
    let config = match Config::load(config_path).await {
        Ok(config) => {
            init_tracing(&config.logging);
            config
        }
        Err(e) => {
            init_tracing(&LoggingConfig::default());
            error!("Configuration loading failed: {}", e);
            return Err(e);
        }
    };

    info!("Starting speechbridge {}", crate::VERSION);
    info!("Upstream: {}", config.upstream.api_base);
    info!(
        "Output: {:?} mode, static files from {}",
        config.output.mode,
        config.output.static_dir.display()
    );
    info!("Stage failures reported as: {:?}", config.pipeline.error_mode);

    let server = ServerBuilder::new().with_config(config.clone()).build().await?;
    info!(
        "Server starting at: http://{}",
        config.server().address()
    );
    info!("API Endpoints:");
    info!("   GET  / - Browser page");
    info!("   GET  /health - Health check");
    info!("   GET  {}/* - Static files", config.output.url_prefix);
    info!("   POST /speech-to-speech-translate/ - Speech-to-speech translation");

    server.start().await
}
