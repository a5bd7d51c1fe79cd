//! Common test utilities for speechbridge

pub mod multipart;
pub mod upstream;

pub use multipart::{FormPart, translate_request};

use actix_web::web;
use speechbridge::config::{Config, ErrorMode, OutputMode};
use speechbridge::server::AppState;
use std::path::Path;

/// API key the mock upstream expects
pub const TEST_API_KEY: &str = "test-subscription-key";

/// Configuration against a mock upstream at `api_base`, writing into `static_dir`
pub fn test_config(
    api_base: &str,
    static_dir: &Path,
    mode: OutputMode,
    error_mode: ErrorMode,
) -> Config {
    let mut config = Config::default();
    config.upstream.api_key = TEST_API_KEY.to_string();
    config.upstream.api_base = api_base.to_string();
    config.upstream.timeout = 10;
    config.output.static_dir = static_dir.to_path_buf();
    config.output.mode = mode;
    config.pipeline.error_mode = error_mode;
    config
}

/// Application state with its output directories created
pub async fn app_state(config: Config) -> web::Data<AppState> {
    let state = AppState::new(config).expect("valid test config");
    state
        .pipeline
        .output()
        .prepare()
        .await
        .expect("output directory");
    web::Data::new(state)
}
