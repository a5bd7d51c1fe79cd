//! Output audio placement

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where synthesized audio is written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputMode {
    /// One file per request under `per_request_dir`
    #[default]
    PerRequest,
    /// Every request overwrites `shared_file_name`; concurrent requests race
    Shared,
}

/// Static directory and output file layout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory served under `url_prefix`; also holds `index.html`
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
    #[serde(default)]
    pub mode: OutputMode,
    #[serde(default = "default_shared_file_name")]
    pub shared_file_name: String,
    /// Subdirectory of `static_dir` for per-request files
    #[serde(default = "default_per_request_dir")]
    pub per_request_dir: String,
    /// Public mount point of `static_dir`
    #[serde(default = "default_url_prefix")]
    pub url_prefix: String,
    /// Per-request files older than this many seconds are deleted; 0 keeps them forever
    #[serde(default = "default_retention_secs")]
    pub retention_secs: u64,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            static_dir: default_static_dir(),
            mode: OutputMode::default(),
            shared_file_name: default_shared_file_name(),
            per_request_dir: default_per_request_dir(),
            url_prefix: default_url_prefix(),
            retention_secs: default_retention_secs(),
        }
    }
}

impl OutputConfig {
    /// Validate output configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.static_dir.as_os_str().is_empty() {
            return Err("output.static_dir cannot be empty".to_string());
        }

        if !self.url_prefix.starts_with('/') || self.url_prefix.len() < 2 {
            return Err(format!(
                "output.url_prefix must be an absolute path below '/', got '{}'",
                self.url_prefix
            ));
        }

        for (name, value) in [
            ("output.shared_file_name", &self.shared_file_name),
            ("output.per_request_dir", &self.per_request_dir),
        ] {
            if value.is_empty() || value.contains('/') || value.contains('\\') || value == ".." {
                return Err(format!("{} must be a single path segment", name));
            }
        }

        Ok(())
    }
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

fn default_shared_file_name() -> String {
    "output_audio.wav".to_string()
}

fn default_per_request_dir() -> String {
    "outputs".to_string()
}

fn default_url_prefix() -> String {
    "/static".to_string()
}

fn default_retention_secs() -> u64 {
    24 * 60 * 60
}
