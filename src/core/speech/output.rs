//! Output audio persistence

use super::types::{OUTPUT_EXTENSION, StoredAudio, SynthesizedAudio};
use crate::config::{OutputConfig, OutputMode};
use crate::utils::error::{GatewayError, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tokio::fs;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// How often a running server sweeps expired per-request files
pub const SWEEP_INTERVAL: Duration = Duration::from_secs(300);

/// Writes synthesized audio below the static directory
#[derive(Debug, Clone)]
pub struct OutputStore {
    static_dir: PathBuf,
    mode: OutputMode,
    shared_file_name: String,
    per_request_dir: String,
    url_prefix: String,
    retention: Option<Duration>,
}

impl OutputStore {
    pub fn new(config: &OutputConfig) -> Self {
        Self {
            static_dir: config.static_dir.clone(),
            mode: config.mode,
            shared_file_name: config.shared_file_name.clone(),
            per_request_dir: config.per_request_dir.clone(),
            url_prefix: config.url_prefix.trim_end_matches('/').to_string(),
            retention: (config.retention_secs > 0)
                .then(|| Duration::from_secs(config.retention_secs)),
        }
    }

    pub fn static_dir(&self) -> &Path {
        &self.static_dir
    }

    /// Create the directories output files are written to
    pub async fn prepare(&self) -> Result<()> {
        let dir = match self.mode {
            OutputMode::Shared => self.static_dir.clone(),
            OutputMode::PerRequest => self.static_dir.join(&self.per_request_dir),
        };

        fs::create_dir_all(&dir).await.map_err(|e| {
            GatewayError::file_storage(format!(
                "Failed to create output directory {}: {}",
                dir.display(),
                e
            ))
        })?;

        info!("Output audio directory ready at: {}", dir.display());
        self.sweep_expired().await?;
        Ok(())
    }

    /// Whether [`sweep_expired`](Self::sweep_expired) can remove anything
    pub fn sweeps(&self) -> bool {
        self.mode == OutputMode::PerRequest && self.retention.is_some()
    }

    /// Delete per-request output files older than the retention period.
    ///
    /// Returns the number of files removed. The shared file is never touched.
    pub async fn sweep_expired(&self) -> Result<usize> {
        let max_age = match self.retention {
            Some(max_age) if self.mode == OutputMode::PerRequest => max_age,
            _ => return Ok(0),
        };

        let dir = self.static_dir.join(&self.per_request_dir);
        let mut entries = match fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
            Err(e) => {
                return Err(GatewayError::file_storage(format!(
                    "Failed to list {}: {}",
                    dir.display(),
                    e
                )));
            }
        };

        let now = SystemTime::now();
        let mut removed = 0;

        while let Some(entry) = entries.next_entry().await.map_err(|e| {
            GatewayError::file_storage(format!("Failed to list {}: {}", dir.display(), e))
        })? {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(OUTPUT_EXTENSION) {
                continue;
            }

            let modified = match entry.metadata().await.and_then(|m| m.modified()) {
                Ok(modified) => modified,
                Err(_) => continue,
            };
            let age = now.duration_since(modified).unwrap_or_default();
            if age <= max_age {
                continue;
            }

            match fs::remove_file(&path).await {
                Ok(()) => removed += 1,
                // Another sweep got there first
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => warn!("Failed to remove expired output {}: {}", path.display(), e),
            }
        }

        if removed > 0 {
            info!("Removed {} expired output files from {}", removed, dir.display());
        }
        Ok(removed)
    }

    /// Path and URL the output for `request_id` is written to.
    ///
    /// In per-request mode the file is named after the request id when it is a
    /// UUID, otherwise after a fresh one.
    pub fn locate(&self, request_id: &str) -> StoredAudio {
        match self.mode {
            OutputMode::Shared => StoredAudio {
                path: self.static_dir.join(&self.shared_file_name),
                url: format!("{}/{}", self.url_prefix, self.shared_file_name),
            },
            OutputMode::PerRequest => {
                let id = Uuid::parse_str(request_id).unwrap_or_else(|_| Uuid::new_v4());
                let file_name = format!("{}.{}", id.simple(), OUTPUT_EXTENSION);
                StoredAudio {
                    path: self
                        .static_dir
                        .join(&self.per_request_dir)
                        .join(&file_name),
                    url: format!(
                        "{}/{}/{}",
                        self.url_prefix, self.per_request_dir, file_name
                    ),
                }
            }
        }
    }

    /// Write the audio, replacing whatever was at the target path
    pub async fn persist(&self, request_id: &str, audio: &SynthesizedAudio) -> Result<StoredAudio> {
        let stored = self.locate(request_id);

        if let Some(parent) = stored.path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                GatewayError::file_storage(format!("Failed to create directory: {}", e))
            })?;
        }

        fs::write(&stored.path, &audio.0).await.map_err(|e| {
            GatewayError::file_storage(format!(
                "Failed to write {}: {}",
                stored.path.display(),
                e
            ))
        })?;

        debug!(
            "Output audio written: {} ({} bytes)",
            stored.path.display(),
            audio.0.len()
        );
        Ok(stored)
    }
}
