//! HTTP route handlers
//!
//! This module provides the handlers that are not part of the API routes.

use crate::server::state::AppState;
use crate::utils::error::{GatewayError, Result};
use actix_files::NamedFile;
use actix_web::{HttpResponse, web};
use serde_json::json;

/// Name of the homepage inside the static directory
pub const INDEX_FILE: &str = "index.html";

/// Health check endpoint handler
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "git_hash": env!("GIT_HASH"),
    }))
}

/// Serve the browser page
pub async fn homepage(state: web::Data<AppState>) -> Result<NamedFile> {
    let path = state.config.output.static_dir.join(INDEX_FILE);

    NamedFile::open_async(&path)
        .await
        .map_err(|e| GatewayError::not_found(format!("{}: {}", INDEX_FILE, e)))
}
