//! Speech-to-speech translation endpoint

use crate::config::ErrorMode;
use crate::core::speech::{UploadedAudio, validate_content_type};
use crate::server::middleware::request_id;
use crate::server::state::AppState;
use crate::utils::error::{GatewayError, Result};
use actix_multipart::{Field, Multipart};
use actix_web::{HttpRequest, HttpResponse, web};
use futures::StreamExt;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

/// Upper bound for the text fields of the form
const MAX_TEXT_FIELD: usize = 1024;

/// Filename used when the upload carries none
const DEFAULT_FILENAME: &str = "audio.wav";

/// Successful translation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub message: String,
    pub output_audio_url: String,
}

impl TranslateResponse {
    pub fn success(output_audio_url: String) -> Self {
        Self {
            message: "Success".to_string(),
            output_audio_url,
        }
    }
}

/// Stage failure reported with HTTP 200 in [`ErrorMode::Inline`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InlineErrorResponse {
    pub error: String,
}

/// Parsed multipart form
#[derive(Debug, Default)]
struct TranslateForm {
    audio: Option<UploadedAudio>,
    target_language_code: Option<String>,
}

/// Speech-to-speech translation endpoint
///
/// Accepts multipart/form-data with an `audio` file and a
/// `target_language_code` text field.
pub async fn speech_to_speech_translate(
    state: web::Data<AppState>,
    req: HttpRequest,
    mut payload: Multipart,
) -> Result<HttpResponse> {
    let request_id = request_id(&req);
    info!(request_id = %request_id, "Speech-to-speech translation request");

    let form = read_form(&mut payload, state.config.server.max_body_size).await?;

    let audio = form
        .audio
        .ok_or_else(|| GatewayError::validation("Missing form field: audio"))?;
    let target_language_code = form
        .target_language_code
        .ok_or_else(|| GatewayError::validation("Missing form field: target_language_code"))?;

    match state
        .pipeline
        .run(&request_id, audio, &target_language_code)
        .await
    {
        Ok(stored) => Ok(HttpResponse::Ok().json(TranslateResponse::success(stored.url))),
        Err(e) => render_pipeline_error(state.config.pipeline.error_mode, e),
    }
}

/// Map a pipeline failure onto the wire according to `mode`
pub fn render_pipeline_error(mode: ErrorMode, error: GatewayError) -> Result<HttpResponse> {
    match (mode, error.failed_stage()) {
        (ErrorMode::Inline, Some(stage)) => Ok(HttpResponse::Ok().json(InlineErrorResponse {
            error: stage.failure_message().to_string(),
        })),
        _ => {
            if !error.is_client_error() {
                error!("Translation error: {}", error);
            }
            Err(error)
        }
    }
}

async fn read_form(payload: &mut Multipart, max_audio_size: usize) -> Result<TranslateForm> {
    let mut form = TranslateForm::default();

    while let Some(item) = payload.next().await {
        let mut field = item
            .map_err(|e| GatewayError::validation(format!("Invalid multipart data: {}", e)))?;

        let field_name = match field.name() {
            Some(name) => name.to_string(),
            None => continue,
        };

        match field_name.as_str() {
            "audio" => {
                let content_type = field
                    .content_type()
                    .map(|mime| mime.to_string())
                    .unwrap_or_default();
                // Rejected before the body is read
                validate_content_type(&content_type)?;

                let filename = field
                    .content_disposition()
                    .and_then(|cd| cd.get_filename())
                    .filter(|name| !name.is_empty())
                    .unwrap_or(DEFAULT_FILENAME)
                    .to_string();

                let bytes = read_field(&mut field, max_audio_size, "audio file").await?;
                if bytes.is_empty() {
                    return Err(GatewayError::validation("Uploaded audio file is empty"));
                }

                debug!("Received audio: {} ({} bytes)", filename, bytes.len());
                form.audio = Some(UploadedAudio::new(bytes, content_type, filename)?);
            }
            "target_language_code" => {
                let bytes = read_field(&mut field, MAX_TEXT_FIELD, "target_language_code").await?;
                let value = String::from_utf8(bytes).map_err(|_| {
                    GatewayError::validation("target_language_code must be valid UTF-8")
                })?;
                if !value.is_empty() {
                    form.target_language_code = Some(value);
                }
            }
            _ => {
                // Skip unknown fields
                while field.next().await.is_some() {}
            }
        }
    }

    Ok(form)
}

async fn read_field(field: &mut Field, limit: usize, what: &str) -> Result<Vec<u8>> {
    let mut data = Vec::new();

    while let Some(chunk) = field.next().await {
        let bytes = chunk.map_err(|e| {
            GatewayError::validation(format!("Failed to read {}: {}", what, e))
        })?;

        if data.len() + bytes.len() > limit {
            return Err(GatewayError::payload_too_large(format!(
                "{} exceeds {} bytes",
                what, limit
            )));
        }
        data.extend_from_slice(&bytes);
    }

    Ok(data)
}
