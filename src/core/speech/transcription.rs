//! Speech-to-text stage

use super::client::UpstreamClient;
use super::types::{Stage, Transcript, TranscriptionResponseBody, UploadedAudio};
use crate::config::TranscriptionParams;
use crate::utils::error::{GatewayError, Result};
use reqwest::multipart::{Form, Part};
use std::sync::Arc;
use tracing::info;

/// Transcribes uploaded audio into English text
pub struct TranscriptionService {
    client: Arc<UpstreamClient>,
    params: TranscriptionParams,
}

impl TranscriptionService {
    pub fn new(client: Arc<UpstreamClient>, params: TranscriptionParams) -> Self {
        Self { client, params }
    }

    /// Transcribe audio to English text
    pub async fn transcribe(&self, audio: UploadedAudio) -> Result<Transcript> {
        info!(
            "Transcribing audio: model={}, file_size={}",
            self.params.model,
            audio.bytes.len()
        );

        let form = create_multipart_form(audio, &self.params)?;
        let body: TranscriptionResponseBody = self
            .client
            .post_multipart(Stage::Transcription, form)
            .await?;

        extract_transcript(body)
    }
}

/// Create multipart form for audio upload
pub(crate) fn create_multipart_form(
    audio: UploadedAudio,
    params: &TranscriptionParams,
) -> Result<Form> {
    let file_part = Part::bytes(audio.bytes)
        .file_name(audio.filename)
        .mime_str(&audio.content_type)
        .map_err(|e| GatewayError::validation(format!("Invalid MIME type: {}", e)))?;

    Ok(Form::new()
        .part("file", file_part)
        .text("model", params.model.clone())
        .text("prompt", params.prompt.clone()))
}

pub(crate) fn extract_transcript(body: TranscriptionResponseBody) -> Result<Transcript> {
    match body.transcript {
        Some(text) if !text.is_empty() => Ok(Transcript(text)),
        _ => Err(GatewayError::upstream_contract(
            Stage::Transcription.missing_field_message(),
        )),
    }
}
