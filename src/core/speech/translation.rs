//! Text translation stage

use super::client::UpstreamClient;
use super::types::{
    Stage, Transcript, TranslatedText, TranslationRequestBody, TranslationResponseBody,
};
use crate::config::TranslationParams;
use crate::utils::error::{GatewayError, Result};
use std::sync::Arc;
use tracing::info;

/// Translates the English transcript into the caller's target language
pub struct TranslationService {
    client: Arc<UpstreamClient>,
    params: TranslationParams,
}

impl TranslationService {
    pub fn new(client: Arc<UpstreamClient>, params: TranslationParams) -> Self {
        Self { client, params }
    }

    /// Translate text into `target_language_code`
    pub async fn translate(
        &self,
        transcript: &Transcript,
        target_language_code: &str,
    ) -> Result<TranslatedText> {
        info!(
            "Translating text: model={}, target={}, text_len={}",
            self.params.model,
            target_language_code,
            transcript.0.len()
        );

        let request = build_request(transcript, target_language_code, &self.params);
        let body: TranslationResponseBody =
            self.client.post_json(Stage::Translation, &request).await?;

        match body.translated_text {
            Some(text) if !text.is_empty() => Ok(TranslatedText(text)),
            _ => Err(GatewayError::upstream_contract(
                Stage::Translation.missing_field_message(),
            )),
        }
    }
}

pub(crate) fn build_request<'a>(
    transcript: &'a Transcript,
    target_language_code: &'a str,
    params: &'a TranslationParams,
) -> TranslationRequestBody<'a> {
    TranslationRequestBody {
        input: &transcript.0,
        source_language_code: &params.source_language_code,
        target_language_code,
        speaker_gender: &params.speaker_gender,
        mode: &params.mode,
        model: &params.model,
        enable_preprocessing: params.enable_preprocessing,
    }
}
