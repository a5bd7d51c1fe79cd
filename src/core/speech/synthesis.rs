//! Text-to-speech stage

use super::client::UpstreamClient;
use super::types::{
    Stage, SynthesisRequestBody, SynthesisResponseBody, SynthesizedAudio, TranslatedText,
};
use crate::config::SynthesisParams;
use crate::utils::error::{GatewayError, Result};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use std::sync::Arc;
use tracing::{info, warn};

/// Speaks the translated text in the target language
pub struct SynthesisService {
    client: Arc<UpstreamClient>,
    params: SynthesisParams,
}

impl SynthesisService {
    pub fn new(client: Arc<UpstreamClient>, params: SynthesisParams) -> Self {
        Self { client, params }
    }

    /// Convert text to speech
    pub async fn synthesize(
        &self,
        text: &TranslatedText,
        target_language_code: &str,
    ) -> Result<SynthesizedAudio> {
        info!(
            "Synthesizing speech: model={}, speaker={}, target={}",
            self.params.model, self.params.speaker, target_language_code
        );

        let request = build_request(text, target_language_code, &self.params);
        let body: SynthesisResponseBody =
            self.client.post_json(Stage::Synthesis, &request).await?;

        decode_first_audio(body)
    }
}

pub(crate) fn build_request<'a>(
    text: &'a TranslatedText,
    target_language_code: &'a str,
    params: &'a SynthesisParams,
) -> SynthesisRequestBody<'a> {
    SynthesisRequestBody {
        inputs: vec![text.0.as_str()],
        target_language_code,
        speaker: &params.speaker,
        pitch: params.pitch,
        pace: params.pace,
        loudness: params.loudness,
        speech_sample_rate: params.speech_sample_rate,
        model: &params.model,
        enable_preprocessing: params.enable_preprocessing,
    }
}

/// Decode the first base64 item of `audios`; the rest are ignored
pub(crate) fn decode_first_audio(body: SynthesisResponseBody) -> Result<SynthesizedAudio> {
    let missing = || GatewayError::upstream_contract(Stage::Synthesis.missing_field_message());

    let encoded = body
        .audios
        .and_then(|audios| audios.into_iter().next())
        .filter(|audio| !audio.is_empty())
        .ok_or_else(missing)?;

    STANDARD
        .decode(encoded.trim())
        .map(SynthesizedAudio)
        .map_err(|e| {
            warn!(error = %e, "Synthesized audio is not valid base64");
            missing()
        })
}
