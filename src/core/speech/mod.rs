//! Speech-to-speech translation pipeline
//!
//! Runs transcription, translation and synthesis strictly in sequence,
//! feeding each stage's output to the next, and persists the final audio.
//! The first failing stage ends the run; nothing is written in that case.

mod client;
mod output;
mod synthesis;
mod transcription;
mod translation;
mod types;


use crate::config::Config;
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::{Instrument, info, info_span, warn};

pub use client::UpstreamClient;
pub use output::{OutputStore, SWEEP_INTERVAL};
pub use types::{
    OUTPUT_EXTENSION, SUPPORTED_CONTENT_TYPES, Stage, StoredAudio, SynthesizedAudio, Transcript,
    TranslatedText, UploadedAudio, validate_content_type,
};

use synthesis::SynthesisService;
use transcription::TranscriptionService;
use translation::TranslationService;

/// The speech-to-speech translation pipeline
pub struct SpeechPipeline {
    transcription: TranscriptionService,
    translation: TranslationService,
    synthesis: SynthesisService,
    output: OutputStore,
}

impl SpeechPipeline {
    /// Create a pipeline from validated configuration
    pub fn new(config: &Config) -> Result<Self> {
        let client = Arc::new(UpstreamClient::new(config.upstream.clone())?);

        Ok(Self {
            transcription: TranscriptionService::new(
                Arc::clone(&client),
                config.pipeline.transcription.clone(),
            ),
            translation: TranslationService::new(
                Arc::clone(&client),
                config.pipeline.translation.clone(),
            ),
            synthesis: SynthesisService::new(client, config.pipeline.synthesis.clone()),
            output: OutputStore::new(&config.output),
        })
    }

    /// Output store used for the final write
    pub fn output(&self) -> &OutputStore {
        &self.output
    }

    /// Translate `audio` into speech in `target_language_code`
    pub async fn run(
        &self,
        request_id: &str,
        audio: UploadedAudio,
        target_language_code: &str,
    ) -> Result<StoredAudio> {
        info!(
            request_id = %request_id,
            target = target_language_code,
            filename = %audio.filename,
            "Starting speech-to-speech translation"
        );

        // Stage logs inherit the request id and target from this span
        let span = info_span!(
            "speech_pipeline",
            request_id = %request_id,
            target = target_language_code
        );
        let result = self
            .run_stages(request_id, audio, target_language_code)
            .instrument(span)
            .await;

        match &result {
            Ok(stored) => {
                info!(request_id = %request_id, url = %stored.url, "Translation complete")
            }
            Err(e) => {
                warn!(request_id = %request_id, error = %e, "Translation pipeline stopped")
            }
        }
        result
    }

    async fn run_stages(
        &self,
        request_id: &str,
        audio: UploadedAudio,
        target_language_code: &str,
    ) -> Result<StoredAudio> {
        let transcript = self.transcription.transcribe(audio).await?;
        let translated = self
            .translation
            .translate(&transcript, target_language_code)
            .await?;
        let speech = self
            .synthesis
            .synthesize(&translated, target_language_code)
            .await?;

        self.output.persist(request_id, &speech).await
    }
}
