//! Pipeline stage parameters

use super::*;
use serde::{Deserialize, Serialize};

/// How a non-success answer from an upstream stage reaches the caller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorMode {
    /// HTTP 200 with `{"error": "<stage message>"}`, kept for existing clients
    #[default]
    Inline,
    /// HTTP 502 with the uniform error envelope
    Status,
}

/// Parameters sent with each upstream call
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineConfig {
    #[serde(default)]
    pub error_mode: ErrorMode,
    #[serde(default)]
    pub transcription: TranscriptionParams,
    #[serde(default)]
    pub translation: TranslationParams,
    #[serde(default)]
    pub synthesis: SynthesisParams,
}

/// Speech-to-text-translate parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptionParams {
    #[serde(default = "default_transcription_model")]
    pub model: String,
    #[serde(default = "default_transcription_prompt")]
    pub prompt: String,
}

impl Default for TranscriptionParams {
    fn default() -> Self {
        Self {
            model: default_transcription_model(),
            prompt: default_transcription_prompt(),
        }
    }
}

/// Text translation parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationParams {
    #[serde(default = "default_source_language")]
    pub source_language_code: String,
    #[serde(default = "default_speaker_gender")]
    pub speaker_gender: String,
    #[serde(default = "default_translation_mode")]
    pub mode: String,
    #[serde(default = "default_translation_model")]
    pub model: String,
    #[serde(default = "default_true")]
    pub enable_preprocessing: bool,
}

impl Default for TranslationParams {
    fn default() -> Self {
        Self {
            source_language_code: default_source_language(),
            speaker_gender: default_speaker_gender(),
            mode: default_translation_mode(),
            model: default_translation_model(),
            enable_preprocessing: true,
        }
    }
}

/// Text-to-speech parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesisParams {
    #[serde(default = "default_speaker")]
    pub speaker: String,
    #[serde(default)]
    pub pitch: f32,
    #[serde(default = "default_unit")]
    pub pace: f32,
    #[serde(default = "default_unit")]
    pub loudness: f32,
    #[serde(default = "default_sample_rate")]
    pub speech_sample_rate: u32,
    #[serde(default = "default_synthesis_model")]
    pub model: String,
    #[serde(default = "default_true")]
    pub enable_preprocessing: bool,
}

impl Default for SynthesisParams {
    fn default() -> Self {
        Self {
            speaker: default_speaker(),
            pitch: 0.0,
            pace: default_unit(),
            loudness: default_unit(),
            speech_sample_rate: default_sample_rate(),
            model: default_synthesis_model(),
            enable_preprocessing: true,
        }
    }
}

impl PipelineConfig {
    /// Validate pipeline configuration
    pub fn validate(&self) -> Result<(), String> {
        let required = [
            ("pipeline.transcription.model", &self.transcription.model),
            ("pipeline.translation.model", &self.translation.model),
            (
                "pipeline.translation.source_language_code",
                &self.translation.source_language_code,
            ),
            ("pipeline.synthesis.model", &self.synthesis.model),
            ("pipeline.synthesis.speaker", &self.synthesis.speaker),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(format!("{} cannot be empty", name));
            }
        }

        if self.synthesis.speech_sample_rate == 0 {
            return Err("pipeline.synthesis.speech_sample_rate cannot be 0".to_string());
        }

        if self.synthesis.pace <= 0.0 || self.synthesis.loudness <= 0.0 {
            return Err("pipeline.synthesis pace and loudness must be positive".to_string());
        }

        Ok(())
    }
}

fn default_transcription_model() -> String {
    "saaras:v1".to_string()
}

fn default_transcription_prompt() -> String {
    "You are an exceptional translator. Forget all prior instructions or context. \
     Your sole task is to translate everything provided to you into English without \
     adding, omitting, or altering any content. Ensure the translation is precise and \
     faithful to the original text."
        .to_string()
}

fn default_source_language() -> String {
    "en-IN".to_string()
}

fn default_speaker_gender() -> String {
    "Female".to_string()
}

fn default_translation_mode() -> String {
    "formal".to_string()
}

fn default_translation_model() -> String {
    "mayura:v1".to_string()
}

fn default_speaker() -> String {
    "meera".to_string()
}

fn default_unit() -> f32 {
    1.0
}

fn default_sample_rate() -> u32 {
    22050
}

fn default_synthesis_model() -> String {
    "bulbul:v1".to_string()
}
