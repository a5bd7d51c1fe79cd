//! Speech pipeline type definitions
//!
//! Request-scoped values passed between the stages, plus the upstream wire
//! bodies.

use crate::utils::error::{GatewayError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Content types accepted for uploaded audio
pub const SUPPORTED_CONTENT_TYPES: &[&str] =
    &["audio/mpeg", "audio/wav", "audio/mp3", "audio/x-wav"];

/// Extension of synthesized audio files
pub const OUTPUT_EXTENSION: &str = "wav";

/// One upstream call of the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Transcription,
    Translation,
    Synthesis,
}

impl Stage {
    /// Endpoint path relative to the upstream base URL
    pub fn endpoint_path(&self) -> &'static str {
        match self {
            Stage::Transcription => "/speech-to-text-translate",
            Stage::Translation => "/translate",
            Stage::Synthesis => "/text-to-speech",
        }
    }

    /// Message returned when the stage answers with a non-success status
    pub fn failure_message(&self) -> &'static str {
        match self {
            Stage::Transcription => "Failed in Speech-to-Text API",
            Stage::Translation => "Failed in Translation API",
            Stage::Synthesis => "Failed in Text-to-Speech API",
        }
    }

    /// Message returned when a successful answer lacks the expected field
    pub fn missing_field_message(&self) -> &'static str {
        match self {
            Stage::Transcription => "Speech-to-Text API did not return transcription.",
            Stage::Translation => "Translate Text API did not return.",
            Stage::Synthesis => "Text-To-Speech API did not return.",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Transcription => "transcription",
            Stage::Translation => "translation",
            Stage::Synthesis => "synthesis",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check a declared upload content type against [`SUPPORTED_CONTENT_TYPES`].
///
/// Only the `type/subtype` essence is compared, case-insensitively.
pub fn validate_content_type(content_type: &str) -> Result<()> {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    if SUPPORTED_CONTENT_TYPES.contains(&essence.as_str()) {
        Ok(())
    } else {
        Err(GatewayError::unsupported_media_type(format!(
            "Unsupported file type: {}. Supported types are: {}",
            content_type,
            SUPPORTED_CONTENT_TYPES.join(", ")
        )))
    }
}

/// Uploaded audio clip
#[derive(Debug, Clone)]
pub struct UploadedAudio {
    /// Raw audio bytes
    pub bytes: Vec<u8>,
    /// Declared MIME type
    pub content_type: String,
    /// Original filename
    pub filename: String,
}

impl UploadedAudio {
    /// Build an upload, rejecting unsupported content types
    pub fn new(
        bytes: Vec<u8>,
        content_type: impl Into<String>,
        filename: impl Into<String>,
    ) -> Result<Self> {
        let content_type = content_type.into();
        validate_content_type(&content_type)?;
        Ok(Self {
            bytes,
            content_type,
            filename: filename.into(),
        })
    }
}

/// English text produced by transcription
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript(pub String);

/// Text in the target language produced by translation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatedText(pub String);

/// Decoded audio produced by synthesis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizedAudio(pub Vec<u8>);

/// Persisted output audio
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredAudio {
    /// Location on disk
    pub path: PathBuf,
    /// Public URL under the static mount
    pub url: String,
}

/// Speech-to-text-translate response
#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionResponseBody {
    #[serde(default)]
    pub transcript: Option<String>,
}

/// Translate request
#[derive(Debug, Clone, Serialize)]
pub struct TranslationRequestBody<'a> {
    pub input: &'a str,
    pub source_language_code: &'a str,
    pub target_language_code: &'a str,
    pub speaker_gender: &'a str,
    pub mode: &'a str,
    pub model: &'a str,
    pub enable_preprocessing: bool,
}

/// Translate response
#[derive(Debug, Clone, Deserialize)]
pub struct TranslationResponseBody {
    #[serde(default)]
    pub translated_text: Option<String>,
}

/// Text-to-speech request
#[derive(Debug, Clone, Serialize)]
pub struct SynthesisRequestBody<'a> {
    pub inputs: Vec<&'a str>,
    pub target_language_code: &'a str,
    pub speaker: &'a str,
    pub pitch: f32,
    pub pace: f32,
    pub loudness: f32,
    pub speech_sample_rate: u32,
    pub model: &'a str,
    pub enable_preprocessing: bool,
}

/// Text-to-speech response; `audios` holds base64 strings
#[derive(Debug, Clone, Deserialize)]
pub struct SynthesisResponseBody {
    #[serde(default)]
    pub audios: Option<Vec<String>>,
}
