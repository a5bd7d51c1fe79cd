//! Mock upstream speech APIs

use super::TEST_API_KEY;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TRANSCRIBE_PATH: &str = "/speech-to-text-translate";
pub const TRANSLATE_PATH: &str = "/translate";
pub const SYNTHESIZE_PATH: &str = "/text-to-speech";

/// Upstream answering every stage successfully, each exactly once
pub async fn healthy_upstream(transcript: &str, translated: &str, audio: &[u8]) -> MockServer {
    let server = MockServer::start().await;
    mount_transcription(&server, transcript, 1).await;
    mount_translation(&server, translated, 1).await;
    mount_synthesis(&server, audio, 1).await;
    server
}

pub async fn mount_transcription(server: &MockServer, transcript: &str, expected: u64) {
    Mock::given(method("POST"))
        .and(path(TRANSCRIBE_PATH))
        .and(header("api-subscription-key", TEST_API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "transcript": transcript,
            "language_code": "en-IN"
        })))
        .expect(expected)
        .mount(server)
        .await;
}

pub async fn mount_translation(server: &MockServer, translated: &str, expected: u64) {
    Mock::given(method("POST"))
        .and(path(TRANSLATE_PATH))
        .and(header("api-subscription-key", TEST_API_KEY))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "translated_text": translated })),
        )
        .expect(expected)
        .mount(server)
        .await;
}

pub async fn mount_synthesis(server: &MockServer, audio: &[u8], expected: u64) {
    Mock::given(method("POST"))
        .and(path(SYNTHESIZE_PATH))
        .and(header("api-subscription-key", TEST_API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "audios": [encode(audio)] })))
        .expect(expected)
        .mount(server)
        .await;
}

/// Synthesis for one target language, answered after `delay`
pub async fn mount_synthesis_for(
    server: &MockServer,
    target_language_code: &str,
    audio: &[u8],
    delay: Duration,
) {
    Mock::given(method("POST"))
        .and(path(SYNTHESIZE_PATH))
        .and(body_partial_json(json!({ "target_language_code": target_language_code })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "audios": [encode(audio)] }))
                .set_delay(delay),
        )
        .expect(1)
        .mount(server)
        .await;
}

/// Stage answering with `status`
pub async fn mount_failure(server: &MockServer, stage_path: &str, status: u16, expected: u64) {
    Mock::given(method("POST"))
        .and(path(stage_path))
        .respond_with(ResponseTemplate::new(status).set_body_string("upstream failure"))
        .expect(expected)
        .mount(server)
        .await;
}

/// Stage answering 200 with an arbitrary JSON body
pub async fn mount_body(
    server: &MockServer,
    stage_path: &str,
    body: serde_json::Value,
    expected: u64,
) {
    Mock::given(method("POST"))
        .and(path(stage_path))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(expected)
        .mount(server)
        .await;
}

pub fn encode(audio: &[u8]) -> String {
    STANDARD.encode(audio)
}
