//! Speech-to-speech translation endpoint tests

#[cfg(test)]
mod tests {
    use crate::common::upstream::{
        TRANSCRIBE_PATH, healthy_upstream, mount_failure, mount_synthesis, mount_transcription,
        mount_translation,
    };
    use crate::common::{FormPart, app_state, test_config, translate_request};
    use actix_web::http::StatusCode;
    use actix_web::test;
    use speechbridge::config::{ErrorMode, OutputMode};
    use speechbridge::server::HttpServer;
    use speechbridge::utils::error::ErrorResponse;
    use wiremock::MockServer;

    const WAV: &[u8] = b"RIFF\x24\x00\x00\x00WAVEfmt ";
    const SPEECH: &[u8] = b"RIFF-translated-speech";

    /// Happy path in shared mode: fixed URL, decoded bytes on disk
    #[actix_web::test]
    async fn test_translate_shared_mode_writes_output_audio() {
        let upstream = healthy_upstream("good morning", "suprabhat", SPEECH).await;
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(
            &upstream.uri(),
            dir.path(),
            OutputMode::Shared,
            ErrorMode::Inline,
        );
        let app = test::init_service(HttpServer::create_app(app_state(config).await)).await;

        let req = translate_request(&[
            FormPart::audio("audio/wav", WAV),
            FormPart::text("target_language_code", "hi-IN"),
        ])
        .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            serde_json::json!({
                "message": "Success",
                "output_audio_url": "/static/output_audio.wav"
            })
        );

        let written = std::fs::read(dir.path().join("output_audio.wav")).unwrap();
        assert_eq!(written, SPEECH);
    }

    /// Per-request mode hands back a distinct file that the static route serves
    #[actix_web::test]
    async fn test_translate_per_request_mode_serves_result() {
        let upstream = healthy_upstream("good morning", "suprabhat", SPEECH).await;
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(
            &upstream.uri(),
            dir.path(),
            OutputMode::PerRequest,
            ErrorMode::Inline,
        );
        let app = test::init_service(HttpServer::create_app(app_state(config).await)).await;

        let req = translate_request(&[
            FormPart::audio("audio/mpeg", WAV),
            FormPart::text("target_language_code", "ta-IN"),
        ])
        .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        let url = body["output_audio_url"].as_str().unwrap().to_string();
        assert!(url.starts_with("/static/outputs/"), "{}", url);
        assert!(url.ends_with(".wav"), "{}", url);

        let relative = url.trim_start_matches("/static/");
        assert_eq!(std::fs::read(dir.path().join(relative)).unwrap(), SPEECH);

        let resp = test::call_service(&app, test::TestRequest::get().uri(&url).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(test::read_body(resp).await, SPEECH);
    }

    /// Every supported type reaches the upstream, whatever its case
    #[actix_web::test]
    async fn test_supported_content_types_accepted() {
        let types = ["audio/mpeg", "audio/wav", "audio/mp3", "audio/x-wav", "AUDIO/WAV"];
        let upstream = MockServer::start().await;
        mount_transcription(&upstream, "hello", types.len() as u64).await;
        mount_translation(&upstream, "namaste", types.len() as u64).await;
        mount_synthesis(&upstream, SPEECH, types.len() as u64).await;

        let dir = tempfile::tempdir().unwrap();
        let config = test_config(
            &upstream.uri(),
            dir.path(),
            OutputMode::PerRequest,
            ErrorMode::Inline,
        );
        let app = test::init_service(HttpServer::create_app(app_state(config).await)).await;

        for content_type in types {
            let req = translate_request(&[
                FormPart::audio(content_type, WAV),
                FormPart::text("target_language_code", "hi-IN"),
            ])
            .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK, "{}", content_type);
        }
    }

    /// Unsupported types are rejected before any upstream call
    #[actix_web::test]
    async fn test_unsupported_content_type_rejected() {
        let upstream = MockServer::start().await;
        mount_failure(&upstream, TRANSCRIBE_PATH, 500, 0).await;

        let dir = tempfile::tempdir().unwrap();
        let config = test_config(
            &upstream.uri(),
            dir.path(),
            OutputMode::Shared,
            ErrorMode::Inline,
        );
        let app = test::init_service(HttpServer::create_app(app_state(config).await)).await;

        for content_type in ["audio/ogg", "audio/webm", "text/plain"] {
            let req = translate_request(&[
                FormPart::audio(content_type, WAV),
                FormPart::text("target_language_code", "hi-IN"),
            ])
            .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{}", content_type);

            let body: ErrorResponse = test::read_body_json(resp).await;
            assert_eq!(body.code, "UNSUPPORTED_MEDIA_TYPE");
            assert!(body.detail.contains("audio/mpeg, audio/wav, audio/mp3, audio/x-wav"));
        }

        assert!(!dir.path().join("output_audio.wav").exists());
    }

    #[actix_web::test]
    async fn test_missing_fields_rejected() {
        let upstream = MockServer::start().await;
        mount_failure(&upstream, TRANSCRIBE_PATH, 500, 0).await;

        let dir = tempfile::tempdir().unwrap();
        let config = test_config(
            &upstream.uri(),
            dir.path(),
            OutputMode::Shared,
            ErrorMode::Inline,
        );
        let app = test::init_service(HttpServer::create_app(app_state(config).await)).await;

        let forms = [
            vec![FormPart::text("target_language_code", "hi-IN")],
            vec![FormPart::audio("audio/wav", WAV)],
            vec![
                FormPart::audio("audio/wav", WAV),
                FormPart::text("target_language_code", ""),
            ],
            vec![
                FormPart::audio("audio/wav", b""),
                FormPart::text("target_language_code", "hi-IN"),
            ],
        ];

        for form in forms {
            let resp = test::call_service(&app, translate_request(&form).to_request()).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

            let body: ErrorResponse = test::read_body_json(resp).await;
            assert_eq!(body.code, "VALIDATION_ERROR");
        }
    }

    #[actix_web::test]
    async fn test_oversized_upload_rejected() {
        let upstream = MockServer::start().await;
        mount_failure(&upstream, TRANSCRIBE_PATH, 500, 0).await;

        let dir = tempfile::tempdir().unwrap();
        let mut config = test_config(
            &upstream.uri(),
            dir.path(),
            OutputMode::Shared,
            ErrorMode::Inline,
        );
        config.server.max_body_size = 16;
        let app = test::init_service(HttpServer::create_app(app_state(config).await)).await;

        let req = translate_request(&[
            FormPart::audio("audio/wav", &[7u8; 64]),
            FormPart::text("target_language_code", "hi-IN"),
        ])
        .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[actix_web::test]
    async fn test_route_without_trailing_slash() {
        let upstream = healthy_upstream("hello", "namaste", SPEECH).await;
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(
            &upstream.uri(),
            dir.path(),
            OutputMode::Shared,
            ErrorMode::Inline,
        );
        let app = test::init_service(HttpServer::create_app(app_state(config).await)).await;

        let req = translate_request(&[
            FormPart::audio("audio/wav", WAV),
            FormPart::text("target_language_code", "hi-IN"),
        ])
        .uri("/speech-to-speech-translate")
        .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp.headers().contains_key("x-request-id"));
    }
}
