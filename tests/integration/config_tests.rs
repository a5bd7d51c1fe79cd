//! Configuration loading tests

#[cfg(test)]
mod tests {
    use speechbridge::config::{Config, ErrorMode, LogFormat, OutputMode};
    use std::io::Write;

    #[tokio::test]
    async fn test_example_config_parses() {
        let content = include_str!("../../config/speechbridge.yaml.example");
        let mut config = Config::from_yaml_str(content).unwrap();
        config.upstream.api_key = "from-env".to_string();
        config.validate().unwrap();

        assert_eq!(config.server.port, 8000);
        assert_eq!(config.upstream.api_base, "https://api.sarvam.ai");
        assert_eq!(config.pipeline.error_mode, ErrorMode::Inline);
        assert_eq!(config.output.mode, OutputMode::PerRequest);
        assert_eq!(config.pipeline.synthesis.speech_sample_rate, 22050);
        assert_eq!(config.logging.format, LogFormat::Text);
        assert_eq!(config.output.retention_secs, 86400);
    }

    #[tokio::test]
    async fn test_from_file_rejects_unknown_error_mode() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "upstream:\n  api_key: k\npipeline:\n  error_mode: sometimes"
        )
        .unwrap();

        assert!(Config::from_file(file.path()).await.is_err());
    }

    #[tokio::test]
    async fn test_from_file_shared_mode() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "upstream:\n  api_key: k\noutput:\n  mode: shared\n  static_dir: public"
        )
        .unwrap();

        let config = Config::from_file(file.path()).await.unwrap();
        assert_eq!(config.output.mode, OutputMode::Shared);
        assert_eq!(config.output.static_dir, std::path::PathBuf::from("public"));
        assert_eq!(config.output.shared_file_name, "output_audio.wav");
    }
}
