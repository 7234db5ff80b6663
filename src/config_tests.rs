//! Unit tests for configuration module
//!
//! These tests validate configuration parsing, defaults, and validation.

#[cfg(test)]
mod tests {
    use std::io::Write;

    use crate::analysis::ScoreFailurePolicy;
    use crate::config::*;
    use crate::TeamPulseError;

    // ====== Default Value Tests ======

    #[test]
    fn test_default_thresholds() {
        let config = AnalysisConfig::default();
        assert!((config.dominance_threshold - 0.7).abs() < f64::EPSILON);
        assert!(config.negative_threshold.abs() < f64::EPSILON);
        assert!((config.positive_threshold - 1.0).abs() < f64::EPSILON);
        assert_eq!(config.on_score_error, ScoreFailurePolicy::Abort);
    }

    #[test]
    fn test_default_server() {
        let config = AppConfig::default();
        assert_eq!(config.bind_address(), "127.0.0.1:3000");
        assert_eq!(config.request_timeout(), 30);
        assert!(!config.cors_enabled());
        assert_eq!(config.log_level(), "info");
    }

    // ====== Parsing Tests ======

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 3000);
        assert!(config.sentiment.overrides.is_empty());
    }

    #[test]
    fn test_partial_sections() {
        let config: AppConfig = toml::from_str(
            r#"
            [server]
            port = 8080

            [analysis]
            on_score_error = "neutral"
            positive_threshold = 2.5

            [sentiment.overrides]
            shipit = 3
            "#,
        )
        .unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.analysis.on_score_error, ScoreFailurePolicy::Neutral);
        assert!((config.analysis.positive_threshold - 2.5).abs() < f64::EPSILON);
        assert!((config.analysis.dominance_threshold - 0.7).abs() < f64::EPSILON);
        assert_eq!(config.sentiment.overrides.get("shipit"), Some(&3));
    }

    #[test]
    fn test_unknown_policy_rejected() {
        let result: Result<AppConfig, _> = toml::from_str(
            r#"
            [analysis]
            on_score_error = "retry"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nlevel = \"debug\"\nlog_to_file = false").unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.log_level(), "debug");
        assert!(!config.logging.log_to_file);
    }

    #[test]
    fn test_from_missing_file() {
        let result = AppConfig::from_file("/nonexistent/teampulse.toml");
        assert!(matches!(result, Err(TeamPulseError::Io(_))));
    }

    // ====== Validation Tests ======

    #[test]
    fn test_validate_dominance_range() {
        let mut config = AppConfig::default();
        config.analysis.dominance_threshold = 1.5;
        assert!(matches!(
            config.validate(),
            Err(TeamPulseError::ConfigError(_))
        ));
    }

    #[test]
    fn test_validate_threshold_order() {
        let mut config = AppConfig::default();
        config.analysis.negative_threshold = 2.0;
        config.analysis.positive_threshold = 1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_override_range() {
        let mut config = AppConfig::default();
        config.sentiment.overrides.insert("meh".to_string(), 9);
        let err = config.validate().unwrap_err();
        assert!(format!("{err}").contains("meh"));
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }
}
