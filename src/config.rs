use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

use crate::analysis::ScoreFailurePolicy;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub enable_cors: bool,
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            enable_cors: false,
            request_timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub backtrace: bool,
    /// Also write a daily rolling log under `logs/`
    pub log_to_file: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            backtrace: true,
            log_to_file: true,
        }
    }
}

/// Nudge thresholds and scoring failure handling
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Share of messages above which the top speaker is considered dominant
    pub dominance_threshold: f64,
    /// Average sentiment strictly below this triggers the negative-tone nudge
    pub negative_threshold: f64,
    /// Average sentiment strictly above this triggers the positive-energy nudge
    pub positive_threshold: f64,
    pub on_score_error: ScoreFailurePolicy,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            dominance_threshold: 0.7,
            negative_threshold: 0.0,
            positive_threshold: 1.0,
            on_score_error: ScoreFailurePolicy::Abort,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SentimentConfig {
    /// Extra word scores merged over the built-in AFINN lexicon
    pub overrides: HashMap<String, i8>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub analysis: AnalysisConfig,
    pub sentiment: SentimentConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from default config file path
    pub fn load() -> crate::Result<Self> {
        // Try to load from config.toml first, then fall back to config.example.toml
        if Path::new("config.toml").exists() {
            Self::from_file("config.toml")
        } else if Path::new("config.example.toml").exists() {
            tracing::warn!(
                "Using config.example.toml. Please create config.toml for production use."
            );
            Self::from_file("config.example.toml")
        } else {
            tracing::debug!("No config file found, using built-in defaults");
            Ok(Self::default())
        }
    }

    /// Check values that serde alone cannot reject
    pub fn validate(&self) -> crate::Result<()> {
        let dominance = self.analysis.dominance_threshold;
        if !(0.0..=1.0).contains(&dominance) {
            return Err(crate::TeamPulseError::ConfigError(format!(
                "analysis.dominance_threshold must be within [0, 1], got {dominance}"
            )));
        }
        if self.analysis.negative_threshold > self.analysis.positive_threshold {
            return Err(crate::TeamPulseError::ConfigError(format!(
                "analysis.negative_threshold ({}) must not exceed analysis.positive_threshold ({})",
                self.analysis.negative_threshold, self.analysis.positive_threshold
            )));
        }
        if let Some((word, score)) = self
            .sentiment
            .overrides
            .iter()
            .find(|(_, score)| !(-5..=5).contains(*score))
        {
            return Err(crate::TeamPulseError::ConfigError(format!(
                "sentiment.overrides.{word} must be within [-5, 5], got {score}"
            )));
        }
        Ok(())
    }

    /// Get server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Get request timeout in seconds
    pub fn request_timeout(&self) -> u64 {
        self.server.request_timeout_secs
    }

    /// Check if CORS is enabled
    pub fn cors_enabled(&self) -> bool {
        self.server.enable_cors
    }

    /// Get log level
    pub fn log_level(&self) -> &str {
        &self.logging.level
    }
}
