use thiserror::Error;

#[derive(Error, Debug)]
pub enum TeamPulseError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Scoring failed for message {index}: {reason}")]
    Scoring { index: usize, reason: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlParsing(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Custom(String),
}

impl TeamPulseError {
    /// Whether the error was caused by the caller's input rather than the server
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidRequest(_) | Self::Serialization(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, TeamPulseError>;
