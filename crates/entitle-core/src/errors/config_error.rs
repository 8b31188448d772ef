//! Configuration errors.

use super::error_code::{self, EntitlementErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read config file {path}: {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    ParseFailed(#[from] toml::de::Error),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl EntitlementErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ReadFailed { .. } => error_code::CONFIG_READ_FAILED,
            Self::ParseFailed(_) => error_code::CONFIG_PARSE_FAILED,
            Self::InvalidValue { .. } => error_code::CONFIG_INVALID_VALUE,
        }
    }
}
