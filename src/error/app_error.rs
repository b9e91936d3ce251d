use thiserror::Error;

use crate::config::ConfigError;
use crate::logger::LoggerError;

/// Application-wide error type.
///
/// Request handlers never produce errors by design: every endpoint of the
/// mock replies with HTTP 200 and an envelope with `code = 200`. This type
/// covers the process lifecycle instead: configuration loading, logger
/// initialization, and server startup.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error with key information
    #[error("Configuration error: {key}")]
    Configuration {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    /// Logger initialization error
    #[error("Logger error")]
    Logger {
        #[source]
        source: anyhow::Error,
    },

    /// Server startup or runtime error
    #[error("Server error: {message}")]
    Server {
        message: String,
        #[source]
        source: anyhow::Error,
    },

    /// Internal error for unexpected failures
    #[error("Internal error")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal { source: error }
    }
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let key = match &error {
            ConfigError::ValidationError { field, .. } => field.clone(),
            _ => "configuration".to_string(),
        };
        AppError::Configuration {
            key,
            source: anyhow::Error::new(error),
        }
    }
}

impl From<LoggerError> for AppError {
    fn from(error: LoggerError) -> Self {
        AppError::Logger {
            source: anyhow::Error::new(error),
        }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;
