//! Structured logging setup on top of tracing-subscriber.
//!
//! The mock server only logs to the console; level, output format, and ANSI
//! color are driven by the `[logger]` configuration section. `RUST_LOG`
//! takes precedence over the configured level when set.

use std::str::FromStr;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Console log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Default human-readable format
    Full,
    /// Single-line compact format
    Compact,
    /// Newline-delimited JSON
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full" => Ok(LogFormat::Full),
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!(
                "Invalid log format '{}'. Valid formats are: full, compact, json",
                s
            )),
        }
    }
}

/// Runtime logger configuration, built from `LoggerSettings`.
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Level filter directive, e.g. "info" or "live_mock=debug"
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Whether console output is enabled at all
    pub console_enabled: bool,
    /// Whether to use ANSI colors
    pub ansi: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Full,
            console_enabled: true,
            ansi: true,
        }
    }
}

/// Logger initialization errors.
#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("Invalid log level directive '{0}'")]
    InvalidLevel(String),

    #[error("Failed to initialize logger: {0}")]
    Init(String),
}

/// Initialize the global tracing subscriber.
///
/// Must be called once at startup, before the first log statement. A second
/// call returns an `Init` error.
pub fn init_logger(config: &LoggerConfig) -> Result<(), LoggerError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|_| LoggerError::InvalidLevel(config.level.clone()))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(config.ansi);

    let result = if !config.console_enabled {
        builder.with_writer(std::io::sink).try_init()
    } else {
        match config.format {
            LogFormat::Full => builder.try_init(),
            LogFormat::Compact => builder.compact().try_init(),
            LogFormat::Json => builder.json().try_init(),
        }
    };

    result.map_err(|e| LoggerError::Init(e.to_string()))
}
