/// Logging configuration
///
/// Loaded from the environment (and an optional `.env` file):
/// - `LOG_LEVEL`: default filter directive, e.g. `info` or `graph_search=debug`
/// - `LOG_FORMAT`: `pretty`, `compact` or `json`
///
/// `RUST_LOG` takes precedence over `LOG_LEVEL` when set.

use std::env;
use std::str::FromStr;
use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid log format {0:?} (expected pretty, compact or json)")]
    InvalidLogFormat(String),

    #[error("Invalid log level {level:?}: {reason}")]
    InvalidLogLevel { level: String, reason: String },

    #[error("Failed to initialize logging: {0}")]
    Init(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            _ => Err(ConfigError::InvalidLogFormat(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

impl LoggingConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let level = lookup("LOG_LEVEL").unwrap_or(defaults.level);
        let format = match lookup("LOG_FORMAT") {
            Some(value) => value.parse()?,
            None => defaults.format,
        };

        Ok(Self { level, format })
    }

    /// Install the global tracing subscriber
    ///
    /// Logs go to stderr so that command output on stdout stays machine-readable.
    pub fn init(&self) -> Result<(), ConfigError> {
        let filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => EnvFilter::try_new(&self.level).map_err(|e| ConfigError::InvalidLogLevel {
                level: self.level.clone(),
                reason: e.to_string(),
            })?,
        };

        let registry = tracing_subscriber::registry().with(filter);
        let result = match self.format {
            LogFormat::Pretty => registry
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .try_init(),
            LogFormat::Compact => registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .compact()
                        .with_writer(std::io::stderr),
                )
                .try_init(),
            LogFormat::Json => registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .try_init(),
        };

        result.map_err(|e| ConfigError::Init(e.to_string()))
    }
}
