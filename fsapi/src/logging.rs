//! Logging setup for applications built on this crate
//!
//! The library itself only emits `tracing` events: requests at debug level
//! (path only, the PIN stays out of the logs), device status rejections at
//! warn, session lifecycle at info. This module installs a subscriber for
//! binaries and examples that want to see them.

use tracing_subscriber::{fmt, EnvFilter, Registry};

/// How log output is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoggingMode {
    /// No subscriber is installed
    Silent,
    /// Compact stderr output, `info` by default
    Development,
    /// Pretty output with source locations, `debug` by default
    Debug,
    /// One JSON object per event, `info` by default
    Json,
}

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to initialize tracing subscriber: {0}")]
    TracingInit(String),

    #[error("Invalid environment variable: {0}")]
    InvalidEnv(String),
}

/// Install a global subscriber for `mode`
///
/// # Environment Variables
///
/// - `FSAPI_LOG_LEVEL`: filter directive, e.g. `fsapi=debug`
/// - `RUST_LOG`: used when `FSAPI_LOG_LEVEL` is unset
pub fn init_logging(mode: LoggingMode) -> Result<(), LoggingError> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    match mode {
        LoggingMode::Silent => Ok(()),
        LoggingMode::Development => Registry::default()
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_file(false)
                    .with_line_number(false)
                    .compact(),
            )
            .with(create_env_filter("info")?)
            .try_init()
            .map_err(|e| LoggingError::TracingInit(e.to_string())),
        LoggingMode::Debug => Registry::default()
            .with(
                fmt::layer()
                    .pretty()
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(create_env_filter("debug")?)
            .try_init()
            .map_err(|e| LoggingError::TracingInit(e.to_string())),
        LoggingMode::Json => Registry::default()
            .with(fmt::layer().json().with_current_span(false))
            .with(create_env_filter("info")?)
            .try_init()
            .map_err(|e| LoggingError::TracingInit(e.to_string())),
    }
}

/// Install a subscriber selected by `FSAPI_LOG_MODE`
///
/// Accepts `silent`, `development`, `debug` and `json`; unset means silent.
pub fn init_logging_from_env() -> Result<(), LoggingError> {
    let mode = match std::env::var("FSAPI_LOG_MODE") {
        Ok(value) => parse_mode(&value)?,
        Err(_) => LoggingMode::Silent,
    };
    init_logging(mode)
}

fn parse_mode(value: &str) -> Result<LoggingMode, LoggingError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "silent" => Ok(LoggingMode::Silent),
        "development" | "dev" => Ok(LoggingMode::Development),
        "debug" => Ok(LoggingMode::Debug),
        "json" => Ok(LoggingMode::Json),
        other => Err(LoggingError::InvalidEnv(format!("FSAPI_LOG_MODE={}", other))),
    }
}

fn create_env_filter(default_level: &str) -> Result<EnvFilter, LoggingError> {
    let (source, directive) = match std::env::var("FSAPI_LOG_LEVEL") {
        Ok(level) => ("FSAPI_LOG_LEVEL", level),
        Err(_) => match std::env::var("RUST_LOG") {
            Ok(rust_log) => ("RUST_LOG", rust_log),
            Err(_) => return Ok(EnvFilter::new(default_level)),
        },
    };
    EnvFilter::try_new(&directive)
        .map_err(|e| LoggingError::InvalidEnv(format!("{}={}: {}", source, directive, e)))
}

/// Whether a global subscriber is already installed
pub fn is_initialized() -> bool {
    tracing::dispatcher::has_been_set()
}
