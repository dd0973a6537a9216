//! Global `tracing` subscriber installation.

use tracing_subscriber::EnvFilter;

use super::config::{LogFormat, LoggingConfig};

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("invalid log filter '{directive}': {reason}")]
    InvalidFilter { directive: String, reason: String },

    #[error("global subscriber already installed: {0}")]
    AlreadyInitialized(String),
}

/// Builds the filter: `RUST_LOG` wins over the configured level.
///
/// # Errors
/// `InvalidFilter` if neither `RUST_LOG` nor `cfg.level` parse as a directive.
pub fn build_filter(cfg: &LoggingConfig) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cfg.level))
        .map_err(|e| TelemetryError::InvalidFilter {
            directive: cfg.level.clone(),
            reason: e.to_string(),
        })
}

/// Installs the process-wide `fmt` subscriber.
///
/// # Errors
/// `InvalidFilter` for a bad level, `AlreadyInitialized` when called twice.
pub fn init_logging(cfg: &LoggingConfig) -> Result<(), TelemetryError> {
    let filter = build_filter(cfg)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let installed = match cfg.format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.map_err(|e| TelemetryError::AlreadyInitialized(e.to_string()))?;

    tracing::debug!(level = %cfg.level, format = ?cfg.format, "Logging initialized");
    Ok(())
}
