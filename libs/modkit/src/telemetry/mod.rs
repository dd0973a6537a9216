//! Logging setup for processes hosting modkit modules.

pub mod config;
pub mod init;

pub use config::{LogFormat, LoggingConfig};
pub use init::{TelemetryError, build_filter, init_logging};
