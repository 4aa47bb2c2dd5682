//! Error types for the capnotify CLI.

use capnotify_capture::StoreError;
use capnotify_config::ConfigError;
use capnotify_webhooks::NotifyError;
use std::fmt;

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug)]
pub enum CliError {
    /// Settings could not be loaded, saved or validated
    Config(ConfigError),

    /// Record file could not be loaded
    Records(StoreError),

    /// Delivery failed
    Delivery(NotifyError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(e) => write!(f, "Settings error: {}", e),
            CliError::Records(e) => write!(f, "Records error: {}", e),
            CliError::Delivery(e) => write!(f, "Delivery failed: {}", e),
        }
    }
}

impl std::error::Error for CliError {}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        CliError::Config(e)
    }
}

impl From<StoreError> for CliError {
    fn from(e: StoreError) -> Self {
        CliError::Records(e)
    }
}

impl From<NotifyError> for CliError {
    fn from(e: NotifyError) -> Self {
        CliError::Delivery(e)
    }
}
