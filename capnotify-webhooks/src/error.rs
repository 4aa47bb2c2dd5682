//! Error types for notification delivery

use capnotify_capture::StoreError;
use capnotify_config::ConfigError;
use thiserror::Error;

/// Errors that can occur while delivering a notification
#[derive(Error, Debug)]
pub enum NotifyError {
    /// Missing or malformed webhook settings
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The record store could not produce the record
    #[error("Record lookup failed: {0}")]
    NotFound(#[from] StoreError),

    /// Request could not be sent or no response arrived in time
    #[error("HTTP request failed: {0}")]
    TransportError(#[from] reqwest::Error),

    /// The webhook answered with something other than 200
    #[error("Webhook returned status code: {status}")]
    RemoteError { status: u16 },

    /// Envelope serialization failed
    #[error("Payload error: {0}")]
    PayloadError(String),
}

impl NotifyError {
    /// HTTP status carried by a remote error
    pub fn status_code(&self) -> Option<u16> {
        match self {
            NotifyError::RemoteError { status } => Some(*status),
            NotifyError::TransportError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the same call might succeed later without operator action.
    ///
    /// Delivery itself never retries; this is for callers with their own policy.
    pub fn is_transient(&self) -> bool {
        match self {
            NotifyError::TransportError(_) => true,
            NotifyError::RemoteError { status } => {
                matches!(status, 408 | 429) || (500..=599).contains(status)
            }
            _ => false,
        }
    }
}

impl From<serde_json::Error> for NotifyError {
    fn from(err: serde_json::Error) -> Self {
        NotifyError::PayloadError(err.to_string())
    }
}

impl From<ConfigError> for NotifyError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::ValidationError(message) => NotifyError::ConfigError(message),
            other => NotifyError::ConfigError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code() {
        assert_eq!(
            NotifyError::RemoteError { status: 429 }.status_code(),
            Some(429)
        );
        assert_eq!(NotifyError::ConfigError("x".into()).status_code(), None);
    }

    #[test]
    fn test_is_transient() {
        assert!(NotifyError::RemoteError { status: 429 }.is_transient());
        assert!(NotifyError::RemoteError { status: 503 }.is_transient());
        assert!(!NotifyError::RemoteError { status: 400 }.is_transient());
        assert!(!NotifyError::RemoteError { status: 401 }.is_transient());
        assert!(!NotifyError::ConfigError("x".into()).is_transient());
        assert!(!NotifyError::NotFound(StoreError::NotFound("1".into())).is_transient());
    }

    #[test]
    fn test_validation_message_is_unwrapped() {
        let err: NotifyError =
            ConfigError::ValidationError("webhook URL must start with x".into()).into();
        assert_eq!(
            err.to_string(),
            "Configuration error: webhook URL must start with x"
        );
    }

    #[test]
    fn test_store_error_is_carried() {
        let err: NotifyError = StoreError::NotFound("abc".into()).into();
        assert!(matches!(err, NotifyError::NotFound(StoreError::NotFound(ref id)) if id == "abc"));
        assert_eq!(err.to_string(), "Record lookup failed: Record not found: abc");
    }
}
