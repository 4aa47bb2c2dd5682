//! Error types for record lookups

use thiserror::Error;

/// Errors a record store can report
#[derive(Error, Debug)]
pub enum StoreError {
    /// No record with this id
    #[error("Record not found: {0}")]
    NotFound(String),

    /// The backing data could not be read
    #[error("Failed to load records: {0}")]
    LoadError(String),

    /// The backing data could not be decoded
    #[error("Failed to parse records: {0}")]
    ParseError(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::ParseError(err.to_string())
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::LoadError(err.to_string())
    }
}
