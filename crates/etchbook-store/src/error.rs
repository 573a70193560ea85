//! Error types for the store module.

use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// I/O error reading or writing the chain or fingerprint.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Chain document failed to serialize or deserialize.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Persisted data is present but unreadable (e.g. a malformed
    /// fingerprint file).
    #[error("invalid data: {0}")]
    InvalidData(String),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
