//! Error types for the ledger.

use thiserror::Error;

use etchbook_core::PolicyError;
use etchbook_store::StoreError;

use crate::capabilities::{OracleError, RecoveryError};
use crate::guard::IntegrityError;

/// Errors that can occur during ledger operations.
///
/// Every kind except [`LedgerError::Integrity`] is recoverable: the
/// caller retries with corrected input or later. An integrity failure
/// means the ledger's core guarantee may be violated and is never
/// downgraded. No kind leaves partially mutated persisted state.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Required input was missing or empty.
    #[error("malformed input: {0}")]
    MalformedInput(&'static str),

    /// Identity recovery rejected the signature.
    #[error(transparent)]
    InvalidSignature(#[from] RecoveryError),

    /// The chain has reached its hard capacity limit.
    #[error("chain has reached its limit ({limit} blocks)")]
    CapacityExceeded { limit: usize },

    /// The candidate message exceeds its position's word limit.
    #[error("message has {words} words, position {position} allows at most {limit}")]
    PolicyViolation {
        position: usize,
        limit: usize,
        words: usize,
    },

    /// The chain or fingerprint could not be read or written.
    #[error("persistence failure: {0}")]
    Persistence(#[from] StoreError),

    /// The validator or fingerprint guard detected tampering.
    #[error("integrity failure: {0}")]
    Integrity(#[from] IntegrityError),

    /// The external time oracle failed.
    #[error(transparent)]
    ExternalDependency(#[from] OracleError),
}

impl From<PolicyError> for LedgerError {
    fn from(e: PolicyError) -> Self {
        match e {
            PolicyError::CapacityExceeded { limit } => LedgerError::CapacityExceeded { limit },
            PolicyError::WordLimitExceeded {
                position,
                limit,
                words,
            } => LedgerError::PolicyViolation {
                position,
                limit,
                words,
            },
        }
    }
}

/// Result type for ledger operations.
pub type Result<T> = std::result::Result<T, LedgerError>;
