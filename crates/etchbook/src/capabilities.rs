//! Injected external capabilities: identity recovery and the time oracle.
//!
//! Both are collaborators the ledger consumes but does not implement.
//! Their latency and failure modes belong to the caller; the ledger
//! surfaces failures without retrying.

use thiserror::Error;

/// Recovers a signer's identity from a message and its signature.
///
/// The signature is hex-encoded and may carry an optional `0x` prefix.
/// Implementations return a lowercase identity string; the ledger
/// lowercase-normalizes the result again before storing or comparing it.
pub trait IdentityRecovery: Send + Sync {
    fn recover(&self, message: &str, signature: &str) -> Result<String, RecoveryError>;
}

/// Identity recovery failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid signature: {0}")]
pub struct RecoveryError(pub String);

/// A trusted external time reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeReference {
    /// ISO-8601 UTC timestamp, no fractional seconds required.
    pub timestamp: String,
    /// Monotonically non-decreasing external sequence number.
    pub sequence: u64,
}

/// Supplies the trusted timestamp and sequence number bound into each
/// block at admission time. Values are captured once and never
/// recomputed.
pub trait TimeOracle: Send + Sync {
    fn observe(&self) -> Result<TimeReference, OracleError>;
}

/// The time oracle was unavailable or returned an unusable reading.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("time oracle unavailable: {0}")]
pub struct OracleError(pub String);
