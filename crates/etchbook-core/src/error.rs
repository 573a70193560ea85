//! Error types for the etchbook core.

use thiserror::Error;

/// Admission policy rejections.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    /// The chain has reached its hard capacity limit.
    #[error("chain has reached its limit ({limit} blocks)")]
    CapacityExceeded { limit: usize },

    /// The candidate message exceeds the word limit for its position.
    #[error("message has {words} words, position {position} allows at most {limit}")]
    WordLimitExceeded {
        position: usize,
        limit: usize,
        words: usize,
    },
}
