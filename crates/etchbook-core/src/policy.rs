//! Admission policy: position-indexed word limits and the capacity cap.
//!
//! The word schedule is indexed by the 1-based position a candidate block
//! would occupy. Early positions follow a halving formula; later
//! positions fall into fixed bands, and everything past the table reuses
//! the final value of 29 words. The schedule is frozen; the tests pin
//! its exact values.

use crate::error::PolicyError;

/// Default hard capacity of the chain.
pub const DEFAULT_CAPACITY: usize = 10;

/// Position-dependent admission rules for candidate messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdmissionPolicy {
    /// Maximum number of blocks the chain may hold.
    pub capacity: usize,
}

impl AdmissionPolicy {
    /// Policy with the given capacity cap.
    pub const fn with_capacity(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Maximum number of whitespace-delimited words allowed at the given
    /// 1-based position.
    pub fn max_words(&self, position: usize) -> usize {
        match position {
            0 => 0,
            1..=19 => 2000 / (1 << ((position - 1) / 5)),
            20..=23 => 300,
            24..=26 => 250,
            27..=28 => 150,
            _ => 29,
        }
    }

    /// Authorize a candidate message against the current chain length.
    ///
    /// `message` must already be normalized. The candidate would occupy
    /// 1-based position `chain_len + 1`.
    pub fn admit(&self, chain_len: usize, message: &str) -> Result<(), PolicyError> {
        if chain_len >= self.capacity {
            return Err(PolicyError::CapacityExceeded {
                limit: self.capacity,
            });
        }

        let position = chain_len + 1;
        let limit = self.max_words(position);
        let words = word_count(message);
        if words > limit {
            return Err(PolicyError::WordLimitExceeded {
                position,
                limit,
                words,
            });
        }

        Ok(())
    }
}

impl Default for AdmissionPolicy {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

/// Normalize a candidate message before any counting or hashing.
///
/// CRLF, bare CR, and the two-character literal `\n` escape all collapse
/// to a single line feed, then leading and trailing whitespace is
/// trimmed. Applied exactly once per message, so equivalent input text
/// always yields the identical stored and hashed value.
pub fn normalize_message(raw: &str) -> String {
    raw.replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace("\\n", "\n")
        .trim()
        .to_string()
}

/// Count whitespace-delimited words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
