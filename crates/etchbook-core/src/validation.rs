//! Chain validation: structural indices, hash linkage, self-consistency.
//!
//! Validation is a pure function over a chain slice. It never
//! short-circuits: every violation is accumulated with its position and
//! kind so a report covers the whole chain in one pass.

use serde::Serialize;
use std::fmt;

use crate::block::Block;
use crate::hash::Digest;

/// A single detected inconsistency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// 0-based position of the offending block.
    pub position: usize,
    pub kind: ViolationKind,
}

/// What went wrong at a position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViolationKind {
    /// The block's `index` field does not match its position.
    IndexMismatch { expected: u64, got: u64 },

    /// `previous_hash` does not match the predecessor's hash (or the
    /// zero sentinel for the first block).
    PreviousHashMismatch { expected: Digest, got: Digest },

    /// The block's `hash` does not match its own canonical form.
    SelfHashMismatch { expected: Digest, got: Digest },
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationKind::IndexMismatch { expected, got } => {
                write!(f, "incorrect index: expected {}, got {}", expected, got)
            }
            ViolationKind::PreviousHashMismatch { .. } => write!(f, "previous hash mismatch"),
            ViolationKind::SelfHashMismatch { .. } => write!(f, "hash mismatch"),
        }
    }
}

/// The outcome of validating an entire chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChainReport {
    /// Number of blocks examined.
    pub blocks: usize,
    /// Every detected violation, in position order.
    pub violations: Vec<Violation>,
}

impl ChainReport {
    /// A chain with zero violations is valid and consistent.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// True when the examined chain held no blocks at all.
    pub fn is_empty(&self) -> bool {
        self.blocks == 0
    }

    /// Human-readable per-violation messages, plus a summary line when
    /// the chain is clean.
    pub fn messages(&self) -> Vec<String> {
        if self.violations.is_empty() {
            return vec!["all blocks are valid and consistent".to_string()];
        }
        self.violations
            .iter()
            .map(|v| format!("block {}: {}", v.position, v.kind))
            .collect()
    }
}

impl fmt::Display for ChainReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} blocks, {} violations",
            self.blocks,
            self.violations.len()
        )
    }
}

/// Validate a whole chain, accumulating every violation.
///
/// For each block: `index` must equal its 0-based position,
/// `previous_hash` must equal the predecessor's `hash` (the zero
/// sentinel at position 0), and `hash` must equal the Keccak-256 of the
/// block's own canonical form. Pure and idempotent.
pub fn validate_chain(chain: &[Block]) -> ChainReport {
    let mut violations = Vec::new();

    for (position, block) in chain.iter().enumerate() {
        if block.index != position as u64 {
            violations.push(Violation {
                position,
                kind: ViolationKind::IndexMismatch {
                    expected: position as u64,
                    got: block.index,
                },
            });
        }

        let expected_prev = if position == 0 {
            Digest::ZERO
        } else {
            chain[position - 1].hash
        };
        if block.previous_hash != expected_prev {
            violations.push(Violation {
                position,
                kind: ViolationKind::PreviousHashMismatch {
                    expected: expected_prev,
                    got: block.previous_hash,
                },
            });
        }

        let expected_hash = block.compute_hash();
        if block.hash != expected_hash {
            violations.push(Violation {
                position,
                kind: ViolationKind::SelfHashMismatch {
                    expected: expected_hash,
                    got: block.hash,
                },
            });
        }
    }

    ChainReport {
        blocks: chain.len(),
        violations,
    }
}
