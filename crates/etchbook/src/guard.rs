//! Fingerprint guard: rollback and deletion detection.
//!
//! The fingerprint is a digest of the last accepted block, pinned
//! separately from the chain at every commit. Before a loaded chain is
//! trusted, the tail must agree with the pin:
//!
//! - no chain and no fingerprint: empty ledger, valid starting state
//! - no chain but a fingerprint exists: data loss after a commitment
//! - both exist but disagree: rollback or substitution
//!
//! A chain without a fingerprint is accepted with a warning; it is the
//! state before the first guarded commit.

use thiserror::Error;
use tracing::warn;

use etchbook_core::{Block, ChainReport, Digest};

/// A fatal inconsistency between the persisted chain, its fingerprint,
/// or its own hash linkage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegrityError {
    /// A fingerprint exists but the chain is gone.
    #[error("chain is missing but a fingerprint is pinned ({fingerprint}): data loss after a commitment")]
    MissingChain { fingerprint: Digest },

    /// The tail block's hash disagrees with the pinned fingerprint.
    #[error("tail hash {actual} does not match pinned fingerprint {pinned}: rollback or substitution")]
    FingerprintMismatch { pinned: Digest, actual: Digest },

    /// The chain failed structural validation.
    #[error("chain validation found {} violation(s)", report.violations.len())]
    InvalidChain { report: ChainReport },
}

/// Cross-check a loaded chain against the pinned fingerprint.
///
/// `chain` is `None` when no chain file exists at all; an empty slice is
/// treated the same way.
pub fn check_fingerprint(
    chain: Option<&[Block]>,
    fingerprint: Option<&Digest>,
) -> Result<(), IntegrityError> {
    let tail = chain.and_then(|c| c.last());

    match (tail, fingerprint) {
        (None, None) => Ok(()),
        (None, Some(pinned)) => Err(IntegrityError::MissingChain {
            fingerprint: *pinned,
        }),
        (Some(tail), Some(pinned)) => {
            if tail.hash != *pinned {
                Err(IntegrityError::FingerprintMismatch {
                    pinned: *pinned,
                    actual: tail.hash,
                })
            } else {
                Ok(())
            }
        }
        (Some(_), None) => {
            warn!("chain present without a pinned fingerprint; accepting pre-guard state");
            Ok(())
        }
    }
}
