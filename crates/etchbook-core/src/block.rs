//! Block: one immutable ledger entry.
//!
//! A block is created once, validated immediately, and never edited or
//! deleted afterwards. The `hash` field covers every other field through
//! the canonical serialization; `previous_hash` links it to its
//! predecessor (or to the zero sentinel for the first block).

use serde::{Deserialize, Serialize};

use crate::canonical;
use crate::hash::{keccak256, Digest};

/// A sealed ledger entry.
///
/// Field names match the persisted wire form exactly. `timestamp` and
/// `eth_block_number` are opaque values captured from the external time
/// oracle at admission time and are never recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Ordinal position in the chain, 0-based, strictly increasing by 1.
    pub index: u64,

    /// Normalized message text. Normalization happens before sealing,
    /// so the stored and hashed value are identical.
    pub message: String,

    /// ISO-8601 UTC timestamp supplied by the time oracle.
    pub timestamp: String,

    /// External sequence number supplied by the time oracle.
    pub eth_block_number: u64,

    /// Lowercase signer identity recovered at admission time.
    pub eth_address: String,

    /// The raw signature hex the signer produced.
    pub signature: String,

    /// Digest of the preceding block, or [`Digest::ZERO`] for index 0.
    pub previous_hash: Digest,

    /// Digest of this block's own canonical form (all fields above).
    pub hash: Digest,
}

impl Block {
    /// Recompute this block's hash from its canonical form.
    ///
    /// A self-consistent block satisfies `block.compute_hash() == block.hash`.
    pub fn compute_hash(&self) -> Digest {
        keccak256(&canonical::canonical_bytes(self))
    }
}

/// An unsealed block: every field except the self-hash.
///
/// Drafts exist only inside the append path; [`BlockDraft::seal`] computes
/// the canonical hash and produces the immutable [`Block`].
#[derive(Debug, Clone)]
pub struct BlockDraft {
    pub index: u64,
    pub message: String,
    pub timestamp: String,
    pub eth_block_number: u64,
    pub eth_address: String,
    pub signature: String,
    pub previous_hash: Digest,
}

impl BlockDraft {
    /// Compute the canonical hash and seal the draft into a [`Block`].
    pub fn seal(self) -> Block {
        let hash = keccak256(&canonical::draft_bytes(&self));
        Block {
            index: self.index,
            message: self.message,
            timestamp: self.timestamp,
            eth_block_number: self.eth_block_number,
            eth_address: self.eth_address,
            signature: self.signature,
            previous_hash: self.previous_hash,
            hash,
        }
    }
}
