//! ChainStore trait: the abstract interface for ledger persistence.
//!
//! This trait keeps the ledger storage-agnostic. Implementations include
//! a file-backed store (primary) and an in-memory store (for tests).

use etchbook_core::{Block, Digest};

use crate::error::Result;

/// Persistence for the chain and its pinned fingerprint.
///
/// # Contract
///
/// - `load_chain` returns `None` when no chain has ever been persisted;
///   that is distinct from an empty-but-present chain only at the file
///   level, and callers treat both as an empty ledger.
/// - `load_fingerprint` returns `None` when no commitment has been made.
/// - `commit` persists the chain and fingerprint as one unit of work:
///   after a successful return both reflect the new state, and a failure
///   (or crash) part-way through must be detectable by the fingerprint
///   guard on the next load rather than silently trusted.
pub trait ChainStore: Send + Sync {
    /// Load the persisted chain, or `None` if none exists yet.
    fn load_chain(&self) -> Result<Option<Vec<Block>>>;

    /// Load the pinned fingerprint, or `None` if no commitment exists.
    fn load_fingerprint(&self) -> Result<Option<Digest>>;

    /// Persist the chain and pin the fingerprint of its tail.
    fn commit(&self, chain: &[Block], fingerprint: &Digest) -> Result<()>;
}
