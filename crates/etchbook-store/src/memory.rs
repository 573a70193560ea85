//! In-memory implementation of the ChainStore trait.
//!
//! This is primarily for testing. It has the same semantics as the file
//! store but keeps everything in memory with no persistence, and exposes
//! direct mutators so tests can simulate tampering, rollback, and
//! data-loss scenarios.

use std::sync::RwLock;

use etchbook_core::{Block, Digest};

use crate::error::Result;
use crate::traits::ChainStore;

/// In-memory store. All data is lost when the store is dropped.
/// Thread-safe via RwLock.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<MemoryStoreInner>,
}

#[derive(Default)]
struct MemoryStoreInner {
    chain: Option<Vec<Block>>,
    fingerprint: Option<Digest>,
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the stored chain directly, bypassing `commit`.
    ///
    /// Test hook for simulating rollback or substitution of the chain
    /// file behind the ledger's back. `None` simulates a deleted file.
    pub fn set_chain(&self, chain: Option<Vec<Block>>) {
        self.inner.write().expect("store lock poisoned").chain = chain;
    }

    /// Overwrite the stored fingerprint directly, bypassing `commit`.
    pub fn set_fingerprint(&self, fingerprint: Option<Digest>) {
        self.inner.write().expect("store lock poisoned").fingerprint = fingerprint;
    }
}

impl ChainStore for MemoryStore {
    fn load_chain(&self) -> Result<Option<Vec<Block>>> {
        Ok(self.inner.read().expect("store lock poisoned").chain.clone())
    }

    fn load_fingerprint(&self) -> Result<Option<Digest>> {
        Ok(self.inner.read().expect("store lock poisoned").fingerprint)
    }

    fn commit(&self, chain: &[Block], fingerprint: &Digest) -> Result<()> {
        let mut inner = self.inner.write().expect("store lock poisoned");
        inner.chain = Some(chain.to_vec());
        inner.fingerprint = Some(*fingerprint);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use etchbook_core::BlockDraft;

    fn one_block() -> Block {
        BlockDraft {
            index: 0,
            message: "entry".to_string(),
            timestamp: "2026-01-01T00:00:00".to_string(),
            eth_block_number: 100,
            eth_address: "0xabc".to_string(),
            signature: "0xsig".to_string(),
            previous_hash: Digest::ZERO,
        }
        .seal()
    }

    #[test]
    fn test_fresh_store_is_empty() {
        let store = MemoryStore::new();
        assert!(store.load_chain().unwrap().is_none());
        assert!(store.load_fingerprint().unwrap().is_none());
    }

    #[test]
    fn test_commit_then_load() {
        let store = MemoryStore::new();
        let chain = vec![one_block()];
        store.commit(&chain, &chain[0].hash).unwrap();

        assert_eq!(store.load_chain().unwrap().unwrap(), chain);
        assert_eq!(store.load_fingerprint().unwrap(), Some(chain[0].hash));
    }

    #[test]
    fn test_tamper_hooks_bypass_commit() {
        let store = MemoryStore::new();
        let chain = vec![one_block()];
        store.commit(&chain, &chain[0].hash).unwrap();

        store.set_chain(None);
        assert!(store.load_chain().unwrap().is_none());
        // Fingerprint survives, exactly the data-loss shape the guard detects.
        assert!(store.load_fingerprint().unwrap().is_some());
    }
}
