//! File-backed implementation of the ChainStore trait.
//!
//! The store owns one directory holding two files: `chain.json` (the
//! pretty-printed chain document) and `fingerprint` (the tail digest as
//! a single hex line). Writes go to a temporary file in the same
//! directory followed by an atomic rename, so a reader only ever
//! observes a complete prior or complete new version of either file.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use etchbook_core::{Block, Digest};

use crate::error::{Result, StoreError};
use crate::traits::ChainStore;

const CHAIN_FILE: &str = "chain.json";
const FINGERPRINT_FILE: &str = "fingerprint";

/// Directory-backed store for the chain and fingerprint.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at the given directory, creating it if needed.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn chain_path(&self) -> PathBuf {
        self.dir.join(CHAIN_FILE)
    }

    fn fingerprint_path(&self) -> PathBuf {
        self.dir.join(FINGERPRINT_FILE)
    }

    /// Write bytes to `path` via a temporary sibling and atomic rename.
    fn write_atomic(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, bytes)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }
}

impl ChainStore for FileStore {
    fn load_chain(&self) -> Result<Option<Vec<Block>>> {
        let path = self.chain_path();
        if !path.exists() {
            return Ok(None);
        }
        let bytes = fs::read(&path)?;
        let chain: Vec<Block> = serde_json::from_slice(&bytes)?;
        Ok(Some(chain))
    }

    fn load_fingerprint(&self) -> Result<Option<Digest>> {
        let path = self.fingerprint_path();
        if !path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(&path)?;
        let digest = Digest::from_hex(text.trim())
            .map_err(|e| StoreError::InvalidData(format!("malformed fingerprint: {}", e)))?;
        Ok(Some(digest))
    }

    fn commit(&self, chain: &[Block], fingerprint: &Digest) -> Result<()> {
        // Chain lands first. If we crash before the fingerprint rename,
        // the stale fingerprint disagrees with the new tail and the
        // guard reports it on next load instead of trusting either file.
        let chain_bytes = serde_json::to_vec_pretty(chain)?;
        self.write_atomic(&self.chain_path(), &chain_bytes)?;
        self.write_atomic(&self.fingerprint_path(), fingerprint.to_hex().as_bytes())?;
        debug!(blocks = chain.len(), fingerprint = %fingerprint, "committed chain");
        Ok(())
    }
}
