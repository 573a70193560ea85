//! The Ledger: load, validate, append, persist as one unit of work.
//!
//! The ledger is the single shared mutable resource: the persisted chain
//! plus its fingerprint. Appends are serialized under a mutex; every
//! operation that trusts the chain re-validates linkage and re-checks
//! the fingerprint first, and either fully commits or has no observable
//! effect.

use std::sync::Mutex;

use tracing::info;

use etchbook_core::{
    normalize_message, validate_chain, AdmissionPolicy, Block, BlockDraft, ChainReport, Digest,
    DEFAULT_CAPACITY,
};
use etchbook_store::ChainStore;

use crate::capabilities::{IdentityRecovery, TimeOracle};
use crate::error::{LedgerError, Result};
use crate::guard::{check_fingerprint, IntegrityError};

/// Configuration for the ledger.
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    /// Hard capacity limit for the chain.
    pub capacity: usize,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

/// The append-only ledger over an injected store and capabilities.
///
/// Public surface is exactly three operations: [`Ledger::read`],
/// [`Ledger::append`], and [`Ledger::verify`].
pub struct Ledger<S: ChainStore> {
    store: S,
    recovery: Box<dyn IdentityRecovery>,
    oracle: Box<dyn TimeOracle>,
    policy: AdmissionPolicy,
    /// Serializes appends: at most one may be in flight at a time.
    append_lock: Mutex<()>,
}

impl<S: ChainStore> Ledger<S> {
    /// Create a ledger over the given store and capabilities.
    pub fn new(
        store: S,
        recovery: Box<dyn IdentityRecovery>,
        oracle: Box<dyn TimeOracle>,
        config: LedgerConfig,
    ) -> Self {
        Self {
            store,
            recovery,
            oracle,
            policy: AdmissionPolicy::with_capacity(config.capacity),
            append_lock: Mutex::new(()),
        }
    }

    /// Get the store reference.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read the full chain after validating it and checking the
    /// fingerprint. Fails fast with no partial state on any problem.
    pub fn read(&self) -> Result<Vec<Block>> {
        self.load_trusted()
    }

    /// Produce a full validation report for the persisted chain.
    ///
    /// Unlike [`Ledger::read`], violations are the report's payload
    /// rather than an error: a tampered chain yields a report listing
    /// every inconsistency.
    pub fn verify(&self) -> Result<ChainReport> {
        let chain = self.store.load_chain()?.unwrap_or_default();
        Ok(validate_chain(&chain))
    }

    /// Admit one signed message as a new block.
    ///
    /// Pipeline: normalize, reject malformed input, recover the signer
    /// identity, re-validate the current chain, apply the admission
    /// policy for the next position, capture the time reference, seal
    /// the block, and commit chain + fingerprint as one unit of work.
    pub fn append(&self, message: &str, signature: &str) -> Result<Block> {
        let _serialized = self.append_lock.lock().expect("append lock poisoned");

        let message = normalize_message(message);
        let signature = signature.trim();
        if message.is_empty() {
            return Err(LedgerError::MalformedInput("missing message"));
        }
        if signature.is_empty() {
            return Err(LedgerError::MalformedInput("missing signature"));
        }

        // Recovery sees the normalized text: what gets verified is
        // exactly what gets stored and hashed.
        let eth_address = self.recovery.recover(&message, signature)?.to_lowercase();

        let mut chain = self.load_trusted()?;
        self.policy.admit(chain.len(), &message)?;

        let time = self.oracle.observe()?;
        let previous_hash = chain.last().map(|b| b.hash).unwrap_or(Digest::ZERO);

        let block = BlockDraft {
            index: chain.len() as u64,
            message,
            timestamp: time.timestamp,
            eth_block_number: time.sequence,
            eth_address,
            signature: signature.to_string(),
            previous_hash,
        }
        .seal();

        chain.push(block.clone());
        self.store.commit(&chain, &block.hash)?;
        info!(index = block.index, hash = %block.hash, "appended block");

        Ok(block)
    }

    /// Load the chain, run the validator, and run the fingerprint guard.
    fn load_trusted(&self) -> Result<Vec<Block>> {
        let chain = self.store.load_chain()?;
        let fingerprint = self.store.load_fingerprint()?;

        let report = validate_chain(chain.as_deref().unwrap_or(&[]));
        if !report.is_valid() {
            return Err(IntegrityError::InvalidChain { report }.into());
        }

        check_fingerprint(chain.as_deref(), fingerprint.as_ref())?;
        Ok(chain.unwrap_or_default())
    }
}
