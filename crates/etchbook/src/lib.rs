//! # Etchbook
//!
//! An append-only, cryptographically linked ledger of signed text
//! entries, each bound to a position-dependent size limit and to an
//! external time reference.
//!
//! ## Overview
//!
//! The ledger's public surface is exactly three operations:
//!
//! - [`Ledger::read`] - the full chain
//! - [`Ledger::append`] - admit one signed message as a new block
//! - [`Ledger::verify`] - a full validation report
//!
//! Identity recovery and the trusted time reference are injected
//! capabilities ([`IdentityRecovery`], [`TimeOracle`]); the ledger never
//! performs network I/O itself. Persistence goes through the
//! [`ChainStore`](etchbook_store::ChainStore) seam, so the core is
//! testable with an in-memory substitute.
//!
//! ## Integrity
//!
//! Every operation that trusts the chain first re-validates hash linkage
//! and cross-checks the tail against a separately pinned fingerprint.
//! Integrity failures are fatal to the operation and never downgraded.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use etchbook::{Ledger, LedgerConfig};
//! use etchbook_store::FileStore;
//! # use etchbook::{IdentityRecovery, TimeOracle};
//! # fn capabilities() -> (Box<dyn IdentityRecovery>, Box<dyn TimeOracle>) { unimplemented!() }
//!
//! let store = FileStore::open("ledger-data").unwrap();
//! let (recovery, oracle) = capabilities();
//! let ledger = Ledger::new(store, recovery, oracle, LedgerConfig::default());
//!
//! let chain = ledger.read().unwrap();
//! let report = ledger.verify().unwrap();
//! ```

pub mod capabilities;
pub mod error;
pub mod guard;
pub mod ledger;

// Re-export component crates
pub use etchbook_core as core;
pub use etchbook_store as store;

// Re-export main types for convenience
pub use capabilities::{IdentityRecovery, OracleError, RecoveryError, TimeOracle, TimeReference};
pub use error::{LedgerError, Result};
pub use guard::IntegrityError;
pub use ledger::{Ledger, LedgerConfig};

// Re-export commonly used core types
pub use etchbook_core::{
    Block, ChainReport, Digest, Violation, ViolationKind,
};
