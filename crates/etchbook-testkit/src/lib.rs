//! # Etchbook Testkit
//!
//! Testing utilities for the etchbook ledger: a deterministic
//! Ethereum-style signer, a concrete [`IdentityRecovery`]
//! implementation built on secp256k1 signature recovery, controllable
//! time oracles, and signed-chain fixtures.
//!
//! The ledger itself keeps identity recovery at the interface boundary;
//! this crate supplies the real thing so end-to-end scenarios can
//! exercise the full admission pipeline.
//!
//! [`IdentityRecovery`]: etchbook::IdentityRecovery

pub mod fixtures;
pub mod oracle;
pub mod recovery;
pub mod signer;

pub use fixtures::build_signed_chain;
pub use oracle::{FailingOracle, TickingOracle};
pub use recovery::EthereumRecovery;
pub use signer::EthSigner;
