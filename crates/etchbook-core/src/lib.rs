//! # Etchbook Core
//!
//! Pure primitives for the etchbook ledger: blocks, canonical hashing,
//! the admission policy, and chain validation.
//!
//! This crate contains no I/O, no storage, no networking. It is pure
//! computation over the ledger's data structures.
//!
//! ## Key Types
//!
//! - [`Block`] - One immutable ledger entry
//! - [`Digest`] - A Keccak-256 digest, rendered as lowercase hex
//! - [`AdmissionPolicy`] - Position-indexed word limits plus capacity cap
//! - [`ChainReport`] - Accumulated validation violations for a chain
//!
//! ## Canonicalization
//!
//! Blocks are hashed over a canonical compact-JSON form with a fixed
//! field ordering. See the [`canonical`] module.

pub mod block;
pub mod canonical;
pub mod error;
pub mod hash;
pub mod policy;
pub mod validation;

pub use block::{Block, BlockDraft};
pub use canonical::canonical_bytes;
pub use error::PolicyError;
pub use hash::{keccak256, Digest};
pub use policy::{normalize_message, word_count, AdmissionPolicy, DEFAULT_CAPACITY};
pub use validation::{validate_chain, ChainReport, Violation, ViolationKind};
