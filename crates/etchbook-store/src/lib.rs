//! # Etchbook Store
//!
//! Storage abstraction for the etchbook ledger. Provides a trait-based
//! interface for persisting the chain and its pinned fingerprint, with
//! file-backed and in-memory implementations.
//!
//! ## Overview
//!
//! The store persists exactly two artifacts: the ordered chain of blocks
//! (a JSON document) and the fingerprint (a single hex digest pinned to
//! the tail block after every successful append). [`ChainStore::commit`]
//! writes both as one unit of work.
//!
//! ## Key Types
//!
//! - [`ChainStore`] - The trait for chain + fingerprint persistence
//! - [`FileStore`] - Directory-backed storage with atomic rename-on-write
//! - [`MemoryStore`] - In-memory storage for tests

pub mod error;
pub mod file;
pub mod memory;
pub mod traits;

pub use error::{Result, StoreError};
pub use file::FileStore;
pub use memory::MemoryStore;
pub use traits::ChainStore;
