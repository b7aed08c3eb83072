//! Storage layer for bitestore
//!
//! This crate implements the in-memory store adapter:
//! - MemoryStore: BTreeMap-based storage with RwLock
//! - MemorySnapshot: Arc-shared, immutable read view
//! - MemoryIterator: forward/reverse cursor with seek
//!
//! Any other ordered key-value engine can stand in by implementing the
//! `Store` / `ReadView` / `StoreIterator` traits from `bitestore-core`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod iterator;
pub mod memory;
pub mod snapshot;

pub use iterator::MemoryIterator;
pub use memory::MemoryStore;
pub use snapshot::MemorySnapshot;
