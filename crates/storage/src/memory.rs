//! MemoryStore: ordered in-memory store with snapshot reads
//!
//! This module implements the Store trait using:
//! - `BTreeMap<Vec<u8>, Vec<u8>>` for byte-ordered key storage
//! - `parking_lot::RwLock` for thread-safe access
//! - `Arc` sharing so read views are O(1) snapshots
//! - `AtomicU64` counting applied writes
//!
//! # Design Notes
//!
//! - **Copy-on-write**: A read view holds an `Arc` to the map as it was when the
//!   view opened. The next write while any view is alive clones the map
//!   (`Arc::make_mut`); writes with no outstanding views mutate in place.
//! - **Atomic writes**: Every write happens under the write guard, so a view
//!   sees either all of a write or none of it.
//! - **No deletes**: Bites are immutable once written; the store has no
//!   delete path.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::trace;

use bitestore_core::{ReadView, Result, Store};

use crate::snapshot::MemorySnapshot;

pub(crate) type Entries = BTreeMap<Vec<u8>, Vec<u8>>;

/// In-memory ordered store
///
/// Thread-safe through `parking_lot::RwLock` and `AtomicU64`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// The main data store: ordered map from key bytes to value bytes
    data: RwLock<Arc<Entries>>,
    /// Number of writes applied so far
    version: AtomicU64,
}

impl MemoryStore {
    /// Create a new empty MemoryStore
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// Returns true if no keys are stored
    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }

    /// Number of writes applied so far
    pub fn current_version(&self) -> u64 {
        self.version.load(Ordering::SeqCst)
    }

    /// Open a concrete snapshot of the current state
    ///
    /// Same as [`Store::read_view`] without the trait object.
    pub fn snapshot(&self) -> MemorySnapshot {
        // Read the version under the lock so it matches the cloned map.
        let data = self.data.read();
        let version = self.current_version();
        MemorySnapshot::new(version, Arc::clone(&*data))
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>> {
        Ok(self.data.read().get(key).cloned())
    }

    fn set(&self, key: Vec<u8>, value: Vec<u8>) -> Result<()> {
        let mut data = self.data.write();
        Arc::make_mut(&mut *data).insert(key, value);
        let version = self.version.fetch_add(1, Ordering::SeqCst) + 1;
        trace!(version, "memory store write");
        Ok(())
    }

    fn set_if_absent(&self, key: Vec<u8>, value: Vec<u8>) -> Result<bool> {
        let mut data = self.data.write();
        if data.contains_key(&key) {
            return Ok(false);
        }
        Arc::make_mut(&mut *data).insert(key, value);
        let version = self.version.fetch_add(1, Ordering::SeqCst) + 1;
        trace!(version, "memory store insert");
        Ok(true)
    }

    fn read_view(&self) -> Result<Box<dyn ReadView + '_>> {
        Ok(Box::new(self.snapshot()))
    }
}
