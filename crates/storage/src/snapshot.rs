//! MemorySnapshot: point-in-time read view of a MemoryStore
//!
//! A snapshot shares the store's map through an `Arc`; it never changes after
//! creation, so every iterator opened on it observes the same keys.

use std::sync::Arc;

use bitestore_core::{IteratorOptions, ReadView, Result, StoreIterator};

use crate::iterator::MemoryIterator;
use crate::memory::Entries;

/// Immutable view of a [`crate::MemoryStore`] at one version
#[derive(Debug, Clone)]
pub struct MemorySnapshot {
    /// Store version at which this snapshot was taken
    version: u64,
    /// Shared map as of `version`
    data: Arc<Entries>,
}

impl MemorySnapshot {
    pub(crate) fn new(version: u64, data: Arc<Entries>) -> Self {
        Self { version, data }
    }

    /// Store version at which this snapshot was taken
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Number of keys visible in this snapshot
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the snapshot holds no keys
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl ReadView for MemorySnapshot {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>> {
        Ok(self.data.get(key).cloned())
    }

    fn iter(&self, options: IteratorOptions) -> Result<Box<dyn StoreIterator + '_>> {
        Ok(Box::new(MemoryIterator::new(&self.data, options)))
    }
}
