//! Store adapter traits
//!
//! This module defines the Store, ReadView and StoreIterator traits through
//! which the engine talks to an embedded ordered key-value store. Keys are
//! opaque byte strings compared lexicographically; the engine never assumes
//! anything else about the backend.
//!
//! The engine holds no state of its own, so all isolation comes from here:
//! a [`ReadView`] must present one consistent snapshot for its whole
//! lifetime, and a write through [`Store`] must be atomic and visible to
//! every view opened after it returns.

use crate::error::Result;

/// Options for opening an iterator on a [`ReadView`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IteratorOptions {
    /// Iterate from greater keys to smaller keys
    pub reverse: bool,
    /// Hint that values will be read; key-only scans leave this off
    pub prefetch_values: bool,
}

impl IteratorOptions {
    /// Forward, key-only iteration
    pub fn keys_only() -> Self {
        Self::default()
    }

    /// Reverse, key-only iteration
    pub fn reverse_keys_only() -> Self {
        Self {
            reverse: true,
            prefetch_values: false,
        }
    }
}

/// Ordered key-value store
///
/// Thread safety: All methods must be safe to call concurrently from
/// multiple threads (requires Send + Sync).
pub trait Store: Send + Sync {
    /// Point read in its own read-only view
    ///
    /// Returns None if the key doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns `StoreUnavailable` if the store cannot serve reads.
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>>;

    /// Point write in its own update transaction, replacing any prior value
    ///
    /// # Errors
    ///
    /// Returns `StoreUnavailable` if the store cannot accept writes.
    fn set(&self, key: Vec<u8>, value: Vec<u8>) -> Result<()>;

    /// Atomic write that only succeeds if the key is absent
    ///
    /// Returns true if the value was written, false if the key already existed.
    ///
    /// # Errors
    ///
    /// Returns `StoreUnavailable` if the store cannot accept writes.
    fn set_if_absent(&self, key: Vec<u8>, value: Vec<u8>) -> Result<bool>;

    /// Open a read-only view over a consistent snapshot
    ///
    /// # Errors
    ///
    /// Returns `StoreUnavailable` if no view can be opened.
    fn read_view(&self) -> Result<Box<dyn ReadView + '_>>;
}

/// Read-only snapshot of a [`Store`]
pub trait ReadView: Send + Sync {
    /// Point read from the snapshot
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>>;

    /// Open an unpositioned iterator over the snapshot
    ///
    /// The iterator is not valid until [`StoreIterator::seek`] is called.
    fn iter(&self, options: IteratorOptions) -> Result<Box<dyn StoreIterator + '_>>;
}

/// Seekable cursor over a [`ReadView`]
///
/// Seek semantics follow the iteration direction:
/// - forward: lands on the smallest key `>= target`
/// - reverse: lands on the greatest key `<= target`
pub trait StoreIterator {
    /// Position the iterator relative to `target`
    ///
    /// # Errors
    ///
    /// Returns `StoreUnavailable` if the iterator cannot be positioned.
    fn seek(&mut self, target: &[u8]) -> Result<()>;

    /// Advance one entry in the iteration direction
    fn next(&mut self) -> Result<()>;

    /// Current key, or None once the iterator is exhausted
    fn key(&self) -> Option<&[u8]>;

    /// Current value, or None once the iterator is exhausted
    fn value(&self) -> Option<&[u8]>;

    /// Returns true while the iterator points at an entry
    fn valid(&self) -> bool {
        self.key().is_some()
    }

    /// Returns true while the iterator points at a key starting with `prefix`
    fn valid_for_prefix(&self, prefix: &[u8]) -> bool {
        self.key().map_or(false, |k| k.starts_with(prefix))
    }
}
