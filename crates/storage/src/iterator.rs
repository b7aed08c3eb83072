//! Seekable cursor over a snapshot map
//!
//! Each step is a fresh `BTreeMap::range` lookup bounded by the current key,
//! so the cursor holds only borrowed references into the snapshot.
//! Values are resident in memory; `prefetch_values` has no effect here.

use std::ops::Bound;

use bitestore_core::{IteratorOptions, Result, StoreIterator};

use crate::memory::Entries;

/// Forward or reverse cursor over a [`crate::MemorySnapshot`]
pub struct MemoryIterator<'a> {
    data: &'a Entries,
    reverse: bool,
    current: Option<(&'a [u8], &'a [u8])>,
}

impl<'a> MemoryIterator<'a> {
    pub(crate) fn new(data: &'a Entries, options: IteratorOptions) -> Self {
        Self {
            data,
            reverse: options.reverse,
            current: None,
        }
    }

    fn first_in(&self, lower: Bound<&[u8]>, upper: Bound<&[u8]>) -> Option<(&'a [u8], &'a [u8])> {
        let data: &'a Entries = self.data;
        let mut range = data.range::<[u8], _>((lower, upper));
        let entry = if self.reverse {
            range.next_back()
        } else {
            range.next()
        };
        entry.map(|(k, v)| (k.as_slice(), v.as_slice()))
    }
}

impl<'a> StoreIterator for MemoryIterator<'a> {
    fn seek(&mut self, target: &[u8]) -> Result<()> {
        self.current = if self.reverse {
            self.first_in(Bound::Unbounded, Bound::Included(target))
        } else {
            self.first_in(Bound::Included(target), Bound::Unbounded)
        };
        Ok(())
    }

    fn next(&mut self) -> Result<()> {
        if let Some((key, _)) = self.current {
            self.current = if self.reverse {
                self.first_in(Bound::Unbounded, Bound::Excluded(key))
            } else {
                self.first_in(Bound::Excluded(key), Bound::Unbounded)
            };
        }
        Ok(())
    }

    fn key(&self) -> Option<&[u8]> {
        self.current.map(|(k, _)| k)
    }

    fn value(&self) -> Option<&[u8]> {
        self.current.map(|(_, v)| v)
    }
}
