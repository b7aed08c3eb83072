//! BiteStore: point writes, point reads and windowed scans of bites
//!
//! ## Design Principles
//!
//! 1. **Injected store**: the store handle is passed in at construction; the
//!    engine keeps no global or per-conversation state of its own.
//!
//! 2. **Validate before encode**: every address is checked against the
//!    identifier rules and the configured limits before a key is built, so
//!    malformed identifiers never reach the store.
//!
//! 3. **One view per scan**: both scan passes share a single read view, so
//!    `previous`, `items` and `next` describe the same state of the store.
//!
//! ## Key Design
//!
//! - Bite key: `<kind>+<conversation>@<position_be_bytes>`
//! - Scan prefix: `<kind>+<conversation>@`

use std::sync::Arc;

use tracing::debug;

use bitestore_core::key::validate_conversation_with_limits;
use bitestore_core::{encode_key, Address, Error, Limits, ObjectKind, Position, Result, Store};
use bitestore_storage::MemoryStore;

use crate::config::{EngineConfig, WritePolicy};
use crate::pagination::PaginationResult;
use crate::scan::scan_window;

/// Engine over an ordered key-value store
///
/// Cheap to clone; clones share the same store.
#[derive(Clone)]
pub struct BiteStore {
    store: Arc<dyn Store>,
    write_policy: WritePolicy,
    limits: Limits,
}

impl BiteStore {
    /// Create an engine over `store` with the default configuration
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self {
            store,
            write_policy: WritePolicy::default(),
            limits: Limits::default(),
        }
    }

    /// Create an engine over `store` with an explicit configuration
    ///
    /// # Errors
    ///
    /// Returns `Config` if the configuration fails validation.
    pub fn with_config(store: Arc<dyn Store>, config: &EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            store,
            write_policy: config.write_policy,
            limits: config.limits(),
        })
    }

    /// Create an engine over a fresh [`MemoryStore`]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// The underlying store handle
    pub fn store(&self) -> &Arc<dyn Store> {
        &self.store
    }

    /// Active write policy
    pub fn write_policy(&self) -> WritePolicy {
        self.write_policy
    }

    fn key_for(&self, kind: ObjectKind, conversation: &str, position: Position) -> Result<Vec<u8>> {
        validate_conversation_with_limits(conversation, &self.limits)?;
        encode_key(kind, conversation, position)
    }

    /// Store a bite at `(kind, conversation, position)`
    ///
    /// Under [`WritePolicy::Overwrite`] an existing payload is replaced.
    /// Under [`WritePolicy::Reject`] the write fails with `AlreadyExists`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAddress`, `PayloadTooLarge`, `AlreadyExists` or
    /// `StoreUnavailable`.
    pub fn put(
        &self,
        kind: ObjectKind,
        conversation: &str,
        position: Position,
        payload: Vec<u8>,
    ) -> Result<()> {
        let key = self.key_for(kind, conversation, position)?;
        self.limits
            .check_payload_len(&payload)
            .map_err(|(actual, max)| Error::PayloadTooLarge { actual, max })?;

        let len = payload.len();
        match self.write_policy {
            WritePolicy::Overwrite => self.store.set(key, payload)?,
            WritePolicy::Reject => {
                if !self.store.set_if_absent(key, payload)? {
                    return Err(Error::AlreadyExists(Address::new(
                        kind,
                        conversation,
                        position,
                    )));
                }
            }
        }

        debug!(
            target: "bitestore::write",
            kind = %kind,
            conversation,
            position,
            len,
            "Bite stored"
        );
        Ok(())
    }

    /// Read the payload stored at `(kind, conversation, position)`
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if nothing is stored there, `InvalidAddress` or
    /// `StoreUnavailable`.
    pub fn get(&self, kind: ObjectKind, conversation: &str, position: Position) -> Result<Vec<u8>> {
        let key = self.key_for(kind, conversation, position)?;
        self.store
            .get(&key)?
            .ok_or_else(|| Error::NotFound(Address::new(kind, conversation, position)))
    }

    /// Returns true if a bite is stored at `(kind, conversation, position)`
    pub fn contains(
        &self,
        kind: ObjectKind,
        conversation: &str,
        position: Position,
    ) -> Result<bool> {
        let key = self.key_for(kind, conversation, position)?;
        Ok(self.store.get(&key)?.is_some())
    }

    /// Scan the window `[from, to]` of one conversation
    ///
    /// # Errors
    ///
    /// Returns `InvalidAddress` or `StoreUnavailable`. Malformed keys met
    /// during the scan are skipped, not reported.
    pub fn scan(
        &self,
        kind: ObjectKind,
        conversation: &str,
        from: Position,
        to: Position,
    ) -> Result<PaginationResult> {
        validate_conversation_with_limits(conversation, &self.limits)?;

        let view = self.store.read_view()?;
        let page = scan_window(view.as_ref(), kind, conversation, from, to)?;

        debug!(
            target: "bitestore::scan",
            kind = %kind,
            conversation,
            from,
            to,
            items = page.items.len(),
            previous = ?page.previous,
            next = ?page.next,
            "Scan complete"
        );
        Ok(page)
    }

    /// [`BiteStore::put`] addressed by an [`Address`]
    pub fn put_at(&self, address: &Address, payload: Vec<u8>) -> Result<()> {
        self.put(address.kind, &address.conversation, address.position, payload)
    }

    /// [`BiteStore::get`] addressed by an [`Address`]
    pub fn get_at(&self, address: &Address) -> Result<Vec<u8>> {
        self.get(address.kind, &address.conversation, address.position)
    }
}

impl std::fmt::Debug for BiteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BiteStore")
            .field("write_policy", &self.write_policy)
            .field("limits", &self.limits)
            .finish_non_exhaustive()
    }
}
