//! Bitestore - ordered, paginated storage of conversation bites
//!
//! A bite is an opaque payload addressed by `(kind, conversation, position)`.
//! Bitestore encodes that address into an order-preserving key, so that the
//! bites of one conversation sort by position in any ordered key-value store,
//! and scans a window of positions with hints to the neighbouring windows.
//!
//! # Quick Start
//!
//! ```
//! use bitestore::{BiteStore, ObjectKind};
//!
//! let bites = BiteStore::in_memory();
//! for position in [10, 20, 30, 40, 50] {
//!     bites.put(ObjectKind::Bite, "c1", position, b"payload".to_vec())?;
//! }
//!
//! let page = bites.scan(ObjectKind::Bite, "c1", 20, 35)?;
//! assert_eq!(page.previous, Some(10));
//! assert_eq!(page.items, vec![20, 30]);
//! assert_eq!(page.next, Some(40));
//! # Ok::<(), bitestore::Error>(())
//! ```
//!
//! # Architecture
//!
//! - `bitestore-core`: address types, identifier validation, key codec and
//!   the store adapter traits
//! - `bitestore-storage`: an in-memory ordered store with snapshot views
//! - `bitestore-engine`: point operations, the range scan and configuration

pub use bitestore_core::{
    decode_key, encode_key, encode_prefix, is_valid_conversation, is_valid_kind, parse_position,
    validate_conversation, Address, AddressError, Error, IteratorOptions, KeyParseError, Limits,
    ObjectKind, Position, ReadView, Result, Store, StoreIterator,
};
pub use bitestore_engine::{
    scan_window, BiteStore, EngineConfig, LegacyPage, PaginationResult, WritePolicy,
    CONFIG_FILE_NAME,
};
pub use bitestore_storage::{MemorySnapshot, MemoryStore};
