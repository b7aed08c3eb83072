//! Core types and traits for bitestore
//!
//! This crate defines the foundational pieces used throughout the system:
//! - ObjectKind / Address: Logical address of a bite
//! - key: Identifier validation (kinds and conversation identifiers)
//! - codec: Order-preserving key encoding and prefix construction
//! - Limits: Engine-enforced size limits
//! - Error: Error type hierarchy
//! - Traits: Store adapter seam (Store, ReadView, StoreIterator)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod error;
pub mod key;
pub mod limits;
pub mod traits;
pub mod types;

// Re-export commonly used types and traits
pub use codec::{decode_key, encode_key, encode_prefix, parse_position, KeyParseError};
pub use error::{Error, Result};
pub use key::{is_valid_conversation, is_valid_kind, validate_conversation, AddressError};
pub use limits::Limits;
pub use traits::{IteratorOptions, ReadView, Store, StoreIterator};
pub use types::{Address, ObjectKind, Position};
