//! Core types for bitestore
//!
//! This module defines the logical address of a bite:
//! - ObjectKind: The object family a key belongs to (bite or user)
//! - Position: Sequence value ordering bites within a conversation
//! - Address: Composite address (kind + conversation + position)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::codec;
use crate::error::Result;
use crate::key::AddressError;

/// Sequence value of a bite within its conversation
///
/// Positions are assigned by the producer (a timestamp or a counter) and
/// need not be contiguous.
pub type Position = u64;

/// Object family discriminator
///
/// The text form of the kind is the first component of every encoded key,
/// so these strings are part of the storage format and MUST NOT change:
/// - Bite = "bite"
/// - User = "user"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    /// Conversation payload chunks
    Bite,
    /// Per-user records sequenced the same way as bites
    User,
}

impl ObjectKind {
    /// All known kinds, in storage order
    pub const ALL: [ObjectKind; 2] = [ObjectKind::Bite, ObjectKind::User];

    /// Text form used inside encoded keys
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectKind::Bite => "bite",
            ObjectKind::User => "user",
        }
    }

    /// Parse the text form, returning None for anything outside the enum
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "bite" => Some(ObjectKind::Bite),
            "user" => Some(ObjectKind::User),
            _ => None,
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObjectKind {
    type Err = AddressError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ObjectKind::from_name(s).ok_or_else(|| AddressError::UnknownKind(s.to_string()))
    }
}

/// Logical address of a bite
///
/// An Address is what the key codec encodes. Constructing one directly does
/// not validate the conversation; validation happens when the address is
/// encoded (see [`Address::key`]) or when it is built via [`Address::parse`].
///
/// # Examples
///
/// ```
/// use bitestore_core::{Address, ObjectKind};
///
/// let addr = Address::new(ObjectKind::Bite, "c1", 20);
/// let key = addr.key().unwrap();
/// assert!(key.starts_with(&addr.prefix().unwrap()));
/// assert_eq!(addr.to_string(), "bite+c1@20");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address {
    /// Object family
    pub kind: ObjectKind,
    /// Conversation identifier (`^[A-Za-z0-9-]+$`)
    pub conversation: String,
    /// Sequence position within the conversation
    pub position: Position,
}

impl Address {
    /// Create a new address
    pub fn new(kind: ObjectKind, conversation: impl Into<String>, position: Position) -> Self {
        Self {
            kind,
            conversation: conversation.into(),
            position,
        }
    }

    /// Build an address from untrusted text, validating kind and conversation
    ///
    /// # Errors
    ///
    /// Returns `InvalidAddress` if the kind is unknown or the conversation
    /// contains anything other than ASCII letters, digits and hyphens.
    pub fn parse(kind: &str, conversation: &str, position: Position) -> Result<Self> {
        let kind: ObjectKind = kind.parse()?;
        crate::key::validate_conversation(conversation)?;
        Ok(Self::new(kind, conversation, position))
    }

    /// Encode this address into its ordered storage key
    pub fn key(&self) -> Result<Vec<u8>> {
        codec::encode_key(self.kind, &self.conversation, self.position)
    }

    /// Encode the conversation-scoped prefix for this address
    pub fn prefix(&self) -> Result<Vec<u8>> {
        codec::encode_prefix(self.kind, &self.conversation)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}{}",
            self.kind,
            codec::KIND_SEPARATOR as char,
            self.conversation,
            codec::CONVERSATION_SEPARATOR as char,
            self.position
        )
    }
}
