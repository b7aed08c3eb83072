//! Identifier validation for bitestore
//!
//! Kinds and conversation identifiers are embedded verbatim in encoded keys,
//! separated by `+` and `@`. These rules keep those separators out of the
//! identifiers so that every `(kind, conversation)` pair owns a distinct,
//! non-overlapping key prefix.
//!
//! ## Contract
//!
//! These validation rules are part of the storage format:
//! - Kinds must be one of `bite` or `user`
//! - Conversations must not be empty
//! - Conversations may only contain ASCII letters, digits and `-`
//!
//! Length limits are an engine policy and live in [`crate::limits`].

use thiserror::Error;

use crate::limits::Limits;
use crate::types::ObjectKind;

/// Returns true if `kind` names a known object kind
///
/// # Examples
///
/// ```
/// use bitestore_core::key::is_valid_kind;
///
/// assert!(is_valid_kind("bite"));
/// assert!(is_valid_kind("user"));
/// assert!(!is_valid_kind("group"));
/// ```
pub fn is_valid_kind(kind: &str) -> bool {
    ObjectKind::from_name(kind).is_some()
}

/// Returns true if `conversation` is a well-formed conversation identifier
///
/// # Examples
///
/// ```
/// use bitestore_core::key::is_valid_conversation;
///
/// assert!(is_valid_conversation("conv-1"));
/// assert!(!is_valid_conversation(""));
/// assert!(!is_valid_conversation("a/b"));
/// assert!(!is_valid_conversation("a@b"));
/// ```
pub fn is_valid_conversation(conversation: &str) -> bool {
    validate_conversation(conversation).is_ok()
}

/// Validate a conversation identifier, reporting the first violation
pub fn validate_conversation(conversation: &str) -> Result<(), AddressError> {
    if conversation.is_empty() {
        return Err(AddressError::EmptyConversation);
    }

    match conversation
        .char_indices()
        .find(|(_, ch)| !(ch.is_ascii_alphanumeric() || *ch == '-'))
    {
        Some((index, ch)) => Err(AddressError::InvalidCharacter { ch, index }),
        None => Ok(()),
    }
}

/// Validate a conversation identifier and its length against `limits`
pub fn validate_conversation_with_limits(
    conversation: &str,
    limits: &Limits,
) -> Result<(), AddressError> {
    validate_conversation(conversation)?;
    limits.validate_conversation_length(conversation)
}

/// Address validation errors
///
/// These errors map to `InvalidAddress` in the engine error taxonomy.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AddressError {
    /// Kind is not one of the enumerated object kinds
    #[error("Unknown object kind '{0}'")]
    UnknownKind(String),

    /// Conversation is empty (length 0)
    #[error("Conversation cannot be empty")]
    EmptyConversation,

    /// Conversation contains a character outside `[A-Za-z0-9-]`
    #[error("Conversation contains invalid character {ch:?} at byte {index}")]
    InvalidCharacter {
        /// Offending character
        ch: char,
        /// Byte offset of the character
        index: usize,
    },

    /// Conversation exceeds the configured maximum length
    #[error("Conversation too long: {actual} bytes exceeds maximum {max}")]
    ConversationTooLong {
        /// Actual length in bytes
        actual: usize,
        /// Maximum allowed length
        max: usize,
    },

    /// Position text is not a decimal u64
    #[error("Invalid position '{0}'")]
    InvalidPosition(String),
}

impl AddressError {
    /// Get the reason code reported to transport adapters
    pub fn reason_code(&self) -> &'static str {
        match self {
            AddressError::UnknownKind(_) => "unknown_kind",
            AddressError::EmptyConversation => "empty_conversation",
            AddressError::InvalidCharacter { .. } => "invalid_character",
            AddressError::ConversationTooLong { .. } => "conversation_too_long",
            AddressError::InvalidPosition(_) => "invalid_position",
        }
    }
}
