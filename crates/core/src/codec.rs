//! Key codec: logical address <-> ordered byte key
//!
//! ## Key Layout
//!
//! ```text
//! +------------+-----+--------------------+-----+----------------------+
//! | kind text  | '+' | conversation text  | '@' | position (u64, BE)   |
//! +------------+-----+--------------------+-----+----------------------+
//!   "bite"            "c1"                        8 bytes
//! ```
//!
//! Everything up to and including `'@'` is the conversation prefix. Because
//! neither the kind nor the conversation may contain `'+'` or `'@'`, prefixes
//! of distinct `(kind, conversation)` pairs never bound each other's keys,
//! and because the position is fixed-width big-endian, byte order of keys
//! within one prefix equals numeric order of positions.
//!
//! ## Decoding
//!
//! The position field may itself contain `0x2B` or `0x40` bytes, so the
//! decoder anchors on the trailing 8 bytes and requires the `'@'` directly in
//! front of them. The kind/conversation split is the last `'+'` before that
//! `'@'`.

use thiserror::Error;

use crate::error::{Error, Result};
use crate::key::{validate_conversation, AddressError};
use crate::types::{Address, ObjectKind, Position};

/// Separator between kind and conversation
pub const KIND_SEPARATOR: u8 = b'+';

/// Separator between conversation and position
pub const CONVERSATION_SEPARATOR: u8 = b'@';

/// Width of the encoded position field
pub const POSITION_LEN: usize = 8;

/// Encode the conversation-scoped prefix `kind + '+' + conversation + '@'`
///
/// # Errors
///
/// Returns `InvalidAddress` if the conversation fails validation.
pub fn encode_prefix(kind: ObjectKind, conversation: &str) -> Result<Vec<u8>> {
    validate_conversation(conversation)?;

    let kind = kind.as_str();
    let mut prefix = Vec::with_capacity(kind.len() + conversation.len() + 2 + POSITION_LEN);
    prefix.extend_from_slice(kind.as_bytes());
    prefix.push(KIND_SEPARATOR);
    prefix.extend_from_slice(conversation.as_bytes());
    prefix.push(CONVERSATION_SEPARATOR);
    Ok(prefix)
}

/// Encode the full key: prefix followed by the big-endian position
///
/// # Examples
///
/// ```
/// use bitestore_core::codec::encode_key;
/// use bitestore_core::ObjectKind;
///
/// let key = encode_key(ObjectKind::Bite, "c1", 1).unwrap();
/// assert_eq!(key, b"bite+c1@\x00\x00\x00\x00\x00\x00\x00\x01");
/// ```
pub fn encode_key(kind: ObjectKind, conversation: &str, position: Position) -> Result<Vec<u8>> {
    let mut key = encode_prefix(kind, conversation)?;
    key.extend_from_slice(&position.to_be_bytes());
    Ok(key)
}

/// Decode a key produced by [`encode_key`]
///
/// # Errors
///
/// Returns `MalformedKey` if either separator is missing, the position field
/// is truncated, or the kind/conversation text is not valid.
pub fn decode_key(key: &[u8]) -> Result<Address> {
    decode_parts(key).map_err(Error::MalformedKey)
}

fn decode_parts(key: &[u8]) -> std::result::Result<Address, KeyParseError> {
    // Kind and conversation text never contain '@', so the first one is the
    // separator even when the position bytes carry 0x40 as well.
    let at = key
        .iter()
        .position(|b| *b == CONVERSATION_SEPARATOR)
        .ok_or(KeyParseError::MissingConversationSeparator)?;
    let tail = key.len() - at - 1;

    if key.len() < POSITION_LEN + 1 {
        return Err(KeyParseError::TruncatedPosition { len: tail });
    }
    let sep = key.len() - POSITION_LEN - 1;
    if key[sep] != CONVERSATION_SEPARATOR {
        return Err(if tail < POSITION_LEN {
            KeyParseError::TruncatedPosition { len: tail }
        } else {
            KeyParseError::OverlongPosition { len: tail }
        });
    }

    let mut position = [0u8; POSITION_LEN];
    position.copy_from_slice(&key[sep + 1..]);
    let position = Position::from_be_bytes(position);

    let head = &key[..sep];
    let plus = head
        .iter()
        .rposition(|b| *b == KIND_SEPARATOR)
        .ok_or(KeyParseError::MissingKindSeparator)?;

    let kind_text = String::from_utf8_lossy(&head[..plus]);
    let kind = ObjectKind::from_name(&kind_text)
        .ok_or_else(|| KeyParseError::UnknownKind(kind_text.into_owned()))?;

    let conversation = String::from_utf8_lossy(&head[plus + 1..]);
    validate_conversation(&conversation).map_err(KeyParseError::InvalidConversation)?;

    Ok(Address::new(kind, conversation.into_owned(), position))
}

/// Parse decimal position text as received from a transport
///
/// # Errors
///
/// Returns `InvalidAddress` if the text is not a base-10 u64.
pub fn parse_position(text: &str) -> Result<Position> {
    text.parse::<Position>()
        .map_err(|_| AddressError::InvalidPosition(text.to_string()).into())
}

/// Reasons a stored key failed to decode
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KeyParseError {
    /// No `'@'` in front of the position field
    #[error("conversation separator '@' not found")]
    MissingConversationSeparator,

    /// No `'+'` between kind and conversation
    #[error("kind separator '+' not found")]
    MissingKindSeparator,

    /// Fewer than 8 bytes follow the first `'@'`
    #[error("position field truncated: {len} bytes, expected 8")]
    TruncatedPosition {
        /// Bytes found after the separator
        len: usize,
    },

    /// More than 8 bytes follow the first `'@'`
    #[error("position field overlong: {len} bytes, expected 8")]
    OverlongPosition {
        /// Bytes found after the separator
        len: usize,
    },

    /// Kind text is not a known kind
    #[error("unknown kind '{0}'")]
    UnknownKind(String),

    /// Conversation text does not pass validation
    #[error("invalid conversation: {0}")]
    InvalidConversation(AddressError),
}
