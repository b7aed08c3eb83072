//! Size limits for conversations and payloads
//!
//! These limits are enforced by the engine before anything reaches the store.
//! The key codec itself does not consult them: any conversation that passes
//! the character rules can be encoded and decoded.

use crate::key::AddressError;

/// Size limits for addresses and payloads
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum conversation identifier length in bytes (default: 1024)
    pub max_conversation_bytes: usize,

    /// Maximum bite payload length in bytes (default: 16MB)
    pub max_payload_bytes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_conversation_bytes: 1024,
            max_payload_bytes: 16 * 1024 * 1024, // 16MB
        }
    }
}

impl Limits {
    /// Create limits with small values for testing
    pub fn with_small_limits() -> Self {
        Limits {
            max_conversation_bytes: 16,
            max_payload_bytes: 64,
        }
    }

    /// Validate a conversation length
    ///
    /// Note: This only validates length. For the character rules use
    /// `validate_conversation()` from the `key` module.
    pub fn validate_conversation_length(&self, conversation: &str) -> Result<(), AddressError> {
        let len = conversation.len();
        if len > self.max_conversation_bytes {
            return Err(AddressError::ConversationTooLong {
                actual: len,
                max: self.max_conversation_bytes,
            });
        }
        Ok(())
    }

    /// Returns `Err((actual, max))` if the payload exceeds the limit
    pub fn check_payload_len(&self, payload: &[u8]) -> Result<(), (usize, usize)> {
        if payload.len() > self.max_payload_bytes {
            return Err((payload.len(), self.max_payload_bytes));
        }
        Ok(())
    }
}
