//! Error types for bitestore
//!
//! This module defines the error taxonomy shared by the codec, the store
//! adapters and the engine. We use `thiserror` for automatic `Display` and
//! `Error` trait implementations.
//!
//! Transport adapters map these onto their own status codes through
//! [`Error::is_client_error`] and [`Error::reason_code`]; no transport-specific
//! codes live here.

use thiserror::Error;

use crate::codec::KeyParseError;
use crate::key::AddressError;
use crate::types::Address;

/// Result type alias for bitestore operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for bitestore
#[derive(Debug, Error)]
pub enum Error {
    /// Kind or conversation failed validation
    #[error("Invalid address: {0}")]
    InvalidAddress(#[from] AddressError),

    /// A key read from the store does not decode
    #[error("Malformed key: {0}")]
    MalformedKey(#[from] KeyParseError),

    /// Point read on an address with no stored bite
    #[error("Bite not found: {0}")]
    NotFound(Address),

    /// Point write on an occupied address while overwrites are rejected
    #[error("Bite already exists: {0}")]
    AlreadyExists(Address),

    /// Payload exceeds the configured maximum
    #[error("Payload too large: {actual} bytes exceeds maximum {max}")]
    PayloadTooLarge {
        /// Actual payload length in bytes
        actual: usize,
        /// Maximum allowed length
        max: usize,
    },

    /// The store could not open a view, iterator or transaction
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// Engine configuration is invalid
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a `StoreUnavailable` error from any displayable cause
    pub fn store_unavailable(cause: impl std::fmt::Display) -> Self {
        Error::StoreUnavailable(cause.to_string())
    }

    /// Returns true if the caller supplied bad input
    ///
    /// Client errors are never retried and are surfaced as such by adapters.
    /// Everything else indicates a fault on the serving side.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidAddress(_)
                | Error::NotFound(_)
                | Error::AlreadyExists(_)
                | Error::PayloadTooLarge { .. }
        )
    }

    /// Stable reason code for adapters and logs
    pub fn reason_code(&self) -> &'static str {
        match self {
            Error::InvalidAddress(e) => e.reason_code(),
            Error::MalformedKey(_) => "malformed_key",
            Error::NotFound(_) => "not_found",
            Error::AlreadyExists(_) => "already_exists",
            Error::PayloadTooLarge { .. } => "payload_too_large",
            Error::StoreUnavailable(_) => "store_unavailable",
            Error::Config(_) => "invalid_config",
        }
    }
}
