//! # Validation Errors
//!
//! Failure taxonomy for the module. A deny decision is not in here: the
//! authorization result is a typed boolean (`Ok(false)`), never an error,
//! so the host can reject the surrounding transaction cleanly instead of
//! aborting mid-dispatch.

use thiserror::Error;

/// Errors that abort a module call with no partial mutation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// An admin-gated operation was attempted by a caller the host's
    /// authority checker did not confirm for the bound account.
    #[error("not authorized by the account")]
    Unauthorized,

    /// A configuration record was read before installation wrote it.
    /// Indicates a violated installation invariant, not a normal outcome.
    #[error("configuration record not initialized: {0}")]
    NotConfigured(&'static str),

    /// The storage partition failed a read or write.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    /// A stored or wire payload failed to encode or decode.
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),
}

/// Error from the module's key-value storage partition.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("key-value store failure: {message}")]
pub struct StoreError {
    /// Backend-specific description.
    pub message: String,
}

impl StoreError {
    /// Wrap a backend failure description.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error from the binary codec.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("codec failure: {message}")]
pub struct CodecError {
    /// Underlying serializer description.
    pub message: String,
}

impl CodecError {
    /// Wrap a serializer failure description.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
