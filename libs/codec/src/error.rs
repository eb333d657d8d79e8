//! Codec errors
//!
//! Every validation or structural failure, in either direction, surfaces as the
//! same `CodecError::InvalidData` with a fixed message. Callers learn that the
//! input was rejected, not which rule rejected it.
//!
//! The specific rule is still tracked internally as a [`Rejection`] so it can be
//! logged, but it never crosses the public API.

use crate::constants::INVALID_MESSAGE;
use thiserror::Error;

/// Public codec error
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// Input does not satisfy the wire format or its limits
    #[error("Invalid message: The message does not meet the required format.")]
    InvalidData,
}

impl CodecError {
    /// Fixed human-readable text shared by every rejection
    pub fn message(&self) -> &'static str {
        match self {
            CodecError::InvalidData => INVALID_MESSAGE,
        }
    }
}

/// Result type for codec operations
pub type CodecResult<T> = std::result::Result<T, CodecError>;

/// Internal reason a message or buffer was rejected
///
/// Used for diagnostics only; always collapses to [`CodecError::InvalidData`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub(crate) enum Rejection {
    #[error("message has no headers")]
    NoHeaders,

    #[error("header count {count} exceeds limit {limit}")]
    TooManyHeaders { count: usize, limit: usize },

    #[error("header field is {len} bytes, limit {limit}")]
    HeaderFieldTooLong { len: usize, limit: usize },

    #[error("header field contains non-ASCII text")]
    NonAsciiHeader,

    #[error("payload is empty")]
    EmptyPayload,

    #[error("payload is {len} bytes, limit {limit}")]
    PayloadTooLarge { len: usize, limit: usize },

    #[error("non-ASCII byte {byte:#04x} at offset {offset}")]
    NonAsciiByte { byte: u8, offset: usize },

    #[error("encoded input is empty")]
    EmptyInput,

    #[error("encoded input is {len} bytes, limit {limit}")]
    InputTooLarge { len: usize, limit: usize },

    #[error("truncated input: need {need} bytes at offset {offset}, {remaining} remaining")]
    Truncated {
        offset: usize,
        need: usize,
        remaining: usize,
    },
}

impl From<Rejection> for CodecError {
    fn from(_: Rejection) -> Self {
        CodecError::InvalidData
    }
}
