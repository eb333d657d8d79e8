//! # Wire Format Constants
//!
//! Limits and field widths of the header/payload wire format. These values are
//! part of the contract between encoders and decoders and must not drift.
//!
//! ```text
//! ┌───────┬──────────────────────────────────────────┬──────────────┐
//! │ count │ header record × count                    │ payload      │
//! │ 1 B   │ [nameLen 1B][valueLen 1B][name][value]   │ remainder    │
//! └───────┴──────────────────────────────────────────┴──────────────┘
//! ```

/// Maximum number of headers a message may carry
pub const MAX_HEADERS_COUNT: usize = 63;

/// Maximum byte length of a single header name or value
///
/// The length field on the wire is one byte, so lengths above 255 are written
/// modulo 256. Encode accepts them anyway; decode of such a record desyncs.
pub const MAX_HEADER_FIELD_BYTES: usize = 1023;

/// Maximum payload length accepted by encode (256 KiB)
pub const MAX_PAYLOAD_BYTES: usize = 256 * 1024;

/// Maximum input length accepted by decode
pub const MAX_ENCODED_MESSAGE_BYTES: usize = 264_774;

/// Width of the leading header count field
pub const COUNT_FIELD_BYTES: usize = 1;

/// Width of each per-header length field
pub const LENGTH_FIELD_BYTES: usize = 1;

/// Bytes at or above this value are not 7-bit ASCII
pub const ASCII_LIMIT: u8 = 0x80;

/// Text carried by every codec rejection
pub const INVALID_MESSAGE: &str =
    "Invalid message: The message does not meet the required format.";
