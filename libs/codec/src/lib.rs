//! # Message Codec - Header/Payload Wire Format
//!
//! ## Purpose
//!
//! This crate contains the "Rules" layer for the header/payload message format:
//! - Binary encoding and decoding of [`types::Message`]
//! - Validation gating both directions
//! - Wire format constants and the single codec error
//!
//! ## Wire Layout
//!
//! ```text
//! [count:1] ([nameLen:1][valueLen:1][name][value]) × count [payload...]
//! ```
//!
//! All length fields are one byte, so there is no byte order. There is no magic
//! number, version or checksum; the payload is whatever follows the last header
//! record.
//!
//! ## Architecture Role
//!
//! ```text
//! libs/types → [codec] → (transport, not provided)
//!     ↑           ↓
//! Pure Data   Validation/Encoding
//! Message     SimpleMessageCodec
//! ```
//!
//! ## Error Model
//!
//! Every rejection is [`CodecError::InvalidData`] with the same message. The
//! rule that failed is logged through `tracing` at debug level (warn with
//! audit enabled) but never returned to the caller.
//!
//! ## What This Crate Does NOT Contain
//! - Transport, framing or socket handling
//! - Compression, checksums or non-ASCII text support
//! - A logging subscriber; install one in the binary that uses the codec

// Core modules
pub mod builder;
pub mod constants;
pub mod error;
pub mod message_codec;
mod parser;
pub mod validation;

// Re-export key types for convenience
pub use constants::*;
pub use error::{CodecError, CodecResult};
pub use message_codec::{MessageCodec, SimpleMessageCodec};
pub use validation::{MessageLimits, ValidationConfig};

pub use types::{Headers, Message};
