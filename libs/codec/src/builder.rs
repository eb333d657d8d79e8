//! # Message Builder - Wire Form Construction
//!
//! Writes a message in the wire layout. No validation happens here; callers go
//! through [`SimpleMessageCodec`](crate::SimpleMessageCodec) unless the message
//! is already known to be valid.
//!
//! Each length byte is the low 8 bits of the field length. Fields of 256 to
//! 1023 bytes pass validation but wrap, and decoders will misread the record.
//! The wrap is kept for byte-for-byte compatibility with existing peers.

use crate::constants::{COUNT_FIELD_BYTES, LENGTH_FIELD_BYTES};
use types::Message;

/// Exact number of bytes [`encode_into`] appends for `message`
pub fn encoded_len(message: &Message) -> usize {
    let records: usize = message
        .headers
        .iter()
        .map(|(name, value)| 2 * LENGTH_FIELD_BYTES + name.len() + value.len())
        .sum();
    COUNT_FIELD_BYTES + records + message.payload.len()
}

/// Append the wire form of `message` to `buffer`
pub fn encode_into(message: &Message, buffer: &mut Vec<u8>) {
    buffer.reserve(encoded_len(message));

    buffer.push(message.headers.len() as u8);
    for (name, value) in &message.headers {
        buffer.push(name.len() as u8);
        buffer.push(value.len() as u8);
        buffer.extend_from_slice(name.as_bytes());
        buffer.extend_from_slice(value.as_bytes());
    }
    buffer.extend_from_slice(&message.payload);
}

/// Wire form of `message` in a freshly sized buffer
pub fn encode_message(message: &Message) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(encoded_len(message));
    encode_into(message, &mut buffer);
    buffer
}
