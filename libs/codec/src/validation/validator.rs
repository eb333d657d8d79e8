//! # Message Validator
//!
//! Predicates gating encode and decode. Each rule is its own check so the
//! first failing rule can be reported in diagnostics; the aggregates stop at
//! the first failure.

use super::config::MessageLimits;
use crate::constants::ASCII_LIMIT;
use crate::error::Rejection;
use types::{Headers, Message};

#[inline]
pub fn is_ascii_byte(byte: u8) -> bool {
    byte < ASCII_LIMIT
}

#[inline]
pub fn is_ascii_text(text: &str) -> bool {
    text.bytes().all(is_ascii_byte)
}

/// Offset and value of the first non-ASCII byte, if any
fn first_non_ascii(bytes: &[u8]) -> Option<(usize, u8)> {
    bytes
        .iter()
        .position(|&b| !is_ascii_byte(b))
        .map(|offset| (offset, bytes[offset]))
}

pub(crate) fn check_headers_present(headers: &Headers) -> Result<(), Rejection> {
    if headers.is_empty() {
        return Err(Rejection::NoHeaders);
    }
    Ok(())
}

pub(crate) fn check_headers_count(headers: &Headers, limit: usize) -> Result<(), Rejection> {
    if headers.len() > limit {
        return Err(Rejection::TooManyHeaders {
            count: headers.len(),
            limit,
        });
    }
    Ok(())
}

pub(crate) fn check_payload_present(payload: &[u8]) -> Result<(), Rejection> {
    if payload.is_empty() {
        return Err(Rejection::EmptyPayload);
    }
    Ok(())
}

pub(crate) fn check_payload_size(payload: &[u8], limit: usize) -> Result<(), Rejection> {
    if payload.len() > limit {
        return Err(Rejection::PayloadTooLarge {
            len: payload.len(),
            limit,
        });
    }
    Ok(())
}

pub(crate) fn check_payload_ascii(payload: &[u8]) -> Result<(), Rejection> {
    match first_non_ascii(payload) {
        Some((offset, byte)) => Err(Rejection::NonAsciiByte { byte, offset }),
        None => Ok(()),
    }
}

/// Size first, then ASCII, for every name and value
pub(crate) fn check_header_fields(headers: &Headers, limit: usize) -> Result<(), Rejection> {
    for (name, value) in headers {
        for field in [name, value] {
            if field.len() > limit {
                return Err(Rejection::HeaderFieldTooLong {
                    len: field.len(),
                    limit,
                });
            }
        }
    }

    let all_ascii = headers
        .iter()
        .all(|(name, value)| is_ascii_text(name) && is_ascii_text(value));
    if !all_ascii {
        return Err(Rejection::NonAsciiHeader);
    }
    Ok(())
}

pub(crate) fn check_encoded_size(data: &[u8], limit: usize) -> Result<(), Rejection> {
    if data.is_empty() {
        return Err(Rejection::EmptyInput);
    }
    if data.len() > limit {
        return Err(Rejection::InputTooLarge {
            len: data.len(),
            limit,
        });
    }
    Ok(())
}

/// Blanket check over the whole input, length and count bytes included
pub(crate) fn check_encoded_ascii(data: &[u8]) -> Result<(), Rejection> {
    match first_non_ascii(data) {
        Some((offset, byte)) => Err(Rejection::NonAsciiByte { byte, offset }),
        None => Ok(()),
    }
}

/// Validate a message before encoding
pub(crate) fn validate_message(message: &Message, limits: &MessageLimits) -> Result<(), Rejection> {
    check_payload_present(&message.payload)?;
    check_headers_present(&message.headers)?;
    check_headers_count(&message.headers, limits.max_headers)?;
    check_payload_size(&message.payload, limits.max_payload_bytes)?;
    check_header_fields(&message.headers, limits.max_header_field_bytes)?;
    check_payload_ascii(&message.payload)
}

/// Validate raw bytes before decoding
pub(crate) fn validate_encoded(data: &[u8], limits: &MessageLimits) -> Result<(), Rejection> {
    check_encoded_size(data, limits.max_encoded_bytes)?;
    check_encoded_ascii(data)
}

/// Whether `message` would be accepted by encode under `limits`
pub fn is_valid_message(message: &Message, limits: &MessageLimits) -> bool {
    validate_message(message, limits).is_ok()
}

/// Whether `data` passes the pre-decode checks under `limits`
///
/// Passing does not guarantee decode succeeds; the header records can still
/// run past the end of the buffer.
pub fn is_valid_encoded(data: &[u8], limits: &MessageLimits) -> bool {
    validate_encoded(data, limits).is_ok()
}
