//! # Message Parser
//!
//! Reads the wire layout back into a [`Message`] with a forward-only cursor.
//! Expects input that already passed the pre-decode checks; the only failure
//! left here is a record that runs past the end of the buffer.

use crate::error::Rejection;
use crate::validation::bounds::ByteCursor;
use tracing::trace;
use types::{Headers, Message};

/// Parse a complete encoded message
///
/// Header names that repeat overwrite earlier values. Whatever follows the
/// last header record is the payload, which may be empty.
pub(crate) fn parse_message(data: &[u8]) -> Result<Message, Rejection> {
    let mut cursor = ByteCursor::new(data);
    let header_count = cursor.read_u8()? as usize;

    let mut headers = Headers::new();
    for index in 0..header_count {
        let name_len = cursor.read_u8()? as usize;
        let value_len = cursor.read_u8()? as usize;
        let name = read_text(&mut cursor, name_len)?;
        let value = read_text(&mut cursor, value_len)?;

        trace!(
            index,
            name = %name,
            value_len,
            offset = cursor.position(),
            "parsed header record"
        );
        headers.insert(name, value);
    }

    trace!(
        header_count,
        payload_len = cursor.remaining(),
        "parsed message"
    );
    Ok(Message::new(headers, cursor.rest().to_vec()))
}

/// Read `len` bytes as one character per byte
fn read_text(cursor: &mut ByteCursor<'_>, len: usize) -> Result<String, Rejection> {
    let bytes = cursor.read_slice(len)?;
    Ok(bytes.iter().map(|&b| char::from(b)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_zero_headers() {
        let message = parse_message(&[0, b'h', b'i']).unwrap();
        assert!(message.headers.is_empty());
        assert_eq!(message.payload, b"hi");
    }

    #[test]
    fn test_parse_empty_payload() {
        let message = parse_message(&[1, 1, 1, b'a', b'b']).unwrap();
        assert_eq!(message.header("a"), Some("b"));
        assert!(message.payload.is_empty());
    }

    #[test]
    fn test_duplicate_names_keep_last() {
        let data = [2, 1, 1, b'k', b'1', 1, 1, b'k', b'2', b'.'];
        let message = parse_message(&data).unwrap();
        assert_eq!(message.header_count(), 1);
        assert_eq!(message.header("k"), Some("2"));
    }

    #[test]
    fn test_truncated_records() {
        // count says two headers, only one present
        assert!(matches!(
            parse_message(&[2, 1, 1, b'a', b'b']),
            Err(Rejection::Truncated { .. })
        ));
        // length byte missing
        assert!(parse_message(&[1, 1]).is_err());
        // value longer than the buffer
        assert!(parse_message(&[1, 1, 9, b'a', b'b']).is_err());
        // count byte alone
        assert!(parse_message(&[1]).is_err());
    }
}
