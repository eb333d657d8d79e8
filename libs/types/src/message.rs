//! Message data holder
//!
//! A message is a set of string header pairs plus a raw payload. Nothing here
//! enforces the wire limits; a `Message` may hold data the codec will reject.

use std::collections::BTreeMap;

/// Header storage: unique names, iterated in sorted order
///
/// Inserting an existing name replaces its value, which is how duplicate
/// header names are resolved on decode.
pub type Headers = BTreeMap<String, String>;

/// Message made of header pairs and a payload
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    /// Header name → header value
    pub headers: Headers,
    /// Message body bytes
    pub payload: Vec<u8>,
}

impl Message {
    pub fn new(headers: Headers, payload: Vec<u8>) -> Self {
        Self { headers, payload }
    }

    /// Look up a header value by exact name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    pub fn header_count(&self) -> usize {
        self.headers.len()
    }

    pub fn payload_len(&self) -> usize {
        self.payload.len()
    }

    /// Add or replace a header, returning the previous value if one existed
    pub fn insert_header(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.headers.insert(name.into(), value.into())
    }
}

impl<K, V> FromIterator<(K, V)> for Message
where
    K: Into<String>,
    V: Into<String>,
{
    /// Collect header pairs into a message with an empty payload
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let headers = iter
            .into_iter()
            .map(|(name, value)| (name.into(), value.into()))
            .collect();
        Self {
            headers,
            payload: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_header_replaces_existing_value() {
        let mut message = Message::default();
        assert_eq!(message.insert_header("h1", "first"), None);
        assert_eq!(message.insert_header("h1", "second"), Some("first".to_string()));

        assert_eq!(message.header_count(), 1);
        assert_eq!(message.header("h1"), Some("second"));
    }

    #[test]
    fn test_equality_ignores_insertion_order() {
        let mut a = Message::default();
        a.insert_header("h2", "v2");
        a.insert_header("h1", "v1");
        a.payload = b"body".to_vec();

        let mut b: Message = [("h1", "v1"), ("h2", "v2")].into_iter().collect();
        b.payload = b"body".to_vec();

        assert_eq!(a, b);
    }

    #[test]
    fn test_headers_iterate_in_sorted_order() {
        let message: Message = [("b", "2"), ("a", "1"), ("c", "3")].into_iter().collect();
        let names: Vec<&str> = message.headers.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_missing_header_lookup() {
        let message: Message = [("h1", "v1")].into_iter().collect();
        assert_eq!(message.header("H1"), None);
        assert_eq!(message.payload_len(), 0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_serialization_shape() {
        let mut message: Message = [("Content-Type", "text/plain")].into_iter().collect();
        message.payload = vec![72, 105];

        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["headers"]["Content-Type"], "text/plain");
        assert_eq!(json["payload"], serde_json::json!([72, 105]));

        let restored: Message = serde_json::from_value(json).unwrap();
        assert_eq!(restored, message);
    }
}
