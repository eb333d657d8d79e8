//! # Message Codec
//!
//! Validate, then transform. Both directions are all-or-nothing: a rejected
//! call returns [`CodecError::InvalidData`] and produces no output.
//!
//! ```rust
//! use codec::{MessageCodec, SimpleMessageCodec};
//! use types::Message;
//!
//! let codec = SimpleMessageCodec::new();
//! let mut message: Message = [("h1", "v1"), ("h2", "v2")].into_iter().collect();
//! message.payload = vec![0x01, 0x02, 0x03, 0x04, 0x05];
//!
//! let bytes = codec.encode(&message)?;
//! assert_eq!(codec.decode(&bytes)?, message);
//! # Ok::<(), codec::CodecError>(())
//! ```

use crate::builder;
use crate::error::{CodecError, CodecResult, Rejection};
use crate::parser::parse_message;
use crate::validation::validator::{validate_encoded, validate_message};
use crate::validation::ValidationConfig;
use tracing::{debug, info, warn};
use types::Message;

/// Encode/decode seam for the header/payload wire format
pub trait MessageCodec {
    /// Encode the given message to its binary representation
    ///
    /// Requires at least one header, a non-empty payload, at most 63 headers,
    /// ASCII header fields of at most 1023 bytes each, and an ASCII payload of
    /// at most 256 KiB.
    fn encode(&self, message: &Message) -> CodecResult<Vec<u8>>;

    /// Decode a binary representation back into a [`Message`]
    ///
    /// Requires non-empty, all-ASCII input of at most 264,774 bytes whose
    /// header records fit inside it.
    fn decode(&self, data: &[u8]) -> CodecResult<Message>;
}

/// Stateless codec; holds only its immutable validation configuration
#[derive(Debug, Clone, Default)]
pub struct SimpleMessageCodec {
    config: ValidationConfig,
}

impl SimpleMessageCodec {
    /// Codec enforcing the wire format contract limits
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ValidationConfig) -> Self {
        Self {
            config: ValidationConfig {
                limits: config.limits.clamped(),
                ..config
            },
        }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate `message` and append its wire form to `buffer`
    ///
    /// `buffer` is left untouched when validation fails.
    pub fn encode_into(&self, message: &Message, buffer: &mut Vec<u8>) -> CodecResult<()> {
        validate_message(message, &self.config.limits)
            .map_err(|reason| self.reject("encode", reason))?;

        let start = buffer.len();
        builder::encode_into(message, buffer);

        if self.config.audit {
            info!(
                headers = message.headers.len(),
                payload_len = message.payload.len(),
                encoded_len = buffer.len() - start,
                "message encoded"
            );
        }
        Ok(())
    }

    fn reject(&self, direction: &'static str, reason: Rejection) -> CodecError {
        if self.config.audit {
            warn!(direction, %reason, "message rejected");
        } else {
            debug!(direction, %reason, "message rejected");
        }
        CodecError::from(reason)
    }
}

impl MessageCodec for SimpleMessageCodec {
    fn encode(&self, message: &Message) -> CodecResult<Vec<u8>> {
        let mut buffer = Vec::with_capacity(builder::encoded_len(message));
        self.encode_into(message, &mut buffer)?;
        Ok(buffer)
    }

    fn decode(&self, data: &[u8]) -> CodecResult<Message> {
        validate_encoded(data, &self.config.limits)
            .map_err(|reason| self.reject("decode", reason))?;

        let message = parse_message(data).map_err(|reason| self.reject("decode", reason))?;

        if self.config.audit {
            info!(
                encoded_len = data.len(),
                headers = message.headers.len(),
                payload_len = message.payload.len(),
                "message decoded"
            );
        }
        Ok(message)
    }
}
