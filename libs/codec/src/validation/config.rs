//! # Validation Configuration Module
//!
//! Limits used by the codec and the audit logging switch. Defaults are the wire
//! format contract; deployment overrides can only make limits stricter.

use crate::constants::{
    MAX_ENCODED_MESSAGE_BYTES, MAX_HEADERS_COUNT, MAX_HEADER_FIELD_BYTES, MAX_PAYLOAD_BYTES,
};
use serde::{Deserialize, Serialize};

/// Validation configuration for a codec instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Size limits enforced by encode and decode
    pub limits: MessageLimits,

    /// Log successful operations at info level and rejections at warn level
    pub audit: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            limits: MessageLimits::default(),
            audit: false,
        }
    }
}

/// Size limits for messages and encoded buffers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageLimits {
    /// Maximum number of headers on encode
    pub max_headers: usize,
    /// Maximum byte length of a header name or value on encode
    pub max_header_field_bytes: usize,
    /// Maximum payload length on encode
    pub max_payload_bytes: usize,
    /// Maximum input length on decode
    pub max_encoded_bytes: usize,
}

impl Default for MessageLimits {
    fn default() -> Self {
        Self {
            max_headers: MAX_HEADERS_COUNT,
            max_header_field_bytes: MAX_HEADER_FIELD_BYTES,
            max_payload_bytes: MAX_PAYLOAD_BYTES,
            max_encoded_bytes: MAX_ENCODED_MESSAGE_BYTES,
        }
    }
}

impl MessageLimits {
    /// Clamp every limit to the wire format ceiling
    pub fn clamped(self) -> Self {
        let ceiling = Self::default();
        Self {
            max_headers: self.max_headers.min(ceiling.max_headers),
            max_header_field_bytes: self
                .max_header_field_bytes
                .min(ceiling.max_header_field_bytes),
            max_payload_bytes: self.max_payload_bytes.min(ceiling.max_payload_bytes),
            max_encoded_bytes: self.max_encoded_bytes.min(ceiling.max_encoded_bytes),
        }
    }
}

impl ValidationConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup
    ///
    /// Unparseable values are ignored. Limits above the wire format ceiling are
    /// clamped back down to it.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(val) = lookup("MESSAGE_CODEC_AUDIT") {
            config.audit = matches!(
                val.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            );
        }

        if let Some(max) = parse_usize(&lookup, "MESSAGE_CODEC_MAX_HEADERS") {
            config.limits.max_headers = max;
        }

        if let Some(max) = parse_usize(&lookup, "MESSAGE_CODEC_MAX_HEADER_FIELD_BYTES") {
            config.limits.max_header_field_bytes = max;
        }

        if let Some(max) = parse_usize(&lookup, "MESSAGE_CODEC_MAX_PAYLOAD_BYTES") {
            config.limits.max_payload_bytes = max;
        }

        if let Some(max) = parse_usize(&lookup, "MESSAGE_CODEC_MAX_ENCODED_BYTES") {
            config.limits.max_encoded_bytes = max;
        }

        config.limits = config.limits.clamped();
        config
    }

    /// Default limits with audit logging enabled
    pub fn audited() -> Self {
        Self {
            audit: true,
            ..Self::default()
        }
    }

    /// Custom limits, clamped to the wire format ceiling
    pub fn with_limits(limits: MessageLimits) -> Self {
        Self {
            limits: limits.clamped(),
            audit: false,
        }
    }
}

fn parse_usize<F>(lookup: &F, key: &str) -> Option<usize>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).and_then(|val| val.trim().parse().ok())
}
