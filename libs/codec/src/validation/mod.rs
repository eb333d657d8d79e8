//! # Message Validation System
//!
//! ## Architecture
//!
//! ```text
//! Message ──→ validate_message ──→ builder ──→ bytes
//! bytes   ──→ validate_encoded ──→ parser  ──→ Message
//!                  ↓
//!           Rejection (internal) → CodecError::InvalidData
//! ```
//!
//! Validation runs to completion before any transform starts, so neither
//! direction produces partial output.

// Submodules
pub(crate) mod bounds;
pub mod config;
pub mod validator;

// Re-export main types for convenience
pub use config::{MessageLimits, ValidationConfig};

pub use validator::{is_ascii_byte, is_ascii_text, is_valid_encoded, is_valid_message};
