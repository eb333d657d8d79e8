//! # Message Types
//!
//! Plain data structures for the header/payload message wire format.
//!
//! ## Design Philosophy
//!
//! - **Pure Data**: `Message` carries headers and payload and nothing else
//! - **Rules Elsewhere**: size limits, ASCII checks and the binary layout live in
//!   the `codec` crate
//! - **Deterministic Order**: headers are kept in a sorted map so encoding the
//!   same message always yields the same bytes
//!
//! ## Quick Start
//!
//! ```rust
//! use types::{Headers, Message};
//!
//! let mut headers = Headers::new();
//! headers.insert("Content-Type".to_string(), "text/plain".to_string());
//!
//! let message = Message::new(headers, b"Hello".to_vec());
//! assert_eq!(message.header("Content-Type"), Some("text/plain"));
//! assert_eq!(message.payload_len(), 5);
//! ```
//!
//! ## Architecture Role
//!
//! ```text
//! libs/types → libs/codec → (transport, out of scope)
//!     ↑            ↓
//! Pure Data   Validation/Encoding
//! Message     SimpleMessageCodec
//! ```

pub mod message;

pub use message::{Headers, Message};
