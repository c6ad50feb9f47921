//! # Twitch PubSub whisper decoding
//!
//! Turns the JSON payloads Twitch PubSub publishes on the `whispers.<user_id>`
//! topic into typed Rust values. The crate does no networking: a transport
//! hands it text, it hands back a [`WhisperEvent`] or a [`DecodeError`].
//!
//! ## Quick Start
//!
//! ```
//! use twitch_whisper::{WhisperKind, parse_whisper};
//!
//! let json = r#"{
//!     "type": "whisper_received",
//!     "data": "{}",
//!     "data_object": {
//!         "id": "1", "sent_ts": "123", "from_id": "9",
//!         "tags": {"login": "bob", "emotes": [], "badges": []},
//!         "recipient": {"id": "9", "badges": []}
//!     }
//! }"#;
//!
//! let event = parse_whisper(json)?;
//! assert_eq!(event.kind(), WhisperKind::WhisperReceived);
//!
//! let whisper = event.whisper_received().unwrap();
//! assert_eq!(whisper.sent_ts, 123);
//! assert_eq!(whisper.tags.display_name.as_deref(), Some("bob"));
//! # Ok::<(), twitch_whisper::DecodeError>(())
//! ```
//!
//! ## Message kinds
//!
//! The `type` field selects the payload:
//!
//! - `whisper_received` - [`WhisperReceived`]: body, sender tags, emotes, badges, recipient
//! - `thread` - [`ThreadUpdate`]: read marker, archive/mute flags, spam info
//! - anything else - [`WhisperPayload::Unknown`], returned as `Ok` so new
//!   message kinds do not break existing consumers
//!
//! ## PubSub frames
//!
//! When the transport hands over whole server frames instead of extracted
//! payloads, use [`parse_frame`]; `MESSAGE` frames on a `whispers.*` topic are
//! decoded into a [`WhisperEvent`], other topics are kept as raw text.
//!
//! ## Configuration
//!
//! [`WhisperParser`] carries [`ParserOptions`]. The free functions use the
//! defaults:
//!
//! ```
//! use twitch_whisper::{ParserOptions, WhisperParser};
//!
//! let parser = WhisperParser::new(
//!     ParserOptions::builder().max_payload_bytes(64 * 1024).build(),
//! );
//! assert!(parser.parse(r#"{"type": "future_event", "data": "{}"}"#).is_ok());
//! ```
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, DecodeError>`](Result). Errors
//! name the wire field at fault:
//!
//! ```
//! use twitch_whisper::{DecodeError, parse_whisper};
//!
//! match parse_whisper(r#"{"data": "{}"}"#) {
//!     Err(DecodeError::MissingField(field)) => assert_eq!(field, "type"),
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```
//!
//! The library logs through the `log` facade at `debug`/`trace` level only
//! and never logs decode failures; reporting them is up to the caller.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod message;
pub mod stream;
pub mod types;

// Re-export commonly used types for external API
pub use error::{DecodeError, Result};
pub use message::{Frame, TopicMessage, TopicPayload, WhisperParser, decode_event};
pub use stream::{decode_frame_lines, decode_lines};

// Re-export type submodules for flat public API
pub use types::identifiers::{ThreadId, UserId};
pub use types::options::{DEFAULT_MAX_PAYLOAD_BYTES, ParserOptions, ParserOptionsBuilder};
pub use types::thread::{SpamInfo, ThreadUpdate};
pub use types::whisper::{
    Badge, Emote, Recipient, Tags, WhisperEvent, WhisperKind, WhisperPayload, WhisperReceived,
};

/// Version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parse whisper JSON text with default options
///
/// # Errors
/// See [`WhisperParser::parse`].
pub fn parse_whisper(json_text: &str) -> Result<WhisperEvent> {
    WhisperParser::default().parse(json_text)
}

/// Parse a PubSub server frame with default options
///
/// # Errors
/// See [`WhisperParser::parse_frame`].
pub fn parse_frame(json_text: &str) -> Result<Frame> {
    WhisperParser::default().parse_frame(json_text)
}
