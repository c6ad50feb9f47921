//! Type definitions for whisper decoding
//!
//! - [`identifiers`] - Type-safe ID wrappers (`UserId`, `ThreadId`)
//! - [`whisper`] - The top-level event and `whisper_received` payload
//! - [`thread`] - `thread` payload
//! - [`options`] - Parser configuration

pub mod identifiers;
pub mod options;
pub mod thread;
pub mod whisper;

// Re-export commonly used types
pub use identifiers::{ThreadId, UserId};
pub use options::{DEFAULT_MAX_PAYLOAD_BYTES, ParserOptions, ParserOptionsBuilder};
pub use thread::{SpamInfo, ThreadUpdate};
pub use whisper::{
    Badge, Emote, Recipient, Tags, WhisperEvent, WhisperKind, WhisperPayload, WhisperReceived,
};
