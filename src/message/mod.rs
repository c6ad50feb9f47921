//! Whisper message decoding
//!
//! - [`parser`] - [`WhisperParser`] and the per-entity decoders
//! - [`frame`] - PubSub frame envelope around topic messages

mod fields;
pub mod frame;
pub mod parser;

pub use frame::{Frame, TopicMessage, TopicPayload, WHISPERS_TOPIC};
pub use parser::{WhisperParser, decode_event};
