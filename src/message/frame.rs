//! PubSub server frame envelope
//!
//! Twitch PubSub wraps every topic message in a frame:
//!
//! ```text
//! { "type": "MESSAGE",
//!   "data": { "topic": "whispers.44322889", "message": "<payload json text>" } }
//! ```
//!
//! This module peels that envelope and hands `whispers.*` payloads to
//! [`WhisperParser`]. Payloads of other topics are kept as raw text.

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::types::whisper::WhisperEvent;

use super::fields::{optional_str, required_object, required_str};
use super::parser::WhisperParser;

/// Topic name carrying whisper events
pub const WHISPERS_TOPIC: &str = "whispers";

/// A decoded PubSub server frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "frame", rename_all = "snake_case")]
pub enum Frame {
    /// Message published on a subscribed topic
    Message(TopicMessage),
    /// Reply to a LISTEN/UNLISTEN request
    Response {
        /// Nonce of the request being answered
        #[serde(skip_serializing_if = "Option::is_none")]
        nonce: Option<String>,
        /// Error text, `None` on success
        #[serde(skip_serializing_if = "Option::is_none")]
        error: Option<String>,
    },
    /// Keepalive reply
    Pong,
    /// Server asks the client to reconnect
    Reconnect,
    /// Frame type this crate does not know
    Unknown {
        /// Original `type` value
        frame_type: String,
    },
}

/// Message published on a topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicMessage {
    /// Full topic, e.g. `whispers.44322889`
    pub topic: String,
    /// Decoded message
    pub payload: TopicPayload,
}

impl TopicMessage {
    /// Topic name before the first `.`, e.g. `whispers`
    #[must_use]
    pub fn topic_name(&self) -> &str {
        topic_name(&self.topic)
    }

    /// Topic argument after the first `.`, usually a user or channel id
    #[must_use]
    pub fn topic_argument(&self) -> Option<&str> {
        self.topic.split_once('.').map(|(_, arg)| arg)
    }

    /// The whisper event, if this message came from the whispers topic
    #[must_use]
    pub fn whisper(&self) -> Option<&WhisperEvent> {
        match &self.payload {
            TopicPayload::Whisper(event) => Some(event),
            TopicPayload::Other(_) => None,
        }
    }
}

/// Payload of a topic message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TopicPayload {
    /// Decoded `whispers.*` payload
    Whisper(WhisperEvent),
    /// Any other topic, message text kept verbatim
    Other(String),
}

impl WhisperParser {
    /// Parse a PubSub server frame
    ///
    /// # Errors
    /// Returns `DecodeError::MissingField` if a `MESSAGE` frame lacks `data`,
    /// `topic` or `message`, and any error [`WhisperParser::parse`] reports
    /// for the embedded payload of a `whispers.*` message.
    pub fn parse_frame(&self, json_text: &str) -> Result<Frame> {
        let value = self.parse_value(json_text)?;
        let frame_type = required_str(&value, "type")?;

        let frame = match frame_type.as_str() {
            "MESSAGE" => Frame::Message(self.decode_topic_message(&value)?),
            "RESPONSE" => Frame::Response {
                nonce: optional_str(&value, "nonce").filter(|n| !n.is_empty()),
                error: optional_str(&value, "error").filter(|e| !e.is_empty()),
            },
            "PONG" => Frame::Pong,
            "RECONNECT" => Frame::Reconnect,
            other => {
                log::debug!("Unrecognized PubSub frame type '{other}'");
                Frame::Unknown {
                    frame_type: other.to_string(),
                }
            }
        };
        Ok(frame)
    }

    fn decode_topic_message(&self, json: &Value) -> Result<TopicMessage> {
        let data = required_object(json, "data")?;
        let topic = required_str(data, "topic")?;
        let message = required_str(data, "message")?;

        let payload = if topic_name(&topic) == WHISPERS_TOPIC {
            log::trace!("Routing message on '{topic}' to whisper decoder");
            TopicPayload::Whisper(self.parse(&message)?)
        } else {
            TopicPayload::Other(message)
        };

        Ok(TopicMessage { topic, payload })
    }
}

fn topic_name(topic: &str) -> &str {
    topic.split_once('.').map_or(topic, |(name, _)| name)
}
