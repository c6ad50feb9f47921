//! Whisper message parser for PubSub `whispers` topic payloads

use serde_json::Value;

use crate::error::{DecodeError, Result};
use crate::types::options::ParserOptions;
use crate::types::thread::{SpamInfo, ThreadUpdate};
use crate::types::whisper::{
    Badge, Emote, Recipient, Tags, WhisperEvent, WhisperPayload, WhisperReceived,
};

use super::fields::{
    optional_str, required_array, required_bool, required_int, required_object, required_str,
};

/// Stateless decoder for whisper payloads
///
/// Holds only its [`ParserOptions`]; `parse` takes `&self` and may be called
/// from any number of threads at once.
#[derive(Debug, Clone, Default)]
pub struct WhisperParser {
    options: ParserOptions,
}

impl WhisperParser {
    /// Create a parser with the given options
    #[must_use]
    pub const fn new(options: ParserOptions) -> Self {
        Self { options }
    }

    /// Options this parser was built with
    #[must_use]
    pub const fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parse whisper JSON text into a typed event
    ///
    /// # Errors
    /// Returns `DecodeError::PayloadTooLarge` if the text exceeds the configured
    /// limit, `DecodeError::Malformed` if it is not a JSON object, and a
    /// field-level error if any required field is missing or mistyped.
    /// Unrecognized `type` values are not errors.
    pub fn parse(&self, json_text: &str) -> Result<WhisperEvent> {
        let value = self.parse_value(json_text)?;
        decode_event(&value)
    }

    /// Check the size limit and parse text into a JSON object
    pub(crate) fn parse_value(&self, json_text: &str) -> Result<Value> {
        let limit = self.options.payload_limit();
        if json_text.len() > limit {
            return Err(DecodeError::payload_too_large(json_text.len(), limit));
        }

        let value: Value = serde_json::from_str(json_text)?;
        if !value.is_object() {
            return Err(DecodeError::malformed("expected a JSON object at top level"));
        }
        Ok(value)
    }
}

/// Decode an already-parsed whisper document
///
/// # Errors
/// Same field-level errors as [`WhisperParser::parse`].
pub fn decode_event(json: &Value) -> Result<WhisperEvent> {
    let raw_type = required_str(json, "type")?;
    let raw_data = required_str(json, "data")?;

    let payload = match raw_type.as_str() {
        "whisper_received" => {
            let data = required_object(json, "data_object")?;
            WhisperPayload::WhisperReceived(decode_whisper_received(data)?)
        }
        "thread" => {
            let data = required_object(json, "data_object")?;
            WhisperPayload::Thread(decode_thread(data)?)
        }
        other => {
            log::debug!("Unrecognized whisper type '{other}', keeping raw data only");
            WhisperPayload::Unknown
        }
    };

    log::trace!("Decoded whisper event of type '{raw_type}'");
    Ok(WhisperEvent {
        raw_type,
        raw_data,
        payload,
    })
}

// ============================================================================
// whisper_received
// ============================================================================

fn decode_whisper_received(json: &Value) -> Result<WhisperReceived> {
    Ok(WhisperReceived {
        id: required_str(json, "id")?,
        thread_id: optional_str(json, "thread_id").map(Into::into),
        body: optional_str(json, "body"),
        sent_ts: required_int(json, "sent_ts")?,
        from_id: required_str(json, "from_id")?.into(),
        nonce: optional_str(json, "nonce"),
        tags: decode_tags(required_object(json, "tags")?)?,
        recipient: decode_recipient(required_object(json, "recipient")?)?,
    })
}

fn decode_tags(json: &Value) -> Result<Tags> {
    let login = optional_str(json, "login");
    Ok(Tags {
        // display_name mirrors login; the payload's display_name key is ignored
        display_name: login.clone(),
        login,
        color: optional_str(json, "color"),
        user_type: optional_str(json, "user_type"),
        emotes: required_array(json, "emotes")?
            .iter()
            .map(decode_emote)
            .collect::<Result<Vec<_>>>()?,
        badges: decode_badges(json)?,
    })
}

fn decode_emote(json: &Value) -> Result<Emote> {
    Ok(Emote {
        id: required_int(json, "id")?,
        start: required_int(json, "start")?,
        end: required_int(json, "end")?,
    })
}

fn decode_recipient(json: &Value) -> Result<Recipient> {
    Ok(Recipient {
        id: required_str(json, "id")?.into(),
        username: optional_str(json, "username"),
        display_name: optional_str(json, "display_name"),
        color: optional_str(json, "color"),
        user_type: optional_str(json, "user_type"),
        badges: decode_badges(json)?,
    })
}

fn decode_badges(json: &Value) -> Result<Vec<Badge>> {
    Ok(required_array(json, "badges")?
        .iter()
        .map(|badge| Badge {
            id: optional_str(badge, "id"),
            version: optional_str(badge, "version"),
        })
        .collect())
}

// ============================================================================
// thread
// ============================================================================

fn decode_thread(json: &Value) -> Result<ThreadUpdate> {
    Ok(ThreadUpdate {
        id: required_str(json, "id")?.into(),
        last_read: required_int(json, "last_read")?,
        archived: required_bool(json, "archived")?,
        muted: required_bool(json, "muted")?,
        spam_info: decode_spam_info(required_object(json, "spam_info")?)?,
    })
}

fn decode_spam_info(json: &Value) -> Result<SpamInfo> {
    Ok(SpamInfo {
        likelihood: required_str(json, "likelihood")?,
        last_marked_not_spam: required_int(json, "last_marked_not_spam")?,
    })
}
