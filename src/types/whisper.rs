//! Whisper event type definitions
//!
//! This module contains the top-level [`WhisperEvent`] and the value objects
//! of a `whisper_received` message: tags, emotes, badges and the recipient.
//! Thread updates live in [`super::thread`].

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::identifiers::{ThreadId, UserId};
use super::thread::ThreadUpdate;

// ============================================================================
// Event Types
// ============================================================================

/// Discriminator of a whisper event, derived from its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WhisperKind {
    /// A whisper was received
    WhisperReceived,
    /// Thread metadata changed
    Thread,
    /// A message type this crate does not know
    Unknown,
}

impl WhisperKind {
    /// Wire value of the `type` field for this kind, if it has a fixed one
    #[must_use]
    pub const fn wire_name(self) -> Option<&'static str> {
        match self {
            Self::WhisperReceived => Some("whisper_received"),
            Self::Thread => Some("thread"),
            Self::Unknown => None,
        }
    }
}

impl fmt::Display for WhisperKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name().unwrap_or("unknown"))
    }
}

/// Decoded payload of a whisper event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WhisperPayload {
    /// `whisper_received` payload
    WhisperReceived(WhisperReceived),
    /// `thread` payload
    Thread(ThreadUpdate),
    /// Unrecognized `type`; nothing beyond `data` was decoded
    Unknown,
}

/// A decoded message from the `whispers` PubSub topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WhisperEvent {
    /// Original `type` discriminator
    pub raw_type: String,
    /// Original `data` text, kept verbatim
    pub raw_data: String,
    /// Decoded payload
    pub payload: WhisperPayload,
}

impl WhisperEvent {
    /// Kind of this event
    #[must_use]
    pub const fn kind(&self) -> WhisperKind {
        match self.payload {
            WhisperPayload::WhisperReceived(_) => WhisperKind::WhisperReceived,
            WhisperPayload::Thread(_) => WhisperKind::Thread,
            WhisperPayload::Unknown => WhisperKind::Unknown,
        }
    }

    /// The `whisper_received` payload, if this is one
    #[must_use]
    pub fn whisper_received(&self) -> Option<&WhisperReceived> {
        match &self.payload {
            WhisperPayload::WhisperReceived(whisper) => Some(whisper),
            _ => None,
        }
    }

    /// The `thread` payload, if this is one
    #[must_use]
    pub fn thread(&self) -> Option<&ThreadUpdate> {
        match &self.payload {
            WhisperPayload::Thread(thread) => Some(thread),
            _ => None,
        }
    }
}

// ============================================================================
// whisper_received
// ============================================================================

/// A whisper delivered to the subscribed user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WhisperReceived {
    /// Message ID
    pub id: String,
    /// Thread the whisper belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_id: Option<ThreadId>,
    /// Message text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Send time, Unix epoch milliseconds
    pub sent_ts: i64,
    /// Sender user ID
    pub from_id: UserId,
    /// Client nonce echoed back by Twitch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,
    /// Sender tags
    pub tags: Tags,
    /// Receiving user
    pub recipient: Recipient,
}

impl WhisperReceived {
    /// Send time as a UTC timestamp
    ///
    /// Returns `None` when `sent_ts` is outside the range chrono can represent.
    #[must_use]
    pub fn sent_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.sent_ts)
    }
}

/// Sender metadata attached to a whisper
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Tags {
    /// Sender login
    pub login: Option<String>,
    /// Sender display name
    ///
    /// Always holds the `login` value; the payload's own `display_name` key
    /// is not read.
    pub display_name: Option<String>,
    /// Sender chat color, e.g. `#1E90FF`
    pub color: Option<String>,
    /// Sender user type (`staff`, `admin`, ...); empty for regular users
    pub user_type: Option<String>,
    /// Emotes used in the body, in payload order
    pub emotes: Vec<Emote>,
    /// Sender badges, in payload order
    pub badges: Vec<Badge>,
}

impl Tags {
    /// Whether the sender carries a badge with this id
    #[must_use]
    pub fn has_badge(&self, id: &str) -> bool {
        self.badges.iter().any(|badge| badge.id.as_deref() == Some(id))
    }
}

/// Emote occurrence inside a whisper body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Emote {
    /// Emote ID
    pub id: i32,
    /// Character offset of the first character
    pub start: i32,
    /// Character offset of the last character, inclusive
    pub end: i32,
}

impl Emote {
    /// Whether `start <= end`
    #[must_use]
    pub const fn is_well_formed(&self) -> bool {
        self.start <= self.end
    }

    /// Number of characters covered, or 0 for a reversed range
    #[must_use]
    pub const fn len(&self) -> usize {
        if self.is_well_formed() {
            (self.end as i64 - self.start as i64 + 1) as usize
        } else {
            0
        }
    }

    /// Whether the emote covers no characters
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// User a whisper was sent to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recipient {
    /// Recipient user ID
    pub id: UserId,
    /// Recipient login
    pub username: Option<String>,
    /// Recipient display name
    pub display_name: Option<String>,
    /// Recipient chat color
    pub color: Option<String>,
    /// Recipient user type
    pub user_type: Option<String>,
    /// Recipient badges, in payload order
    pub badges: Vec<Badge>,
}

/// Chat badge
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Badge {
    /// Badge set, e.g. `subscriber`
    pub id: Option<String>,
    /// Badge version within the set
    pub version: Option<String>,
}
