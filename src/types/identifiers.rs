//! Newtype wrappers for type safety
//!
//! Twitch user ids and whisper thread ids are both plain strings on the wire;
//! wrapping them keeps a sender id from being passed where a thread id is
//! expected.

use std::fmt;

use serde::Serialize;

// ============================================================================
// Newtype Wrappers for Type Safety
// ============================================================================

/// Twitch user ID newtype
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Create a new user ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the user ID as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Whisper thread ID newtype
///
/// Twitch builds these from the two participants' user ids, e.g. `"123_456"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ThreadId(String);

impl ThreadId {
    /// Create a new thread ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the thread ID as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// User ids of the two participants, when the id has the `a_b` form
    #[must_use]
    pub fn participants(&self) -> Option<(UserId, UserId)> {
        let (a, b) = self.0.split_once('_')?;
        if a.is_empty() || b.is_empty() {
            return None;
        }
        Some((UserId::from(a), UserId::from(b)))
    }
}

impl fmt::Display for ThreadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ThreadId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ThreadId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
