//! Thread update type definitions

use serde::Serialize;

use super::identifiers::ThreadId;

/// Thread metadata pushed when a whisper thread changes state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThreadUpdate {
    /// Thread ID
    pub id: ThreadId,
    /// Last time the thread was read, Unix epoch
    pub last_read: i64,
    /// Whether the thread is archived
    pub archived: bool,
    /// Whether notifications for the thread are muted
    pub muted: bool,
    /// Spam classification
    pub spam_info: SpamInfo,
}

/// Spam classification of a whisper thread
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpamInfo {
    /// Likelihood category, e.g. `low`
    pub likelihood: String,
    /// Last time the thread was marked as not spam, Unix epoch
    pub last_marked_not_spam: i64,
}
