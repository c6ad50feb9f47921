//! Error types for whisper decoding

use thiserror::Error;

/// Error returned when a whisper payload cannot be decoded
///
/// Every variant that concerns a specific field carries the wire name of that
/// field, so callers can tell `sent_ts` apart from `last_read` without
/// inspecting the message text.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// Input is not valid JSON, or the top level is not a JSON object
    #[error("Malformed JSON: {0}")]
    Malformed(String),

    /// A required field is absent, `null`, or of a shape that cannot hold it
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// A field expected to hold an integer does not
    #[error("Invalid number in field '{0}'")]
    InvalidNumber(&'static str),

    /// A field expected to hold `true`/`false` does not
    #[error("Invalid boolean in field '{0}'")]
    InvalidBoolean(&'static str),

    /// Input exceeds the configured size limit
    #[error("Payload of {size} bytes exceeds maximum of {limit} bytes")]
    PayloadTooLarge {
        /// Size of the rejected payload in bytes
        size: usize,
        /// Configured limit in bytes
        limit: usize,
    },

    /// I/O error while reading newline-delimited input
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for decode operations
pub type Result<T> = std::result::Result<T, DecodeError>;

impl DecodeError {
    /// Create a malformed-input error
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }

    /// Create a missing field error
    #[must_use]
    pub const fn missing_field(field: &'static str) -> Self {
        Self::MissingField(field)
    }

    /// Create an invalid number error
    #[must_use]
    pub const fn invalid_number(field: &'static str) -> Self {
        Self::InvalidNumber(field)
    }

    /// Create an invalid boolean error
    #[must_use]
    pub const fn invalid_boolean(field: &'static str) -> Self {
        Self::InvalidBoolean(field)
    }

    /// Create a payload size error
    #[must_use]
    pub const fn payload_too_large(size: usize, limit: usize) -> Self {
        Self::PayloadTooLarge { size, limit }
    }

    /// Wire name of the field this error concerns, if any
    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::MissingField(name) | Self::InvalidNumber(name) | Self::InvalidBoolean(name) => {
                Some(*name)
            }
            Self::Malformed(_) | Self::PayloadTooLarge { .. } | Self::Io(_) => None,
        }
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}
