//! Parser options and configuration
//!
//! This module contains the configuration options for [`crate::WhisperParser`],
//! including a builder pattern for easy configuration.

/// Default maximum payload size (1MB)
pub const DEFAULT_MAX_PAYLOAD_BYTES: usize = 1024 * 1024;

// ============================================================================
// Parser Options
// ============================================================================

/// Options for decoding whisper payloads
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserOptions {
    /// Maximum accepted payload size in bytes (default: 1MB)
    pub max_payload_bytes: Option<usize>,
}

impl ParserOptions {
    /// Create a new builder for `ParserOptions`
    #[must_use]
    pub fn builder() -> ParserOptionsBuilder {
        ParserOptionsBuilder::default()
    }

    /// Effective payload size limit
    #[must_use]
    pub fn payload_limit(&self) -> usize {
        self.max_payload_bytes.unwrap_or(DEFAULT_MAX_PAYLOAD_BYTES)
    }
}

// ============================================================================
// Builder for ParserOptions
// ============================================================================

/// Builder for `ParserOptions`
#[derive(Debug, Default)]
pub struct ParserOptionsBuilder {
    options: ParserOptions,
}

impl ParserOptionsBuilder {
    /// Set max payload size
    ///
    /// # Panics
    /// Panics if `bytes` is zero
    #[must_use]
    pub fn max_payload_bytes(mut self, bytes: usize) -> Self {
        assert!(bytes > 0, "max_payload_bytes must be greater than zero");
        self.options.max_payload_bytes = Some(bytes);
        self
    }

    /// Build the options
    #[must_use]
    pub fn build(self) -> ParserOptions {
        self.options
    }
}
