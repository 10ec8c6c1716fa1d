//! Error types for string-le.
//!
//! All fallible operations in the library return [`Result`]. The error
//! taxonomy is deliberately small:
//!
//! - `Parse` - the document does not conform to the requested format's
//!   grammar. Carries the format tag and the underlying parser diagnostic.
//!   The total [`crate::extract`] entry point recovers from these locally
//!   (empty output plus one `tracing::warn!` event); [`crate::try_extract`]
//!   surfaces them to callers that want the diagnostic.
//! - `Validation` - invalid configuration input (unreadable config file,
//!   malformed TOML in a config file, and similar).
//! - `Io` - file system errors. These always bubble up unchanged.
//! - `Sink` - a host-provided batch sink failed while draining a stream.
//!
//! Out-of-range extraction options (for example a column index past the last
//! column) are never errors: the engine degrades to its default behavior, per
//! the configuration-error policy.
use crate::types::Format;
use thiserror::Error;

/// Result type alias using `StringLeError`.
pub type Result<T> = std::result::Result<T, StringLeError>;

/// Main error type for all string-le operations.
#[derive(Debug, Error)]
pub enum StringLeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed input for a specific format. Displays as
    /// `Invalid <FORMAT>: <diagnostic>`, which is the stable message shape
    /// hosts may match on.
    #[error("Invalid {format}: {message}")]
    Parse { format: Format, message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Sink error: {message}")]
    Sink { message: String },

    #[error("{0}")]
    Other(String),
}

impl StringLeError {
    /// Create a parse error for the given format.
    pub fn parse<S: Into<String>>(format: Format, message: S) -> Self {
        Self::Parse {
            format,
            message: message.into(),
        }
    }

    /// Create a validation error.
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a sink error.
    pub fn sink<S: Into<String>>(message: S) -> Self {
        Self::Sink {
            message: message.into(),
        }
    }

    /// The format tag, when this is a parse error.
    pub fn format(&self) -> Option<Format> {
        match self {
            Self::Parse { format, .. } => Some(*format),
            _ => None,
        }
    }
}
