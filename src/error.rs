//! Application error types.
//!
//! Provides unified error handling with actionable context for debugging.

use thiserror::Error;

/// Application result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types with specific context for actionable debugging
#[derive(Debug, Error)]
pub enum Error {
    /// IO error with path context
    #[error("IO error at {path:?}: {source}")]
    Io {
        /// The underlying IO error.
        source: std::io::Error,
        /// File path where the error occurred, if known.
        path: Option<std::path::PathBuf>,
    },

    /// Book ordinal outside 1..=66
    #[error("Unknown book ordinal: {0}")]
    UnknownBook(u8),

    /// Chapter has no verse-count entry for the given book
    #[error("Unknown chapter {chapter} for book {book}")]
    UnknownChapter {
        /// Book ordinal (1..=66).
        book: u8,
        /// The chapter number that has no entry.
        chapter: u16,
    },

    /// Book resolved but chapter or verse is out of range
    #[error("Not a valid scripture reference: {0}")]
    InvalidScripture(String),

    /// A retrieval URL failed basic well-formedness checks
    #[error("Not a valid lookup url: {0}")]
    InvalidUrl(String),

    /// The content source did not return usable page content
    #[error("Online scripture lookup failed: {message}")]
    LookupFailed {
        /// Human-readable description of what went missing.
        message: String,
        /// Actionable suggestion for resolving the error.
        hint: Option<&'static str>,
    },

    /// Network error (connection, timeout, DNS)
    #[error("Network error: {0}")]
    Network(String),

    /// Page or identifier parsing error
    #[error("Parse error: {message}")]
    Parse {
        /// Description of the parse failure.
        message: String,
        /// The input fragment that failed to parse, if useful.
        input: Option<String>,
    },

    /// Configuration error with guidance
    #[error("Configuration error: {message}. {hint}")]
    Config {
        /// Description of the configuration problem.
        message: String,
        /// Actionable guidance for fixing the issue.
        hint: &'static str,
    },

    /// Generic message error (escape hatch)
    #[error("{0}")]
    Msg(String),
}

impl Error {
    /// Create an IO error with path context
    #[allow(dead_code)]
    pub fn io(source: std::io::Error, path: impl Into<Option<std::path::PathBuf>>) -> Self {
        Self::Io { source, path: path.into() }
    }

    /// Create an `InvalidScripture` error from the offending reference text
    pub fn invalid_scripture(reference: impl Into<String>) -> Self {
        Self::InvalidScripture(reference.into())
    }

    /// Create a lookup failure with an HTTP-status-derived hint
    pub fn lookup_status(message: impl Into<String>, status: u16) -> Self {
        let hint = match status {
            404 => Some("The cited verse or paragraph does not exist at the source"),
            429 => Some("Rate limited - wait a moment and try again"),
            500..=599 => Some("Source server error - try again later"),
            _ => None,
        };
        Self::LookupFailed { message: message.into(), hint }
    }

    /// Create a lookup failure without status context
    pub fn lookup_failed(message: impl Into<String>) -> Self {
        Self::LookupFailed { message: message.into(), hint: None }
    }

    /// Create a config error with actionable hint
    pub fn config(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Config { message: message.into(), hint }
    }

    /// Create a parse error with the offending input
    pub fn parse(message: impl Into<String>, input: impl Into<Option<String>>) -> Self {
        Self::Parse { message: message.into(), input: input.into() }
    }
}

// Convenience conversions
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io { source: e, path: None }
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Self::Msg(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Self::Msg(s.to_string())
    }
}
