//! Error types for verse-core.

use thiserror::Error;

/// Result type alias using ParseError.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that can occur while parsing passage text.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("empty passage text")]
    EmptyText,

    #[error("passage does not start with chapter:verse")]
    MissingReference,

    #[error("number out of range: {value}")]
    InvalidNumber { value: String },

    #[error("chapter and verse numbers start at 1, got {value}")]
    ZeroNumber { value: String },

    #[error("verse {num} has no words")]
    EmptyVerse { num: u32 },
}

/// Errors that can occur while encoding or decoding a collection document.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("invalid collection document: {0}")]
    Json(#[from] serde_json::Error),
}
