//! Error types
//!
//! Degenerate input (empty text, too few sentences) is never an error; it
//! produces a well-formed, possibly minimal, summary. Only resource and
//! configuration failures surface here.

use thiserror::Error;

/// Errors surfaced by the summarization engine
#[derive(Debug, Error)]
pub enum SummaryError {
    /// The linguistic resource cache could not be populated
    #[error("linguistic resources unavailable: {0}")]
    ResourceInit(String),

    /// A configuration failed validation
    #[error("invalid summarizer configuration: {0}")]
    InvalidConfig(String),

    /// A JSON configuration could not be parsed
    #[error("failed to parse summarizer configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, SummaryError>;
