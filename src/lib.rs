//! # rapid_digest
//!
//! Extractive summarization with graph-based sentence ranking.
//!
//! Short inputs (up to 1000 characters by default) produce a single paragraph
//! of the most central sentences. Longer inputs produce a structured summary:
//! a title, a short introduction, and topic sections of bulleted sentences.
//!
//! ```rust
//! let summary = rapid_digest::summarize(
//!     "Rust is fast. Rust is memory safe. Cargo builds Rust code.",
//!     Some(2),
//! )
//! .unwrap();
//! assert!(summary.ends_with('.'));
//! ```
//!
//! The library emits `tracing` spans and events but never installs a
//! subscriber.

pub mod errors;
pub mod graph;
pub mod nlp;
pub mod pagerank;
pub mod pipeline;
pub mod summarizer;
pub mod types;

pub use errors::{Result, SummaryError};
pub use pipeline::runner::Summarizer;
pub use types::{
    FlatSummary, Section, Sentence, StructuredSummary, Summary, SummarizerConfig, Topic,
    EMPTY_INPUT_SUMMARY,
};

/// Summarize `text` with the default configuration
///
/// `sentences_count` bounds the flat summary of short inputs (default 3) and
/// is ignored for long inputs. Empty input yields [`EMPTY_INPUT_SUMMARY`].
pub fn summarize(text: &str, sentences_count: Option<usize>) -> Result<String> {
    Summarizer::new().summarize(text, sentences_count)
}
