//! Core data types shared across the summarization pipeline

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::summarizer::cleaner::join_sentences;

/// Output returned for empty or whitespace-only input
pub const EMPTY_INPUT_SUMMARY: &str = "No text available to summarize.";

/// Prefix of every structured summary
pub const STRUCTURED_PREFIX: &str = "Summary: ";

/// A sentence segmented from the source document
#[derive(Debug, Clone, PartialEq)]
pub struct Sentence {
    /// Sentence text as it appears in the document (trimmed)
    pub text: String,
    /// Byte offset of the sentence start
    pub start: usize,
    /// Byte offset of the sentence end
    pub end: usize,
    /// Position of the sentence in the document
    pub index: usize,
    /// Centrality score (0.0 until ranked)
    pub score: f64,
}

impl Sentence {
    pub fn new(text: impl Into<String>, start: usize, end: usize, index: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            index,
            score: 0.0,
        }
    }

    /// Lowercased, whitespace-collapsed form used for equality
    pub fn normalized(&self) -> String {
        normalize(&self.text)
    }

    /// Number of whitespace-separated words
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

/// Lowercase and collapse whitespace runs into single spaces
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// A frequent keyword used to label a section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Topic {
    /// Lowercased keyword
    pub keyword: String,
    /// Number of occurrences in the token stream
    pub frequency: usize,
    /// Token position of the first occurrence
    pub first_position: usize,
}

impl Topic {
    /// The keyword in title case, as used in section headings
    pub fn title(&self) -> String {
        title_case(&self.keyword)
    }
}

/// Uppercase every letter that follows a non-letter, lowercase the rest
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_letter = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}

/// A labelled group of at most a few summary sentences
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    /// Heading text (topic in title case, or the leftover heading)
    pub heading: String,
    /// Displayed sentences
    pub sentences: Vec<String>,
}

/// A titled summary organized into topic sections
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructuredSummary {
    pub title: String,
    pub introduction: Vec<String>,
    pub sections: Vec<Section>,
}

impl StructuredSummary {
    /// Introduction sentences joined into one paragraph
    ///
    /// A sentence already ending in `.`, `!` or `?` is followed by a single
    /// space rather than `". "`, so joined text never reads "..".
    pub fn introduction_text(&self) -> String {
        join_sentences(&self.introduction)
    }
}

impl fmt::Display for StructuredSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = format!(
            "{STRUCTURED_PREFIX}{}\n\n{}\n\n",
            self.title,
            self.introduction_text()
        );
        for (i, section) in self.sections.iter().enumerate() {
            out.push_str(&format!("{}. {}\n\n", i + 1, section.heading));
            for sentence in &section.sentences {
                out.push_str(&format!("• {sentence}\n"));
            }
            out.push('\n');
        }
        f.write_str(out.trim_end())
    }
}

/// A single-paragraph summary used for short inputs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlatSummary {
    pub sentences: Vec<String>,
}

impl fmt::Display for FlatSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join_sentences(&self.sentences))
    }
}

/// Result of one summarization call
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Summary {
    /// Input was empty or whitespace-only
    Empty,
    Flat(FlatSummary),
    Structured(StructuredSummary),
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Summary::Empty => f.write_str(EMPTY_INPUT_SUMMARY),
            Summary::Flat(flat) => flat.fmt(f),
            Summary::Structured(structured) => structured.fmt(f),
        }
    }
}

/// Configuration for the summarizer
///
/// Every field has a default, so a JSON configuration only needs to name
/// the values it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Inputs longer than this many characters take the structured path
    pub structured_threshold: usize,
    /// Sentences selected on the flat path when the caller gives no count
    pub flat_sentences: usize,
    /// Sentences selected on the structured path
    pub structured_sentences: usize,
    /// Topics requested for sectioning
    pub topic_count: usize,
    /// Sentences used for the introduction
    pub intro_sentences: usize,
    /// Sentences displayed per section
    pub max_section_sentences: usize,
    /// Sentences whose normalized form is this short or shorter are dropped
    pub min_sentence_chars: usize,
    /// A title candidate needs more words than this
    pub min_title_words: usize,
    /// Leading sentences considered as title candidates
    pub title_candidates: usize,
    /// Titles longer than this are truncated with an ellipsis
    pub title_max_chars: usize,
    /// A topic keyword needs more characters than this
    pub min_topic_chars: usize,
    /// Title used when no candidate qualifies
    pub default_title: String,
    /// Heading of the catch-all section
    pub leftover_heading: String,
    /// PageRank damping factor
    pub damping: f64,
    /// Iteration cap for centrality computation
    pub max_iterations: usize,
    /// L1 convergence threshold for centrality computation
    pub convergence_threshold: f64,
    /// Minimum cosine similarity for an edge in short-text mode
    pub similarity_threshold: f64,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            structured_threshold: 1000,
            flat_sentences: 3,
            structured_sentences: 8,
            topic_count: 4,
            intro_sentences: 2,
            max_section_sentences: 3,
            min_sentence_chars: 15,
            min_title_words: 3,
            title_candidates: 3,
            title_max_chars: 50,
            min_topic_chars: 3,
            default_title: "Document Summary".to_string(),
            leftover_heading: "Additional Concepts".to_string(),
            damping: 0.85,
            max_iterations: 100,
            convergence_threshold: 1e-4,
            similarity_threshold: 0.1,
        }
    }
}
