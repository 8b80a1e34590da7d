//! Process-wide linguistic resource cache
//!
//! Stopwords, the stemmer, and the segmentation patterns are built once per
//! process on first use. Concurrent first callers block on the same
//! initialization and every caller observes the fully built value.

use std::sync::OnceLock;

use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use rustc_hash::FxHashSet;
use tracing::{debug, warn};

use super::stopwords::StopwordFilter;
use crate::errors::{Result, SummaryError};

/// Word-or-punctuation token pattern (Unicode aware)
const WORD_PATTERN: &str = r"\w+(?:['’\-]\w+)*|[^\w\s]+";

/// Tokens that end in a period without ending a sentence
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "e.g", "i.e", "inc", "ltd",
    "fig", "approx", "dept", "est", "al", "cf", "u.s", "u.k",
];

static RESOURCES: OnceLock<std::result::Result<LinguisticResources, String>> = OnceLock::new();

/// Shared stopwords, stemmer, and tokenization data
pub struct LinguisticResources {
    stopwords: StopwordFilter,
    stemmer: Stemmer,
    word_pattern: Regex,
    abbreviations: FxHashSet<&'static str>,
}

// `rust_stemmers::Stemmer` has no `Debug` impl
impl std::fmt::Debug for LinguisticResources {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinguisticResources")
            .field("stopwords", &self.stopwords.len())
            .field("word_pattern", &self.word_pattern.as_str())
            .field("abbreviations", &self.abbreviations.len())
            .finish_non_exhaustive()
    }
}

impl LinguisticResources {
    /// Get the process-wide resources, building them on first use
    ///
    /// Fails if the resources could not be built; the failure is cached so
    /// later calls fail the same way without retrying.
    pub fn global() -> Result<&'static LinguisticResources> {
        RESOURCES
            .get_or_init(|| {
                debug!("initializing linguistic resources");
                Self::load().map_err(|err| {
                    warn!(error = %err, "linguistic resource initialization failed");
                    err.to_string()
                })
            })
            .as_ref()
            .map_err(|msg| SummaryError::ResourceInit(msg.clone()))
    }

    /// Whether the global resources have already been built
    pub fn is_initialized() -> bool {
        matches!(RESOURCES.get(), Some(Ok(_)))
    }

    /// Build a fresh set of resources from an explicit stopword filter
    pub fn with_stopwords(stopwords: StopwordFilter) -> Result<Self> {
        if stopwords.is_empty() {
            return Err(SummaryError::ResourceInit("stopword list is empty".into()));
        }
        let word_pattern = Regex::new(WORD_PATTERN)
            .map_err(|err| SummaryError::ResourceInit(format!("word pattern: {err}")))?;

        Ok(Self {
            stopwords,
            stemmer: Stemmer::create(Algorithm::English),
            word_pattern,
            abbreviations: ABBREVIATIONS.iter().copied().collect(),
        })
    }

    fn load() -> Result<Self> {
        let resources = Self::with_stopwords(StopwordFilter::english_extended())?;
        debug!(stopwords = resources.stopwords.len(), "linguistic resources ready");
        Ok(resources)
    }

    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }

    pub fn word_pattern(&self) -> &Regex {
        &self.word_pattern
    }

    /// Stem a lowercase word
    pub fn stem(&self, word: &str) -> String {
        self.stemmer.stem(word).into_owned()
    }

    /// Check whether a lowercase word (without its final period) is a known abbreviation
    pub fn is_abbreviation(&self, word: &str) -> bool {
        self.abbreviations.contains(word)
    }
}
