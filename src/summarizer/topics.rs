//! Frequency-based topic extraction
//!
//! Topics are the most frequent content words of the document. Counting is
//! stable: equal frequencies keep the order of first occurrence.

use rustc_hash::FxHashMap;
use tracing::warn;

use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::Tokenizer;
use crate::types::Topic;

/// Where words and stopwords come from
#[derive(Debug, Clone)]
enum Vocabulary<'a> {
    /// Shared tokenizer and its extended English stopwords
    Shared(Tokenizer<'a>),
    /// Plain alphanumeric splitting with a caller-supplied stopword set
    Fallback(StopwordFilter),
}

/// Extracts ranked keyword topics from raw text
#[derive(Debug, Clone)]
pub struct TopicExtractor<'a> {
    vocabulary: Vocabulary<'a>,
    /// Keywords need more characters than this
    min_chars: usize,
}

impl TopicExtractor<'static> {
    /// Use the process-wide resources, or the fixed function-word list if
    /// they cannot be built
    pub fn from_global() -> Self {
        match Tokenizer::global() {
            Ok(tokenizer) => Self::new(tokenizer),
            Err(err) => {
                warn!(error = %err, "topic extraction falling back to built-in stopwords");
                Self::with_stopwords(StopwordFilter::fallback())
            }
        }
    }
}

impl<'a> TopicExtractor<'a> {
    pub fn new(tokenizer: Tokenizer<'a>) -> Self {
        Self {
            vocabulary: Vocabulary::Shared(tokenizer),
            min_chars: 3,
        }
    }

    /// Extract without the shared resources, filtering with `stopwords`
    pub fn with_stopwords(stopwords: StopwordFilter) -> Self {
        Self {
            vocabulary: Vocabulary::Fallback(stopwords),
            min_chars: 3,
        }
    }

    /// Set the length a keyword must exceed (in characters)
    pub fn with_min_chars(mut self, min_chars: usize) -> Self {
        self.min_chars = min_chars;
        self
    }

    /// Return up to `count` topics by descending frequency
    ///
    /// Ties are broken by first occurrence. Empty input gives no topics.
    pub fn extract(&self, text: &str, count: usize) -> Vec<Topic> {
        let words = match &self.vocabulary {
            Vocabulary::Shared(tokenizer) => tokenizer.words(text),
            Vocabulary::Fallback(_) => text
                .to_lowercase()
                .split(|c: char| !c.is_alphanumeric())
                .filter(|w| !w.is_empty())
                .map(str::to_string)
                .collect(),
        };
        let stopwords = match &self.vocabulary {
            Vocabulary::Shared(tokenizer) => tokenizer.resources().stopwords(),
            Vocabulary::Fallback(stopwords) => stopwords,
        };

        self.rank(
            words
                .iter()
                .map(String::as_str)
                .filter(|w| !stopwords.is_stopword(w)),
            count,
        )
    }

    /// Rank an already lowercased, stopword-free token stream
    pub fn rank<'w>(&self, tokens: impl IntoIterator<Item = &'w str>, count: usize) -> Vec<Topic> {
        let mut counts: FxHashMap<&str, (usize, usize)> = FxHashMap::default();
        for (position, token) in tokens
            .into_iter()
            .filter(|t| t.chars().count() > self.min_chars)
            .enumerate()
        {
            counts.entry(token).or_insert((0, position)).0 += 1;
        }

        let mut topics: Vec<Topic> = counts
            .into_iter()
            .map(|(keyword, (frequency, first_position))| Topic {
                keyword: keyword.to_string(),
                frequency,
                first_position,
            })
            .collect();
        topics.sort_by(|a, b| {
            b.frequency
                .cmp(&a.frequency)
                .then(a.first_position.cmp(&b.first_position))
        });
        topics.truncate(count);
        topics
    }
}
