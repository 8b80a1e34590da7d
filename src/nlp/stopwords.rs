//! Stopword filtering
//!
//! English stopwords from the `stop-words` crate (its NLTK list, enabled by
//! the `nltk` feature), extended with a fixed list
//! of common function words. The extended list alone doubles as a fallback
//! when the full list is unavailable.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// Function words always treated as stopwords
pub const EXTENDED_STOPWORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does", "did",
    "will", "would", "could", "should", "may", "might", "must", "can",
];

/// A filter for removing stopwords from text
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase)
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::english_extended()
    }
}

impl StopwordFilter {
    /// Standard English stopwords
    pub fn english() -> Self {
        Self::from_list(get(LANGUAGE::English))
    }

    /// Standard English stopwords unioned with [`EXTENDED_STOPWORDS`]
    pub fn english_extended() -> Self {
        let mut filter = Self::english();
        filter.add_stopwords(EXTENDED_STOPWORDS);
        filter
    }

    /// Only the [`EXTENDED_STOPWORDS`] list
    pub fn fallback() -> Self {
        Self::from_list(EXTENDED_STOPWORDS)
    }

    /// A filter that keeps every word
    pub fn empty() -> Self {
        Self::from_list::<[&str; 0]>([])
    }

    /// Filter built from `words`, lowercased
    pub fn from_list<I>(words: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut filter = Self {
            stopwords: FxHashSet::default(),
        };
        filter.add_stopwords(words);
        filter
    }

    pub fn add_stopwords<I>(&mut self, words: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.stopwords
            .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
    }

    /// Check if a word is a stopword (case-insensitive)
    pub fn is_stopword(&self, word: &str) -> bool {
        if self.stopwords.contains(word) {
            return true;
        }
        word.chars().any(char::is_uppercase) && self.stopwords.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_stopwords() {
        let filter = StopwordFilter::english();

        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("The"));
        assert!(filter.is_stopword("is"));
        assert!(!filter.is_stopword("machine"));
        assert!(!filter.is_stopword("learning"));
    }

    #[test]
    fn test_content_words_are_not_stopwords() {
        let filter = StopwordFilter::english_extended();

        for word in ["research", "information", "computer", "problem", "results", "system"] {
            assert!(!filter.is_stopword(word), "{word} filtered");
        }
        // The short function-word list, not a broad vocabulary
        assert!(filter.len() < 400, "{} stopwords", filter.len());
    }

    #[test]
    fn test_extended_contains_function_words() {
        let filter = StopwordFilter::english_extended();

        for word in EXTENDED_STOPWORDS {
            assert!(filter.is_stopword(word), "missing {word}");
        }
        assert!(filter.len() >= StopwordFilter::english().len());
    }

    #[test]
    fn test_fallback_is_extended_list_only() {
        let filter = StopwordFilter::fallback();

        assert_eq!(filter.len(), EXTENDED_STOPWORDS.len());
        assert!(filter.is_stopword("might"));
        assert!(!filter.is_stopword("networks"));
    }

    #[test]
    fn test_custom_stopwords() {
        let mut filter = StopwordFilter::from_list(["custom", "words"]);

        assert!(filter.is_stopword("custom"));
        assert!(filter.is_stopword("WORDS"));
        assert!(!filter.is_stopword("the"));

        filter.add_stopwords(vec!["Extra".to_string()]);
        assert!(filter.is_stopword("extra"));
    }

    #[test]
    fn test_empty_filter() {
        let filter = StopwordFilter::empty();

        assert!(!filter.is_stopword("the"));
        assert!(filter.is_empty());
    }
}
