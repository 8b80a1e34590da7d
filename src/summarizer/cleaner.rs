//! Sentence cleanup, deduplication, and joining

use rustc_hash::FxHashSet;

use crate::types::normalize;

/// Leading markers stripped from sentences
const BULLET_MARKERS: &[char] = &['•', '-', '*'];

/// Punctuation that must not be preceded by whitespace
const TIGHT_PUNCTUATION: &[char] = &[',', '.', '!', '?', ';', ':'];

/// Cosmetic cleanup and exact-duplicate suppression for ranked sentences
#[derive(Debug, Clone)]
pub struct SentenceCleaner {
    /// Sentences whose normalized form is this short or shorter are dropped
    min_chars: usize,
}

impl Default for SentenceCleaner {
    fn default() -> Self {
        Self { min_chars: 15 }
    }
}

impl SentenceCleaner {
    pub fn new(min_chars: usize) -> Self {
        Self { min_chars }
    }

    /// Strip bullets, collapse whitespace, tighten punctuation, and
    /// capitalize the first character
    ///
    /// Cleaning an already clean sentence leaves it unchanged.
    pub fn clean(&self, sentence: &str) -> String {
        let stripped =
            sentence.trim_start_matches(|c: char| BULLET_MARKERS.contains(&c) || c.is_whitespace());

        let mut out = String::with_capacity(stripped.len());
        for word in stripped.split_whitespace() {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(word);
        }

        let mut tightened = String::with_capacity(out.len());
        for c in out.chars() {
            if TIGHT_PUNCTUATION.contains(&c) {
                let kept = tightened.trim_end().len();
                tightened.truncate(kept);
            }
            tightened.push(c);
        }

        capitalize_first(&tightened)
    }

    /// Clean every sentence, keeping order and duplicates
    pub fn clean_all<S: AsRef<str>>(&self, sentences: &[S]) -> Vec<String> {
        sentences
            .iter()
            .map(|s| self.clean(s.as_ref()))
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Clean, then drop short sentences and repeated normalized forms
    ///
    /// The first occurrence of each normalized form wins.
    pub fn clean_unique<S: AsRef<str>>(&self, sentences: &[S]) -> Vec<String> {
        let mut seen = FxHashSet::default();
        self.clean_all(sentences)
            .into_iter()
            .filter(|sentence| {
                let normalized = normalize(sentence);
                normalized.chars().count() > self.min_chars && seen.insert(normalized)
            })
            .collect()
    }
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first.is_lowercase() => first.to_uppercase().chain(chars).collect(),
        _ => text.to_string(),
    }
}

/// Join sentences into one paragraph ending in a period
///
/// Sentences already ending in terminal punctuation are separated by a
/// space, others by `". "`. Empty input gives an empty string.
pub fn join_sentences<S: AsRef<str>>(sentences: &[S]) -> String {
    let mut out = String::new();
    for sentence in sentences.iter().map(AsRef::as_ref).filter(|s| !s.is_empty()) {
        if !out.is_empty() {
            if ends_with_terminal(&out) {
                out.push(' ');
            } else {
                out.push_str(". ");
            }
        }
        out.push_str(sentence);
    }
    if !out.is_empty() && !out.ends_with('.') {
        out.push('.');
    }
    out
}

fn ends_with_terminal(text: &str) -> bool {
    text.trim_end_matches(['"', '\'', ')', ']', '”', '’'])
        .ends_with(['.', '!', '?'])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cleaner() -> SentenceCleaner {
        SentenceCleaner::default()
    }

    #[test]
    fn test_strips_bullets() {
        assert_eq!(cleaner().clean("• First item here."), "First item here.");
        assert_eq!(cleaner().clean("- * nested marker"), "Nested marker");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(cleaner().clean("Too   many\n spaces\there."), "Too many spaces here.");
    }

    #[test]
    fn test_tightens_punctuation() {
        assert_eq!(
            cleaner().clean("Graphs , trees ; and lists : all work ."),
            "Graphs, trees; and lists: all work."
        );
    }

    #[test]
    fn test_capitalizes_first_letter() {
        assert_eq!(cleaner().clean("lowercase start."), "Lowercase start.");
        assert_eq!(cleaner().clean("2024 was busy."), "2024 was busy.");
    }

    #[test]
    fn test_cleaning_is_idempotent() {
        let clean = "Already clean, with punctuation: fine.";
        assert_eq!(cleaner().clean(clean), clean);

        let messy = "  -  messy   sentence ,  here .";
        let once = cleaner().clean(messy);
        assert_eq!(cleaner().clean(&once), once);
    }

    #[test]
    fn test_clean_all_keeps_duplicates_and_short() {
        let cleaned = cleaner().clean_all(&["Short.", "Short.", "  "]);
        assert_eq!(cleaned, vec!["Short.", "Short."]);
    }

    #[test]
    fn test_clean_unique_drops_duplicates() {
        let cleaned = cleaner().clean_unique(&[
            "Neural networks learn from data.",
            "neural   networks learn from data.",
            "Neural networks learn from data!",
        ]);
        assert_eq!(
            cleaned,
            vec!["Neural networks learn from data.", "Neural networks learn from data!"]
        );
    }

    #[test]
    fn test_clean_unique_drops_short_sentences() {
        // "fifteen chars!!" normalizes to exactly 15 characters
        let cleaned = cleaner().clean_unique(&["Fifteen chars!!", "Sixteen chars!!!", "Ok."]);
        assert_eq!(cleaned, vec!["Sixteen chars!!!"]);
    }

    #[test]
    fn test_join_sentences() {
        assert_eq!(join_sentences(&["One.", "Two."]), "One. Two.");
        assert_eq!(join_sentences(&["One", "Two"]), "One. Two.");
        assert_eq!(join_sentences(&["Really?", "Yes"]), "Really? Yes.");
        assert_eq!(join_sentences::<&str>(&[]), "");
    }

    #[test]
    fn test_join_always_ends_with_period() {
        assert!(join_sentences(&["Is it?"]).ends_with('.'));
    }
}
