//! Sentence and word tokenization
//!
//! Sentences are split on terminal punctuation followed by whitespace and
//! never span a blank-line paragraph break. Word tokens are lowercased and
//! only all-alphanumeric tokens survive; punctuation runs are dropped.

use super::resources::LinguisticResources;
use crate::errors::Result;
use crate::types::Sentence;

/// Closing characters that may trail a sentence terminator
const CLOSERS: &[char] = &['"', '\'', ')', ']', '}', '”', '’', '»'];

/// Suffixes split off after an apostrophe, as in "they're" or "network's"
const CLITICS: &[&str] = &["s", "re", "ll", "ve", "d", "m"];

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Tokenizer backed by the shared linguistic resources
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer<'a> {
    resources: &'a LinguisticResources,
}

impl Tokenizer<'static> {
    /// Create a tokenizer over the process-wide resources
    pub fn global() -> Result<Self> {
        Ok(Self::new(LinguisticResources::global()?))
    }
}

impl<'a> Tokenizer<'a> {
    pub fn new(resources: &'a LinguisticResources) -> Self {
        Self { resources }
    }

    pub fn resources(&self) -> &'a LinguisticResources {
        self.resources
    }

    /// Split text into sentences in document order
    ///
    /// Any text containing a non-whitespace character yields at least one sentence.
    pub fn sentences(&self, text: &str) -> Vec<Sentence> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut sentences = Vec::new();
        let mut start = 0;
        let mut i = 0;

        while i < chars.len() {
            let (pos, c) = chars[i];

            if is_terminator(c) {
                let mut j = i + 1;
                while j < chars.len() && is_terminator(chars[j].1) {
                    j += 1;
                }
                while j < chars.len() && CLOSERS.contains(&chars[j].1) {
                    j += 1;
                }
                let end = chars.get(j).map_or(text.len(), |&(p, _)| p);
                let at_boundary = chars.get(j).map_or(true, |&(_, next)| next.is_whitespace());
                let abbreviated = c == '.'
                    && j == i + 1
                    && self.ends_with_abbreviation(&text[start..pos], &text[end..]);

                if at_boundary && !abbreviated {
                    push_sentence(&mut sentences, text, start, end);
                    start = end;
                }
                i = j;
                continue;
            }

            if c == '\n' && is_paragraph_break(&chars, i) {
                push_sentence(&mut sentences, text, start, pos);
                start = pos;
            }
            i += 1;
        }

        push_sentence(&mut sentences, text, start, text.len());
        sentences
    }

    /// Lowercased alphanumeric word tokens in order
    ///
    /// Clitics are split from their word first ("network's" gives "network"
    /// and "'s"), then punctuation, clitics, and hyphenated compounds drop out.
    pub fn words(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase().replace('’', "'");
        self.resources
            .word_pattern()
            .find_iter(&lowered)
            .flat_map(|m| split_clitic(m.as_str()))
            .filter(|token| !token.is_empty() && token.chars().all(char::is_alphanumeric))
            .map(str::to_string)
            .collect()
    }

    /// Stemmed, stopword-free terms used for sentence similarity
    pub fn terms(&self, text: &str) -> Vec<String> {
        let stopwords = self.resources.stopwords();
        self.words(text)
            .into_iter()
            .filter(|word| !stopwords.is_stopword(word))
            .map(|word| self.resources.stem(&word))
            .collect()
    }

    /// The word before a period is a known abbreviation or a name initial
    fn ends_with_abbreviation(&self, preceding: &str, following: &str) -> bool {
        let Some(word) = preceding.split_whitespace().last() else {
            return false;
        };
        let word = word.trim_start_matches(|c: char| !c.is_alphanumeric());
        let mut letters = word.chars();
        if let (Some(c), None) = (letters.next(), letters.next()) {
            return self.is_initial(c, following);
        }
        self.resources.is_abbreviation(&word.to_lowercase())
    }

    /// An uppercase letter other than "I" followed by a capitalized word that
    /// is not a stopword, as in "J. Doe" but not "plan B. The"
    fn is_initial(&self, letter: char, following: &str) -> bool {
        if !letter.is_uppercase() || letter == 'I' {
            return false;
        }
        let Some(next) = following
            .split_whitespace()
            .next()
            .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        else {
            return false;
        };
        next.chars().next().is_some_and(char::is_uppercase)
            && !self.resources.stopwords().is_stopword(next)
    }
}

/// Split a trailing English clitic (`'s`, `'re`, `'ll`, `'ve`, `'d`, `'m`,
/// `n't`) off a lowercased token; the second part is empty when there is none
fn split_clitic(token: &str) -> [&str; 2] {
    if let Some(base) = token.strip_suffix("n't") {
        if !base.is_empty() && !base.contains('\'') {
            return [base, &token[base.len()..]];
        }
    }
    if let Some((base, suffix)) = token.rsplit_once('\'') {
        if !base.is_empty() && CLITICS.contains(&suffix) {
            return [base, &token[base.len()..]];
        }
    }
    [token, ""]
}

/// A newline followed by optional horizontal whitespace and another newline
fn is_paragraph_break(chars: &[(usize, char)], newline: usize) -> bool {
    chars[newline + 1..]
        .iter()
        .map(|&(_, c)| c)
        .find(|&c| c == '\n' || !c.is_whitespace())
        == Some('\n')
}

fn push_sentence(sentences: &mut Vec<Sentence>, text: &str, start: usize, end: usize) {
    let span = &text[start..end];
    let trimmed = span.trim();
    if trimmed.is_empty() {
        return;
    }
    let offset = start + (span.len() - span.trim_start().len());
    let index = sentences.len();
    sentences.push(Sentence::new(trimmed, offset, offset + trimmed.len(), index));
}
