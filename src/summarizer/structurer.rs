//! Title derivation, topic sectioning, and structured assembly

use tracing::debug;

use crate::types::{normalize, Section, Sentence, StructuredSummary, SummarizerConfig, Topic};

/// Suffix appended to truncated titles
const ELLIPSIS: &str = "...";

/// Arranges cleaned sentences into a titled, sectioned summary
#[derive(Debug, Clone)]
pub struct Structurer<'c> {
    config: &'c SummarizerConfig,
}

impl<'c> Structurer<'c> {
    pub fn new(config: &'c SummarizerConfig) -> Self {
        Self { config }
    }

    /// Derive a title from the leading sentences of the original document
    pub fn title(&self, document: &[Sentence]) -> String {
        let candidate = document
            .iter()
            .take(self.config.title_candidates)
            .find(|s| s.word_count() > self.config.min_title_words);

        let raw = match candidate {
            Some(sentence) => sentence.text.as_str(),
            None => {
                debug!("no title candidate, using default title");
                self.config.default_title.as_str()
            }
        };

        let title = self.clean_title(raw);
        if title.is_empty() {
            self.config.default_title.clone()
        } else {
            title
        }
    }

    /// Strip leading non-word characters, cut at the first period, and cap the length
    fn clean_title(&self, raw: &str) -> String {
        let stripped = raw.trim_start_matches(|c: char| !(c.is_alphanumeric() || c == '_'));
        let first = stripped.split('.').next().unwrap_or_default().trim();

        let max = self.config.title_max_chars;
        if first.chars().count() > max {
            let keep = max.saturating_sub(ELLIPSIS.len());
            let mut truncated: String = first.chars().take(keep).collect();
            truncated.push_str(ELLIPSIS);
            truncated
        } else {
            first.to_string()
        }
    }

    /// Group pool sentences under topics, then sweep leftovers into a catch-all
    ///
    /// Every pool sentence lands in at most one section. A topic claims all
    /// remaining sentences that mention it but displays only the first
    /// `max_section_sentences`; the rest are dropped.
    pub fn sections(&self, pool: Vec<String>, topics: &[Topic]) -> Vec<Section> {
        let max = self.config.max_section_sentences;
        let mut pool = pool;
        let mut sections = Vec::new();

        for topic in topics {
            let keyword = topic.keyword.to_lowercase();
            let (matched, rest): (Vec<String>, Vec<String>) = pool
                .into_iter()
                .partition(|sentence| normalize(sentence).contains(&keyword));
            pool = rest;

            if matched.is_empty() {
                continue;
            }
            if matched.len() > max {
                debug!(topic = %topic.keyword, dropped = matched.len() - max, "section overflow");
            }
            sections.push(Section {
                heading: topic.title(),
                sentences: matched.into_iter().take(max).collect(),
            });
        }

        if !pool.is_empty() {
            sections.push(Section {
                heading: self.config.leftover_heading.clone(),
                sentences: pool.into_iter().take(max).collect(),
            });
        }

        sections
    }

    /// Assemble the structured summary from the document, its topics, and the
    /// cleaned, deduplicated ranked sentences
    pub fn build(&self, document: &[Sentence], topics: &[Topic], cleaned: Vec<String>) -> StructuredSummary {
        let title = self.title(document);

        let split = self.config.intro_sentences.min(cleaned.len());
        let mut introduction = cleaned;
        let pool = introduction.split_off(split);

        StructuredSummary {
            title,
            introduction,
            sections: self.sections(pool, topics),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(texts: &[&str]) -> Vec<Sentence> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| Sentence::new(*t, 0, t.len(), i))
            .collect()
    }

    fn topic(keyword: &str) -> Topic {
        Topic {
            keyword: keyword.into(),
            frequency: 1,
            first_position: 0,
        }
    }

    fn strings(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_title_from_first_long_sentence() {
        let cfg = SummarizerConfig::default();
        let title = Structurer::new(&cfg).title(&doc(&["Intro.", "## Neural networks in practice. More."]));
        assert_eq!(title, "Neural networks in practice");
    }

    #[test]
    fn test_title_only_considers_leading_sentences() {
        let cfg = SummarizerConfig::default();
        let title = Structurer::new(&cfg).title(&doc(&["A.", "B.", "C.", "This fourth sentence is long."]));
        assert_eq!(title, "Document Summary");
    }

    #[test]
    fn test_title_truncated_with_ellipsis() {
        let cfg = SummarizerConfig::default();
        let long = "Word ".repeat(20);
        let title = Structurer::new(&cfg).title(&doc(&[long.as_str()]));

        assert_eq!(title.chars().count(), 50);
        assert!(title.ends_with("..."));
    }

    #[test]
    fn test_title_of_exactly_max_chars_is_kept() {
        let cfg = SummarizerConfig::default();
        let exact = format!("Four words here {}", "x".repeat(34));
        assert_eq!(exact.chars().count(), 50);
        assert_eq!(Structurer::new(&cfg).title(&doc(&[exact.as_str()])), exact);
    }

    #[test]
    fn test_sections_partition_pool() {
        let cfg = SummarizerConfig::default();
        let pool = strings(&[
            "Learning rates matter a lot.",
            "Networks have many layers.",
            "Learning networks is hard.",
            "Unrelated closing remark here.",
        ]);

        let sections = Structurer::new(&cfg).sections(pool, &[topic("learning"), topic("networks")]);

        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0].heading, "Learning");
        assert_eq!(
            sections[0].sentences,
            strings(&["Learning rates matter a lot.", "Learning networks is hard."])
        );
        assert_eq!(sections[1].heading, "Networks");
        assert_eq!(sections[1].sentences, strings(&["Networks have many layers."]));
        assert_eq!(sections[2].heading, "Additional Concepts");
        assert_eq!(sections[2].sentences, strings(&["Unrelated closing remark here."]));
    }

    #[test]
    fn test_consecutive_matches_are_all_claimed() {
        let cfg = SummarizerConfig::default();
        let pool = strings(&["Data one here.", "Data two here.", "Data three here."]);

        let sections = Structurer::new(&cfg).sections(pool, &[topic("data")]);

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].sentences.len(), 3);
    }

    #[test]
    fn test_overflow_is_dropped_not_deferred() {
        let cfg = SummarizerConfig::default();
        let pool = strings(&["Data a.", "Data b.", "Data c.", "Data d.", "Data e."]);

        let sections = Structurer::new(&cfg).sections(pool, &[topic("data")]);

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].sentences.len(), 3);
    }

    #[test]
    fn test_unmatched_topics_are_omitted() {
        let cfg = SummarizerConfig::default();
        let sections = Structurer::new(&cfg).sections(strings(&["Something else."]), &[topic("graph")]);

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].heading, "Additional Concepts");
    }

    #[test]
    fn test_leftover_section_capped() {
        let cfg = SummarizerConfig::default();
        let pool = strings(&["One.", "Two.", "Three.", "Four."]);
        let sections = Structurer::new(&cfg).sections(pool, &[]);

        assert_eq!(sections[0].sentences, strings(&["One.", "Two.", "Three."]));
    }

    #[test]
    fn test_build_splits_introduction() {
        let cfg = SummarizerConfig::default();
        let cleaned = strings(&["First ranked sentence.", "Second ranked sentence.", "Third mentions data."]);

        let summary = Structurer::new(&cfg).build(&doc(&["Short."]), &[topic("data")], cleaned);

        assert_eq!(summary.title, "Document Summary");
        assert_eq!(summary.introduction.len(), 2);
        assert_eq!(summary.sections.len(), 1);
        assert_eq!(summary.sections[0].heading, "Data");
    }

    #[test]
    fn test_build_with_nothing_ranked() {
        let cfg = SummarizerConfig::default();
        let summary = Structurer::new(&cfg).build(&[], &[], Vec::new());

        assert_eq!(summary.title, "Document Summary");
        assert!(summary.introduction.is_empty());
        assert!(summary.sections.is_empty());
    }
}
