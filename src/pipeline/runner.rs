//! Pipeline runner: top-level summarization and path selection.
//!
//! [`Summarizer`] decides once per call between the flat path (short input,
//! single paragraph) and the structured path (long input, titled sections),
//! then threads the document through the stages in order, notifying an
//! optional [`PipelineObserver`] at each boundary.
//!
//! Each call is synchronous and single-threaded. [`Summarizer::summarize_batch`]
//! runs independent calls on the rayon pool; only the linguistic resource
//! cache is shared between them.

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::errors::Result;
use crate::nlp::tokenizer::Tokenizer;
use crate::pipeline::observer::{
    NoopObserver, PipelineObserver, StageClock, StageReport, StageReportBuilder, STAGE_CLEAN,
    STAGE_GRAPH, STAGE_RANK, STAGE_SEGMENT, STAGE_STRUCTURE, STAGE_TOPICS,
};
use crate::summarizer::cleaner::SentenceCleaner;
use crate::summarizer::ranker::{select, RankMode, RankerConfig, SentenceRanker};
use crate::summarizer::structurer::Structurer;
use crate::summarizer::topics::TopicExtractor;
use crate::types::{FlatSummary, Sentence, Summary, SummarizerConfig};

/// Enter a tracing span for a pipeline stage; it closes at the end of the
/// enclosing block.
macro_rules! trace_stage {
    ($name:expr) => {
        let _span = tracing::info_span!("summary_stage", stage = $name).entered();
    };
}

/// Extractive summarizer producing flat or structured summaries
#[derive(Debug, Clone, Default)]
pub struct Summarizer {
    config: SummarizerConfig,
}

impl Summarizer {
    /// Create a summarizer with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a summarizer with a custom configuration
    ///
    /// Fails if any validation rule reports an error; warnings are logged.
    pub fn with_config(config: SummarizerConfig) -> Result<Self> {
        let report = config.validate();
        for diagnostic in report.warnings() {
            warn!(field = diagnostic.field, "{}", diagnostic.message);
        }
        report.into_result()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Summarize `text` into a formatted string
    ///
    /// `sentences_count` only applies to short inputs and defaults to the
    /// configured flat sentence count.
    pub fn summarize(&self, text: &str, sentences_count: Option<usize>) -> Result<String> {
        Ok(self.summarize_document(text, sentences_count)?.to_string())
    }

    /// Summarize `text` into a typed [`Summary`]
    pub fn summarize_document(&self, text: &str, sentences_count: Option<usize>) -> Result<Summary> {
        self.summarize_with_observer(text, sentences_count, &mut NoopObserver)
    }

    /// Summarize `text`, reporting each stage to `observer`
    pub fn summarize_with_observer(
        &self,
        text: &str,
        sentences_count: Option<usize>,
        observer: &mut impl PipelineObserver,
    ) -> Result<Summary> {
        if text.trim().is_empty() {
            debug!("empty input, nothing to summarize");
            return Ok(Summary::Empty);
        }

        let tokenizer = Tokenizer::global()?;
        let length = text.chars().count();

        if length > self.config.structured_threshold {
            debug!(length, "structured summary");
            self.structured(tokenizer, text, observer)
        } else {
            let count = sentences_count.unwrap_or(self.config.flat_sentences).max(1);
            debug!(length, count, "flat summary");
            self.flat(tokenizer, text, count, observer)
        }
    }

    /// Summarize many independent documents in parallel
    ///
    /// Results keep the order of `texts`.
    pub fn summarize_batch(&self, texts: &[&str]) -> Vec<Result<String>> {
        texts
            .par_iter()
            .map(|text| self.summarize(text, None))
            .collect()
    }

    fn flat(
        &self,
        tokenizer: Tokenizer<'static>,
        text: &str,
        count: usize,
        observer: &mut impl PipelineObserver,
    ) -> Result<Summary> {
        let sentences = self.segment(tokenizer, text, observer);
        let ranked = self.rank(tokenizer, &sentences, count, RankMode::ShortText, observer);

        let cleaned = {
            trace_stage!(STAGE_CLEAN);
            observer.on_stage_start(STAGE_CLEAN);
            let clock = StageClock::start();
            let texts: Vec<&str> = ranked.iter().map(|s| s.text.as_str()).collect();
            let mut cleaned = SentenceCleaner::new(self.config.min_sentence_chars).clean_all(&texts);
            if cleaned.is_empty() {
                // Nothing but markers survived cleaning; echo the source
                cleaned.push(text.split_whitespace().collect::<Vec<_>>().join(" "));
            }
            observer.on_stage_end(STAGE_CLEAN, &StageReport::new(clock.elapsed()));
            cleaned
        };

        Ok(Summary::Flat(FlatSummary { sentences: cleaned }))
    }

    fn structured(
        &self,
        tokenizer: Tokenizer<'static>,
        text: &str,
        observer: &mut impl PipelineObserver,
    ) -> Result<Summary> {
        let sentences = self.segment(tokenizer, text, observer);

        let topics = {
            trace_stage!(STAGE_TOPICS);
            observer.on_stage_start(STAGE_TOPICS);
            let clock = StageClock::start();
            let topics = TopicExtractor::new(tokenizer)
                .with_min_chars(self.config.min_topic_chars)
                .extract(text, self.config.topic_count);
            observer.on_stage_end(STAGE_TOPICS, &StageReport::new(clock.elapsed()));
            observer.on_topics(&topics);
            topics
        };

        let ranked = self.rank(
            tokenizer,
            &sentences,
            self.config.structured_sentences,
            RankMode::LongText,
            observer,
        );

        let cleaned = {
            trace_stage!(STAGE_CLEAN);
            observer.on_stage_start(STAGE_CLEAN);
            let clock = StageClock::start();
            let texts: Vec<&str> = ranked.iter().map(|s| s.text.as_str()).collect();
            let cleaned = SentenceCleaner::new(self.config.min_sentence_chars).clean_unique(&texts);
            observer.on_stage_end(STAGE_CLEAN, &StageReport::new(clock.elapsed()));
            cleaned
        };
        if cleaned.is_empty() {
            debug!("no ranked sentence survived cleaning");
        }

        let summary = {
            trace_stage!(STAGE_STRUCTURE);
            observer.on_stage_start(STAGE_STRUCTURE);
            let clock = StageClock::start();
            let summary = Structurer::new(&self.config).build(&sentences, &topics, cleaned);
            observer.on_stage_end(STAGE_STRUCTURE, &StageReport::new(clock.elapsed()));
            summary
        };

        Ok(Summary::Structured(summary))
    }

    fn segment(
        &self,
        tokenizer: Tokenizer<'static>,
        text: &str,
        observer: &mut impl PipelineObserver,
    ) -> Vec<Sentence> {
        trace_stage!(STAGE_SEGMENT);
        observer.on_stage_start(STAGE_SEGMENT);
        let clock = StageClock::start();
        let sentences = tokenizer.sentences(text);
        observer.on_stage_end(STAGE_SEGMENT, &StageReport::new(clock.elapsed()));
        observer.on_sentences(&sentences);
        debug!(sentences = sentences.len(), "segmented document");
        sentences
    }

    fn rank(
        &self,
        tokenizer: Tokenizer<'static>,
        sentences: &[Sentence],
        count: usize,
        mode: RankMode,
        observer: &mut impl PipelineObserver,
    ) -> Vec<Sentence> {
        let ranker = SentenceRanker::with_config(tokenizer, RankerConfig::from(&self.config));

        let graph = {
            trace_stage!(STAGE_GRAPH);
            observer.on_stage_start(STAGE_GRAPH);
            let clock = StageClock::start();
            let graph = ranker.build_graph(sentences, mode);
            let report = StageReportBuilder::new(clock.elapsed())
                .nodes(graph.num_nodes)
                .edges(graph.link_count())
                .build();
            observer.on_stage_end(STAGE_GRAPH, &report);
            graph
        };

        trace_stage!(STAGE_RANK);
        observer.on_stage_start(STAGE_RANK);
        let clock = StageClock::start();
        let centrality = ranker.centrality(&graph, mode);
        let selected = select(sentences, &centrality, count);
        let report = StageReportBuilder::new(clock.elapsed())
            .iterations(centrality.iterations)
            .converged(centrality.converged)
            .build();
        observer.on_stage_end(STAGE_RANK, &report);
        observer.on_rank(&centrality);

        debug!(selected = selected.len(), ?mode, "ranked sentences");
        selected
    }
}
