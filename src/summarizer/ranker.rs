//! Graph-centrality sentence ranking
//!
//! Ranking is a two-stage contract: build a weighted sentence-similarity
//! graph, then run an iterative centrality algorithm over it. The selected
//! sentences come back in document order, not score order.

use tracing::debug;

use crate::graph::builder::GraphBuilder;
use crate::graph::csr::CsrGraph;
use crate::graph::similarity::SimilarityMeasure;
use crate::nlp::tokenizer::Tokenizer;
use crate::pagerank::eigenvector::EigenvectorCentrality;
use crate::pagerank::standard::StandardPageRank;
use crate::pagerank::PageRankResult;
use crate::types::{Sentence, SummarizerConfig};

/// Ranking strategy, chosen by input length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankMode {
    /// Overlap-weighted graph ranked with damped PageRank
    LongText,
    /// Thresholded cosine graph ranked with eigenvector centrality
    ShortText,
}

/// Configuration for sentence ranking
#[derive(Debug, Clone)]
pub struct RankerConfig {
    pub damping: f64,
    pub max_iterations: usize,
    pub convergence_threshold: f64,
    /// Minimum cosine similarity for a short-text edge
    pub similarity_threshold: f64,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self::from(&SummarizerConfig::default())
    }
}

impl From<&SummarizerConfig> for RankerConfig {
    fn from(cfg: &SummarizerConfig) -> Self {
        Self {
            damping: cfg.damping,
            max_iterations: cfg.max_iterations,
            convergence_threshold: cfg.convergence_threshold,
            similarity_threshold: cfg.similarity_threshold,
        }
    }
}

/// Outcome of ranking one sentence set
#[derive(Debug, Clone)]
pub struct RankedSentences {
    /// Selected sentences in document order, with their scores
    pub sentences: Vec<Sentence>,
    /// Raw centrality output over all sentences
    pub centrality: PageRankResult,
    /// Graph size
    pub nodes: usize,
    pub edges: usize,
}

/// Selects the most central sentences of a document
#[derive(Debug, Clone)]
pub struct SentenceRanker<'a> {
    tokenizer: Tokenizer<'a>,
    config: RankerConfig,
}

impl<'a> SentenceRanker<'a> {
    pub fn new(tokenizer: Tokenizer<'a>) -> Self {
        Self {
            tokenizer,
            config: RankerConfig::default(),
        }
    }

    pub fn with_config(tokenizer: Tokenizer<'a>, config: RankerConfig) -> Self {
        Self { tokenizer, config }
    }

    /// Build the similarity graph for `sentences` under `mode`
    pub fn build_graph(&self, sentences: &[Sentence], mode: RankMode) -> CsrGraph {
        let terms: Vec<Vec<String>> = sentences
            .iter()
            .map(|s| self.tokenizer.terms(&s.text))
            .collect();

        let measure = match mode {
            RankMode::LongText => SimilarityMeasure::Overlap,
            RankMode::ShortText => SimilarityMeasure::Cosine {
                threshold: self.config.similarity_threshold,
            },
        };
        let builder: GraphBuilder = measure.build_graph(&terms);
        CsrGraph::from_builder(&builder)
    }

    /// Run the centrality algorithm for `mode`
    pub fn centrality(&self, graph: &CsrGraph, mode: RankMode) -> PageRankResult {
        match mode {
            RankMode::LongText => StandardPageRank::new()
                .with_damping(self.config.damping)
                .with_max_iterations(self.config.max_iterations)
                .with_threshold(self.config.convergence_threshold)
                .run(graph),
            RankMode::ShortText => EigenvectorCentrality::new()
                .with_max_iterations(self.config.max_iterations)
                .with_threshold(self.config.convergence_threshold)
                .run(graph),
        }
    }

    /// Select the `count` most central sentences
    ///
    /// Fewer sentences than `count` are all returned; empty input selects nothing.
    pub fn rank(&self, sentences: &[Sentence], count: usize, mode: RankMode) -> RankedSentences {
        let graph = self.build_graph(sentences, mode);
        let centrality = self.centrality(&graph, mode);

        RankedSentences {
            sentences: select(sentences, &centrality, count),
            nodes: graph.num_nodes,
            edges: graph.link_count(),
            centrality,
        }
    }
}

/// Take the `count` highest-scoring sentences and restore document order
pub fn select(sentences: &[Sentence], centrality: &PageRankResult, count: usize) -> Vec<Sentence> {
    if !centrality.converged {
        debug!(
            iterations = centrality.iterations,
            delta = centrality.delta,
            "centrality stopped at the iteration cap"
        );
    }

    let mut selected: Vec<Sentence> = centrality
        .top_n(count)
        .into_iter()
        .filter_map(|(node, score)| {
            let mut sentence = sentences.get(node as usize)?.clone();
            sentence.score = score;
            Some(sentence)
        })
        .collect();
    selected.sort_by_key(|s| s.index);
    selected
}
