//! Damped PageRank for long documents
//!
//! Mass follows link weights with probability `damping` and teleports
//! uniformly otherwise. Sentences without links hand their mass to every
//! sentence equally, so the walk never leaks.

use super::{PageRankResult, PowerIteration};
use crate::graph::csr::CsrGraph;

#[derive(Debug, Clone)]
pub struct StandardPageRank {
    /// Probability of following a link rather than teleporting
    pub damping: f64,
    pub max_iterations: usize,
    /// L1 convergence threshold
    pub threshold: f64,
}

impl Default for StandardPageRank {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            threshold: 1e-4,
        }
    }
}

impl StandardPageRank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Score every sentence of `graph`
    ///
    /// Hitting the iteration cap still yields scores, flagged `converged = false`.
    pub fn run(&self, graph: &CsrGraph) -> PageRankResult {
        let n = graph.num_nodes;
        let isolated = graph.isolated_nodes();
        let d = self.damping;
        let driver = PowerIteration {
            max_iterations: self.max_iterations,
            threshold: self.threshold,
        };

        driver.run(n, |current, next| {
            let stranded: f64 = isolated.iter().map(|&node| current[node as usize]).sum();
            next.fill((1.0 - d) / n as f64 + d * stranded / n as f64);

            for (node, &mass) in (0u32..).zip(current) {
                let strength = graph.strength(node);
                if strength <= 0.0 {
                    continue;
                }
                let share = d * mass / strength;
                for (neighbor, weight) in graph.neighbors(node) {
                    next[neighbor as usize] += share * weight;
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::builder::GraphBuilder;
    use crate::graph::similarity::SimilarityMeasure;

    fn overlap_graph(sentences: &[&[&str]]) -> CsrGraph {
        let terms: Vec<Vec<String>> = sentences
            .iter()
            .map(|terms| terms.iter().map(|t| t.to_string()).collect())
            .collect();
        CsrGraph::from_builder(&SimilarityMeasure::Overlap.build_graph(&terms))
    }

    fn cycle(n: u32) -> CsrGraph {
        let mut builder = GraphBuilder::with_nodes(n as usize);
        for i in 0..n {
            builder.increment_edge(i, (i + 1) % n, 1.0);
        }
        CsrGraph::from_builder(&builder)
    }

    #[test]
    fn test_sentence_sharing_most_terms_wins() {
        let graph = overlap_graph(&[
            &["network", "learn", "data", "model"],
            &["network", "layer"],
            &["learn", "rate"],
            &["data", "set"],
            &["weather", "sunni"],
        ]);
        let result = StandardPageRank::new().run(&graph);

        assert!(result.converged);
        assert_eq!(result.top_n(1)[0].0, 0);
        assert!(result.scores[4] < result.scores[1]);
    }

    #[test]
    fn test_regular_graph_is_uniform() {
        let result = StandardPageRank::new().run(&cycle(4));

        assert!(result.converged);
        assert!(result.scores.iter().all(|s| (s - 0.25).abs() < 1e-9));
    }

    #[test]
    fn test_heavier_edges_pull_more_mass() {
        let mut builder = GraphBuilder::with_nodes(3);
        builder.increment_edge(0, 1, 5.0);
        builder.increment_edge(0, 2, 1.0);
        let result = StandardPageRank::new().run(&CsrGraph::from_builder(&builder));

        assert!(result.scores[1] > result.scores[2]);
    }

    #[test]
    fn test_scores_form_a_distribution() {
        let graph = overlap_graph(&[&["a", "b"], &["b", "c"], &["c"], &["z"]]);
        let result = StandardPageRank::new().run(&graph);

        let total: f64 = result.scores.iter().sum();
        assert!((total - 1.0).abs() < 1e-9);
        assert!(result.scores.iter().all(|&s| s > 0.0));
    }

    #[test]
    fn test_unlinked_sentences_share_mass() {
        let graph = CsrGraph::from_builder(&GraphBuilder::with_nodes(5));
        let result = StandardPageRank::new().run(&graph);

        assert_eq!(result.iterations, 1);
        assert!(result.scores.iter().all(|s| (s - 0.2).abs() < 1e-12));
    }

    #[test]
    fn test_no_sentences() {
        let result = StandardPageRank::new().run(&CsrGraph::default());

        assert!(result.converged);
        assert_eq!(result.iterations, 0);
        assert!(result.scores.is_empty());
    }

    #[test]
    fn test_iteration_cap_reports_not_converged() {
        let graph = overlap_graph(&[&["x", "y"], &["x"], &["y"], &["x", "y", "z"]]);
        let result = StandardPageRank::new()
            .with_max_iterations(1)
            .with_threshold(1e-12)
            .run(&graph);

        assert_eq!(result.iterations, 1);
        assert!(!result.converged);
        assert_eq!(result.scores.len(), 4);
    }

    #[test]
    fn test_higher_damping_sharpens_the_hub() {
        let mut builder = GraphBuilder::with_nodes(4);
        for leaf in 1..4 {
            builder.increment_edge(0, leaf, 1.0);
        }
        let graph = CsrGraph::from_builder(&builder);

        let low = StandardPageRank::new().with_damping(0.5).run(&graph);
        let high = StandardPageRank::new().with_damping(0.95).run(&graph);

        assert!(high.scores[0] - high.scores[1] > low.scores[0] - low.scores[1]);
    }
}
