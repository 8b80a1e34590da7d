//! Eigenvector centrality by power iteration
//!
//! Connected nodes carry an implicit self-loop of weight 1, which keeps the
//! walk aperiodic. Isolated nodes jump uniformly, so their mass drains into
//! the connected sentences. There is no teleport term otherwise.

use super::{PageRankResult, PowerIteration};
use crate::graph::csr::CsrGraph;

#[derive(Debug, Clone)]
pub struct EigenvectorCentrality {
    pub max_iterations: usize,
    /// L1 convergence threshold
    pub threshold: f64,
}

impl Default for EigenvectorCentrality {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            threshold: 1e-4,
        }
    }
}

impl EigenvectorCentrality {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Compute the stationary distribution of the similarity random walk
    pub fn run(&self, graph: &CsrGraph) -> PageRankResult {
        let n = graph.num_nodes;
        let isolated = graph.isolated_nodes();
        let driver = PowerIteration {
            max_iterations: self.max_iterations,
            threshold: self.threshold,
        };

        driver.run(n, |current, next| {
            let stranded: f64 = isolated.iter().map(|&node| current[node as usize]).sum();
            next.fill(stranded / n as f64);

            for (node, &mass) in (0u32..).zip(current) {
                if graph.degree(node) == 0 {
                    continue;
                }
                // Self-loop of weight 1 on top of the real links
                let share = mass / (graph.strength(node) + 1.0);
                next[node as usize] += share;
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

    #[test]
    fn test_hub_sentence_is_most_central() {
        let mut builder = GraphBuilder::with_nodes(4);
        builder.increment_edge(0, 1, 1.0);
        builder.increment_edge(0, 2, 1.0);
        builder.increment_edge(0, 3, 1.0);

        let result = EigenvectorCentrality::new().run(&CsrGraph::from_builder(&builder));

        assert!(result.converged);
        assert_eq!(result.top_n(1)[0].0, 0);
    }

    #[test]
    fn test_stationary_distribution_proportional_to_degree() {
        // Path 0-1-2: stationary mass is proportional to degree + 1
        let mut builder = GraphBuilder::with_nodes(3);
        builder.increment_edge(0, 1, 1.0);
        builder.increment_edge(1, 2, 1.0);

        let result = EigenvectorCentrality::new()
            .with_threshold(1e-12)
            .with_max_iterations(1000)
            .run(&CsrGraph::from_builder(&builder));

        assert!((result.scores[0] - 2.0 / 7.0).abs() < 1e-6);
        assert!((result.scores[1] - 3.0 / 7.0).abs() < 1e-6);
    }

    #[test]
    fn test_isolated_nodes_drain_into_connected_ones() {
        let mut builder = GraphBuilder::with_nodes(4);
        builder.increment_edge(0, 1, 1.0);

        let result = EigenvectorCentrality::new()
            .with_threshold(1e-12)
            .with_max_iterations(1000)
            .run(&CsrGraph::from_builder(&builder));

        assert!(result.scores[2] < 1e-6);
        assert!(result.scores[3] < 1e-6);
        assert!((result.scores[0] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_all_isolated_nodes_keep_uniform_scores() {
        let result = EigenvectorCentrality::new().run(&CsrGraph::from_builder(&GraphBuilder::with_nodes(3)));

        assert!(result.converged);
        assert_eq!(result.iterations, 1);
        for score in &result.scores {
            assert!((score - 1.0 / 3.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_empty_graph() {
        let result = EigenvectorCentrality::new().run(&CsrGraph::default());
        assert!(result.scores.is_empty());
    }
}
