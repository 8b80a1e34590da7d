//! Compressed Sparse Row (CSR) sentence graph
//!
//! The similarity graph is frozen into flat arrays once built. Every
//! centrality pass walks each sentence's links in order, so they are stored
//! contiguously and sorted by target.

use super::builder::GraphBuilder;

/// Read-only sentence similarity graph
#[derive(Debug, Clone)]
pub struct CsrGraph {
    /// Number of sentences
    pub num_nodes: usize,
    /// Links of node i live at `offsets[i]..offsets[i + 1]`
    offsets: Vec<usize>,
    targets: Vec<u32>,
    weights: Vec<f64>,
    /// Weighted degree per node
    strength: Vec<f64>,
}

impl CsrGraph {
    /// Freeze a [`GraphBuilder`]
    pub fn from_builder(builder: &GraphBuilder) -> Self {
        let mut graph = Self::with_capacity(builder.node_count(), builder.edge_count() * 2);

        for (_, node) in builder.nodes() {
            let mut links: Vec<(u32, f64)> = node.edges.iter().map(|(&t, &w)| (t, w)).collect();
            links.sort_unstable_by_key(|&(target, _)| target);
            graph.push_row(&links);
        }
        graph
    }

    fn with_capacity(nodes: usize, links: usize) -> Self {
        let mut offsets = Vec::with_capacity(nodes + 1);
        offsets.push(0);
        Self {
            num_nodes: 0,
            offsets,
            targets: Vec::with_capacity(links),
            weights: Vec::with_capacity(links),
            strength: Vec::with_capacity(nodes),
        }
    }

    fn push_row(&mut self, links: &[(u32, f64)]) {
        let (targets, weights): (Vec<u32>, Vec<f64>) = links.iter().copied().unzip();
        self.strength.push(weights.iter().sum());
        self.targets.extend(targets);
        self.weights.extend(weights);
        self.offsets.push(self.targets.len());
        self.num_nodes += 1;
    }

    fn row(&self, node: u32) -> std::ops::Range<usize> {
        let node = node as usize;
        self.offsets[node]..self.offsets[node + 1]
    }

    /// `(neighbor, weight)` pairs of a node, by ascending neighbor
    pub fn neighbors(&self, node: u32) -> impl Iterator<Item = (u32, f64)> + '_ {
        let row = self.row(node);
        self.targets[row.clone()]
            .iter()
            .copied()
            .zip(self.weights[row].iter().copied())
    }

    pub fn degree(&self, node: u32) -> usize {
        self.row(node).len()
    }

    /// Sum of a node's link weights
    pub fn strength(&self, node: u32) -> f64 {
        self.strength[node as usize]
    }

    pub fn is_empty(&self) -> bool {
        self.num_nodes == 0
    }

    /// Number of undirected links
    pub fn link_count(&self) -> usize {
        self.targets.len() / 2
    }

    /// Sentences that share nothing with any other sentence
    pub fn isolated_nodes(&self) -> Vec<u32> {
        (0..self.num_nodes as u32)
            .filter(|&node| self.degree(node) == 0)
            .collect()
    }
}

impl Default for CsrGraph {
    fn default() -> Self {
        Self::with_capacity(0, 0)
    }
}
