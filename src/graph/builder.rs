//! Graph builder with efficient edge handling
//!
//! Nodes are sentence positions; edges are undirected and accumulate
//! weight in an FxHashMap for O(1) lookups during construction.

use rustc_hash::FxHashMap;

/// A node in the graph builder
#[derive(Debug, Clone, Default)]
pub struct BuilderNode {
    /// Adjacency list: target node ID -> edge weight
    pub edges: FxHashMap<u32, f64>,
}

/// A mutable sentence graph optimized for incremental construction
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: Vec<BuilderNode>,
}

impl GraphBuilder {
    /// Create a new empty graph builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with `count` isolated nodes, IDs `0..count`
    pub fn with_nodes(count: usize) -> Self {
        Self {
            nodes: vec![BuilderNode::default(); count],
        }
    }

    /// Append an isolated node, returning its ID
    pub fn add_node(&mut self) -> u32 {
        self.nodes.push(BuilderNode::default());
        (self.nodes.len() - 1) as u32
    }

    /// Increment the edge weight between two nodes
    ///
    /// The edge is created if missing. Self-loops and non-positive weights
    /// are ignored.
    pub fn increment_edge(&mut self, from: u32, to: u32, weight: f64) {
        if from == to || weight <= 0.0 {
            return;
        }
        if from as usize >= self.nodes.len() || to as usize >= self.nodes.len() {
            return;
        }

        *self.nodes[from as usize].edges.entry(to).or_insert(0.0) += weight;
        *self.nodes[to as usize].edges.entry(from).or_insert(0.0) += weight;
    }

    /// Build a complete pairwise graph, weighting each pair with `weight(i, j)`
    ///
    /// Pairs with zero weight get no edge.
    pub fn from_pairwise(count: usize, mut weight: impl FnMut(usize, usize) -> f64) -> Self {
        let mut builder = Self::with_nodes(count);
        for i in 0..count {
            for j in (i + 1)..count {
                builder.increment_edge(i as u32, j as u32, weight(i, j));
            }
        }
        builder
    }

    /// Get the number of nodes in the graph
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the total number of edges (counting each undirected edge once)
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges.len()).sum::<usize>() / 2
    }

    /// Get a node by ID
    pub fn get_node(&self, id: u32) -> Option<&BuilderNode> {
        self.nodes.get(id as usize)
    }

    /// Weight of the edge between two nodes, if any
    pub fn edge_weight(&self, from: u32, to: u32) -> Option<f64> {
        self.get_node(from)?.edges.get(&to).copied()
    }

    /// Iterate over all nodes
    pub fn nodes(&self) -> impl Iterator<Item = (u32, &BuilderNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (i as u32, n))
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
