//! Sentence similarity measures
//!
//! Sentences are compared through their stemmed, stopword-free terms.
//! [`SimilarityMeasure::Overlap`] weights long-text graphs,
//! [`SimilarityMeasure::Cosine`] builds the thresholded short-text graph.

use rustc_hash::{FxHashMap, FxHashSet};

use super::builder::GraphBuilder;

/// How edge weights between two sentences are computed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimilarityMeasure {
    /// Shared terms normalized by `ln|a| + ln|b|`
    Overlap,
    /// tf-idf cosine; pairs at or above `threshold` get a unit edge
    Cosine { threshold: f64 },
}

impl SimilarityMeasure {
    /// Build the sentence graph for per-sentence term lists
    pub fn build_graph(&self, terms: &[Vec<String>]) -> GraphBuilder {
        match *self {
            SimilarityMeasure::Overlap => {
                let sets: Vec<FxHashSet<&str>> = terms
                    .iter()
                    .map(|t| t.iter().map(String::as_str).collect())
                    .collect();
                GraphBuilder::from_pairwise(sets.len(), |i, j| overlap_similarity(&sets[i], &sets[j]))
            }
            SimilarityMeasure::Cosine { threshold } => {
                let model = TfIdfModel::new(terms);
                GraphBuilder::from_pairwise(terms.len(), |i, j| {
                    if model.cosine(i, j) >= threshold {
                        1.0
                    } else {
                        0.0
                    }
                })
            }
        }
    }
}

/// Shared-term overlap between two term sets
///
/// Returns `|a ∩ b| / (ln|a| + ln|b|)`, or the raw overlap when both sets
/// hold a single term.
pub fn overlap_similarity(a: &FxHashSet<&str>, b: &FxHashSet<&str>) -> f64 {
    let shared = a.intersection(b).count();
    if shared == 0 {
        return 0.0;
    }
    let norm = (a.len() as f64).ln() + (b.len() as f64).ln();
    if norm.abs() < f64::EPSILON {
        shared as f64
    } else {
        shared as f64 / norm
    }
}

/// Term-frequency / inverse-document-frequency vectors over a sentence set
#[derive(Debug, Clone)]
pub struct TfIdfModel {
    /// Per-sentence tf * idf weights
    vectors: Vec<FxHashMap<String, f64>>,
    /// Per-sentence L2 norms
    norms: Vec<f64>,
}

impl TfIdfModel {
    /// Build vectors where tf is normalized by the sentence's most frequent
    /// term and idf is `ln(N / df)`
    pub fn new(terms: &[Vec<String>]) -> Self {
        let n = terms.len() as f64;

        let mut document_frequency: FxHashMap<&str, usize> = FxHashMap::default();
        for sentence in terms {
            let unique: FxHashSet<&str> = sentence.iter().map(String::as_str).collect();
            for term in unique {
                *document_frequency.entry(term).or_insert(0) += 1;
            }
        }

        let vectors: Vec<FxHashMap<String, f64>> = terms
            .iter()
            .map(|sentence| {
                let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
                for term in sentence {
                    *counts.entry(term.as_str()).or_insert(0) += 1;
                }
                let max_count = counts.values().copied().max().unwrap_or(1) as f64;

                counts
                    .into_iter()
                    .map(|(term, count)| {
                        let df = document_frequency.get(term).copied().unwrap_or(1) as f64;
                        let idf = (n / df).ln();
                        (term.to_string(), (count as f64 / max_count) * idf)
                    })
                    .collect()
            })
            .collect();

        let norms = vectors
            .iter()
            .map(|v| v.values().map(|w| w * w).sum::<f64>().sqrt())
            .collect();

        Self { vectors, norms }
    }

    /// Cosine similarity between sentences `i` and `j` (0.0 for zero vectors)
    pub fn cosine(&self, i: usize, j: usize) -> f64 {
        let denominator = self.norms[i] * self.norms[j];
        if denominator <= 0.0 {
            return 0.0;
        }
        let (small, large) = if self.vectors[i].len() <= self.vectors[j].len() {
            (&self.vectors[i], &self.vectors[j])
        } else {
            (&self.vectors[j], &self.vectors[i])
        };
        let dot: f64 = small
            .iter()
            .filter_map(|(term, w)| large.get(term).map(|other| w * other))
            .sum();
        dot / denominator
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}
