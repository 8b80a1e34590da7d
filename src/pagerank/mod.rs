//! Graph centrality algorithms
//!
//! [`standard::StandardPageRank`] ranks long texts with damped PageRank;
//! [`eigenvector::EigenvectorCentrality`] ranks short texts with an
//! undamped power method. Both are driven by [`PowerIteration`], which stops
//! once the L1 change between passes drops to the threshold or the
//! iteration cap is hit.

pub mod eigenvector;
pub mod standard;

/// Centrality scores for every sentence of a graph
#[derive(Debug, Clone)]
pub struct PageRankResult {
    /// Score per node, summing to one
    pub scores: Vec<f64>,
    pub iterations: usize,
    /// L1 change of the last pass
    pub delta: f64,
    pub converged: bool,
}

impl PageRankResult {
    pub fn new(scores: Vec<f64>, iterations: usize, delta: f64, converged: bool) -> Self {
        Self {
            scores,
            iterations,
            delta,
            converged,
        }
    }

    /// The `n` best nodes, highest score first; equal scores favor the
    /// earlier sentence
    pub fn top_n(&self, n: usize) -> Vec<(u32, f64)> {
        let mut ranked: Vec<(u32, f64)> = (0u32..).zip(self.scores.iter().copied()).collect();
        ranked.sort_by(|(ia, sa), (ib, sb)| sb.total_cmp(sa).then(ia.cmp(ib)));
        ranked.truncate(n);
        ranked
    }

    /// Score of `node`, or 0 for nodes outside the graph
    pub fn score(&self, node: u32) -> f64 {
        self.scores.get(node as usize).copied().unwrap_or(0.0)
    }
}

/// Shared power-iteration driver
///
/// Starts from the uniform distribution and repeatedly applies a transition
/// step until the scores settle.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PowerIteration {
    pub max_iterations: usize,
    pub threshold: f64,
}

impl PowerIteration {
    /// Run `step(current, next)` over `n` nodes
    ///
    /// `next` arrives zeroed; the step must fill it from `current`.
    pub fn run(&self, n: usize, mut step: impl FnMut(&[f64], &mut [f64])) -> PageRankResult {
        if n == 0 {
            return PageRankResult::new(Vec::new(), 0, 0.0, true);
        }

        let mut current = vec![1.0 / n as f64; n];
        let mut next = vec![0.0; n];
        let mut iterations = 0;
        let mut delta = f64::INFINITY;

        while iterations < self.max_iterations && delta > self.threshold {
            next.fill(0.0);
            step(&current, &mut next);
            delta = l1_distance(&current, &next);
            std::mem::swap(&mut current, &mut next);
            iterations += 1;
        }

        let total: f64 = current.iter().sum();
        if total > 0.0 {
            current.iter_mut().for_each(|s| *s /= total);
        }
        PageRankResult::new(current, iterations, delta, delta <= self.threshold)
    }
}

fn l1_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_n_breaks_ties_by_position() {
        let result = PageRankResult::new(vec![0.2, 0.4, 0.2, 0.2], 1, 0.0, true);

        let ids: Vec<u32> = result.top_n(3).into_iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![1, 0, 2]);
    }

    #[test]
    fn test_top_n_more_than_available() {
        let result = PageRankResult::new(vec![0.5, 0.5], 1, 0.0, true);
        assert_eq!(result.top_n(8).len(), 2);
    }

    #[test]
    fn test_score_out_of_range() {
        let result = PageRankResult::new(vec![1.0], 1, 0.0, true);
        assert_eq!(result.score(0), 1.0);
        assert_eq!(result.score(5), 0.0);
    }

    #[test]
    fn test_power_iteration_identity_converges_immediately() {
        let driver = PowerIteration {
            max_iterations: 10,
            threshold: 1e-9,
        };
        let result = driver.run(4, |current, next| next.copy_from_slice(current));

        assert!(result.converged);
        assert_eq!(result.iterations, 1);
        assert!(result.scores.iter().all(|s| (s - 0.25).abs() < 1e-12));
    }

    #[test]
    fn test_power_iteration_stops_at_cap() {
        let driver = PowerIteration {
            max_iterations: 3,
            threshold: 0.0,
        };
        // Doubling mass every pass never settles
        let result = driver.run(2, |current, next| {
            for (n, c) in next.iter_mut().zip(current) {
                *n = c * 2.0;
            }
        });

        assert_eq!(result.iterations, 3);
        assert!(!result.converged);
        assert!((result.delta - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_power_iteration_normalizes() {
        let driver = PowerIteration {
            max_iterations: 1,
            threshold: 0.0,
        };
        let result = driver.run(2, |current, next| {
            next[0] = current[0] * 3.0;
            next[1] = current[1];
        });

        assert!((result.scores[0] - 0.75).abs() < 1e-12);
    }
}
