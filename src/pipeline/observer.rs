//! Pipeline observer: stage hooks for timing and inspection.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic. All hooks default to no-ops, so an observer only implements
//! what it cares about.

use std::time::{Duration, Instant};

use crate::pagerank::PageRankResult;
use crate::types::{Sentence, Topic};

pub const STAGE_SEGMENT: &str = "segment";
pub const STAGE_TOPICS: &str = "topics";
pub const STAGE_GRAPH: &str = "graph";
pub const STAGE_RANK: &str = "rank";
pub const STAGE_CLEAN: &str = "clean";
pub const STAGE_STRUCTURE: &str = "structure";

/// Wall-clock timer for one stage
#[derive(Debug, Clone, Copy)]
pub struct StageClock(Instant);

impl StageClock {
    pub fn start() -> Self {
        Self(Instant::now())
    }

    pub fn elapsed(&self) -> Duration {
        self.0.elapsed()
    }
}

/// Metrics reported when a stage finishes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StageReport {
    elapsed: Duration,
    nodes: Option<usize>,
    edges: Option<usize>,
    iterations: Option<usize>,
    converged: Option<bool>,
}

impl StageReport {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            ..Self::default()
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn nodes(&self) -> Option<usize> {
        self.nodes
    }

    pub fn edges(&self) -> Option<usize> {
        self.edges
    }

    pub fn iterations(&self) -> Option<usize> {
        self.iterations
    }

    pub fn converged(&self) -> Option<bool> {
        self.converged
    }
}

/// Builder for reports that carry graph or rank metrics
#[derive(Debug, Clone)]
pub struct StageReportBuilder(StageReport);

impl StageReportBuilder {
    pub fn new(elapsed: Duration) -> Self {
        Self(StageReport::new(elapsed))
    }

    pub fn nodes(mut self, nodes: usize) -> Self {
        self.0.nodes = Some(nodes);
        self
    }

    pub fn edges(mut self, edges: usize) -> Self {
        self.0.edges = Some(edges);
        self
    }

    pub fn iterations(mut self, iterations: usize) -> Self {
        self.0.iterations = Some(iterations);
        self
    }

    pub fn converged(mut self, converged: bool) -> Self {
        self.0.converged = Some(converged);
        self
    }

    pub fn build(self) -> StageReport {
        self.0
    }
}

/// Receives callbacks as a summarization call moves through its stages
pub trait PipelineObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}

    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}

    /// Sentences segmented from the document
    fn on_sentences(&mut self, _sentences: &[Sentence]) {}

    /// Topics extracted (structured path only)
    fn on_topics(&mut self, _topics: &[Topic]) {}

    /// Centrality scores over all sentences
    fn on_rank(&mut self, _result: &PageRankResult) {}
}

/// Observer that ignores every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Records every stage report in execution order
#[derive(Debug, Clone, Default)]
pub struct StageTimingObserver {
    reports: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> &[(&'static str, StageReport)] {
        &self.reports
    }

    /// Names of the stages that ran, in order
    pub fn stages(&self) -> Vec<&'static str> {
        self.reports.iter().map(|(name, _)| *name).collect()
    }

    /// Sum of all stage durations
    pub fn total(&self) -> Duration {
        self.reports.iter().map(|(_, r)| r.elapsed()).sum()
    }
}

impl PipelineObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, report.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_builder() {
        let report = StageReportBuilder::new(Duration::from_millis(3))
            .nodes(4)
            .edges(5)
            .iterations(12)
            .converged(true)
            .build();

        assert_eq!(report.elapsed(), Duration::from_millis(3));
        assert_eq!(report.nodes(), Some(4));
        assert_eq!(report.edges(), Some(5));
        assert_eq!(report.iterations(), Some(12));
        assert_eq!(report.converged(), Some(true));
    }

    #[test]
    fn test_plain_report_has_no_metrics() {
        let report = StageReport::new(Duration::ZERO);
        assert!(report.nodes().is_none());
        assert!(report.converged().is_none());
    }

    #[test]
    fn test_timing_observer_records_in_order() {
        let mut obs = StageTimingObserver::new();
        obs.on_stage_end(STAGE_SEGMENT, &StageReport::new(Duration::from_millis(1)));
        obs.on_stage_end(STAGE_RANK, &StageReport::new(Duration::from_millis(2)));

        assert_eq!(obs.stages(), vec![STAGE_SEGMENT, STAGE_RANK]);
        assert_eq!(obs.total(), Duration::from_millis(3));
    }

    #[test]
    fn test_clock_measures_forward() {
        let clock = StageClock::start();
        assert!(clock.elapsed() >= Duration::ZERO);
    }
}
