//! Validation engine for summarizer configurations.
//!
//! The engine runs all registered [`ValidationRule`]s against a
//! [`SummarizerConfig`] and collects every diagnostic into a
//! [`ValidationReport`]. It never short-circuits on the first error, so
//! users see all problems at once.
//!
//! ```rust
//! use rapid_digest::pipeline::validation::ValidationEngine;
//! use rapid_digest::SummarizerConfig;
//!
//! let report = ValidationEngine::with_defaults().validate(&SummarizerConfig::default());
//! assert!(report.is_valid());
//! ```

use std::fmt;

use serde::Serialize;

use crate::errors::{Result, SummaryError};
use crate::types::SummarizerConfig;

// ─── Severity ───────────────────────────────────────────────────────────────

/// Whether a diagnostic is a hard error or a soft warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

// ─── Diagnostic ─────────────────────────────────────────────────────────────

/// A single validation finding attached to a configuration field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationDiagnostic {
    pub severity: Severity,
    /// Configuration field the finding is about
    pub field: &'static str,
    pub message: String,
}

impl ValidationDiagnostic {
    pub fn error(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            field,
            message: message.into(),
        }
    }

    pub fn warning(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

// ─── Report ─────────────────────────────────────────────────────────────────

/// Collected diagnostics from running all validation rules.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    /// Iterate over error-severity diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &ValidationDiagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
    }

    /// Iterate over warning-severity diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &ValidationDiagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
    }

    /// Returns `true` if any diagnostic is an error.
    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    /// Returns `true` if there are no errors (warnings are acceptable).
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Convert into an error listing every error-severity diagnostic
    pub fn into_result(self) -> Result<()> {
        if self.is_valid() {
            return Ok(());
        }
        let rendered: Vec<String> = self.errors().map(ToString::to_string).collect();
        Err(SummaryError::InvalidConfig(rendered.join("; ")))
    }
}

// ─── Rule trait ─────────────────────────────────────────────────────────────

/// A single validation rule that inspects a [`SummarizerConfig`] and returns
/// zero or more diagnostics.
pub trait ValidationRule: Send + Sync {
    /// Short, stable identifier for this rule (e.g., `"damping_range"`).
    fn name(&self) -> &str;

    /// Inspect `cfg` and return any findings.
    fn validate(&self, cfg: &SummarizerConfig) -> Vec<ValidationDiagnostic>;
}

// ─── Engine ─────────────────────────────────────────────────────────────────

/// Runs a set of [`ValidationRule`]s against a [`SummarizerConfig`].
pub struct ValidationEngine {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl ValidationEngine {
    /// Create an empty engine with no rules.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create an engine pre-loaded with the default rule set.
    pub fn with_defaults() -> Self {
        let mut engine = Self::new();
        engine.add_rule(Box::new(PositiveCountsRule));
        engine.add_rule(Box::new(TitleLengthRule));
        engine.add_rule(Box::new(CentralityParamsRule));
        engine.add_rule(Box::new(IntroBudgetRule));
        engine
    }

    /// Register an additional rule.
    pub fn add_rule(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }

    /// Names of the registered rules, in run order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Run all rules against `cfg` and return the collected report.
    pub fn validate(&self, cfg: &SummarizerConfig) -> ValidationReport {
        let mut report = ValidationReport::default();
        for rule in &self.rules {
            report.diagnostics.extend(rule.validate(cfg));
        }
        report
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl SummarizerConfig {
    /// Run the default rule set against this configuration
    pub fn validate(&self) -> ValidationReport {
        ValidationEngine::with_defaults().validate(self)
    }

    /// Parse a JSON configuration and reject it if any rule reports an error
    pub fn from_json(json: &str) -> Result<Self> {
        let cfg: SummarizerConfig = serde_json::from_str(json)?;
        cfg.validate().into_result()?;
        Ok(cfg)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Concrete rules
// ═══════════════════════════════════════════════════════════════════════════

// ─── 1. Sentence budgets and caps must be positive ──────────────────────────

struct PositiveCountsRule;

impl ValidationRule for PositiveCountsRule {
    fn name(&self) -> &str {
        "positive_counts"
    }

    fn validate(&self, cfg: &SummarizerConfig) -> Vec<ValidationDiagnostic> {
        let checks: &[(&'static str, usize)] = &[
            ("flat_sentences", cfg.flat_sentences),
            ("structured_sentences", cfg.structured_sentences),
            ("max_section_sentences", cfg.max_section_sentences),
            ("max_iterations", cfg.max_iterations),
        ];

        checks
            .iter()
            .filter(|(_, value)| *value == 0)
            .map(|&(field, _)| ValidationDiagnostic::error(field, "must be greater than 0"))
            .collect()
    }
}

// ─── 2. Titles need room for at least one character plus the ellipsis ──────

struct TitleLengthRule;

impl ValidationRule for TitleLengthRule {
    fn name(&self) -> &str {
        "title_length"
    }

    fn validate(&self, cfg: &SummarizerConfig) -> Vec<ValidationDiagnostic> {
        let mut out = Vec::new();
        if cfg.title_max_chars < 4 {
            out.push(ValidationDiagnostic::error(
                "title_max_chars",
                format!("must be at least 4, got {}", cfg.title_max_chars),
            ));
        }
        if cfg.default_title.trim().is_empty() {
            out.push(ValidationDiagnostic::error("default_title", "must not be blank"));
        }
        out
    }
}

// ─── 3. Centrality parameters must be in range ──────────────────────────────

struct CentralityParamsRule;

impl ValidationRule for CentralityParamsRule {
    fn name(&self) -> &str {
        "centrality_params"
    }

    fn validate(&self, cfg: &SummarizerConfig) -> Vec<ValidationDiagnostic> {
        let mut out = Vec::new();
        if !(cfg.damping > 0.0 && cfg.damping < 1.0) {
            out.push(ValidationDiagnostic::error(
                "damping",
                format!("must be in (0, 1), got {}", cfg.damping),
            ));
        }
        if !(cfg.convergence_threshold > 0.0) {
            out.push(ValidationDiagnostic::error(
                "convergence_threshold",
                format!("must be positive, got {}", cfg.convergence_threshold),
            ));
        }
        if !(0.0..=1.0).contains(&cfg.similarity_threshold) {
            out.push(ValidationDiagnostic::error(
                "similarity_threshold",
                format!("must be in [0, 1], got {}", cfg.similarity_threshold),
            ));
        }
        out
    }
}

// ─── 4. An introduction that swallows every sentence leaves no sections ─────

struct IntroBudgetRule;

impl ValidationRule for IntroBudgetRule {
    fn name(&self) -> &str {
        "intro_budget"
    }

    fn validate(&self, cfg: &SummarizerConfig) -> Vec<ValidationDiagnostic> {
        if cfg.intro_sentences >= cfg.structured_sentences {
            vec![ValidationDiagnostic::warning(
                "intro_sentences",
                format!(
                    "introduction uses all {} ranked sentences, no sections will be produced",
                    cfg.structured_sentences
                ),
            )]
        } else {
            vec![]
        }
    }
}
