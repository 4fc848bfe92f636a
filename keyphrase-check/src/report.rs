//! Validation result types.

use serde::Serialize;

use crate::config::{OccurrenceBounds, ValidationRequest};

/// A bound the occurrence count failed to meet.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ThresholdViolation {
    /// Fewer occurrences than `minimum-occurrences`.
    BelowMinimum { minimum: usize, found: usize },
    /// More occurrences than `maximum-occurrences`.
    AboveMaximum { maximum: usize, found: usize },
}

impl ThresholdViolation {
    /// Failure message for this violation.
    #[must_use]
    pub fn message(&self, keyphrase: &str) -> String {
        match self {
            Self::BelowMinimum { minimum, found } => format!(
                "Expected at least {minimum} occurrences of \"{keyphrase}\", but found only {found}"
            ),
            Self::AboveMaximum { maximum, found } => format!(
                "Expected at most {maximum} occurrences of \"{keyphrase}\", but found {found}"
            ),
        }
    }
}

/// Outcome of counting a keyphrase and checking the count against its bounds.
///
/// Produced only once content was acquired and the keyphrase compiled; a
/// result always carries an occurrence count, even when a bound failed.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct ValidationResult {
    /// Number of non-overlapping keyphrase matches.
    pub occurrences: usize,
    /// The keyphrase as configured.
    pub keyphrase: String,
    /// Whether matching was case-sensitive.
    pub case_sensitive: bool,
    /// Where the content came from (file path or `provided text`).
    pub source: String,
    /// Configured bounds.
    pub bounds: OccurrenceBounds,
    /// Every bound that failed; empty on success.
    pub violations: Vec<ThresholdViolation>,
}

impl ValidationResult {
    /// Evaluate `occurrences` against the bounds of `request`.
    #[must_use]
    pub fn evaluate(request: &ValidationRequest, occurrences: usize) -> Self {
        let bounds = request.bounds();
        Self {
            occurrences,
            keyphrase: request.keyphrase().to_owned(),
            case_sensitive: request.case_sensitive(),
            source: request.source().label().into_owned(),
            bounds,
            violations: bounds.violations(occurrences),
        }
    }

    /// Whether every bound was met.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.violations.is_empty()
    }

    /// One-line description of what was counted where.
    #[must_use]
    pub fn summary(&self) -> String {
        let casing = if self.case_sensitive {
            "(case-sensitive)"
        } else {
            "(case-insensitive)"
        };
        format!(
            "Found {} occurrences of \"{}\" {casing} in {}",
            self.occurrences, self.keyphrase, self.source
        )
    }

    /// Success line, naming the count and the configured bounds.
    #[must_use]
    pub fn success_message(&self) -> String {
        let bounds = match self.bounds.maximum() {
            Some(maximum) => format!(
                "minimum required: {}, maximum allowed: {maximum}",
                self.bounds.minimum()
            ),
            None => format!("minimum required: {}", self.bounds.minimum()),
        };
        format!(
            "\u{2705} Success! Found {} occurrences ({bounds})",
            self.occurrences
        )
    }

    /// One failure message per violated bound, lower bound first.
    #[must_use]
    pub fn failure_messages(&self) -> Vec<String> {
        self.violations
            .iter()
            .map(|v| v.message(&self.keyphrase))
            .collect()
    }
}

/// Everything a single run reported.
///
/// `occurrences` is set iff counting ran. `failures` holds every failure
/// message in the order it was signalled.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct RunOutcome {
    /// Occurrence count, absent when the run stopped before counting.
    pub occurrences: Option<usize>,
    /// Full result when counting ran.
    pub result: Option<ValidationResult>,
    /// Failure messages.
    pub failures: Vec<String>,
}

impl RunOutcome {
    /// Whether no failure was signalled.
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.failures.is_empty()
    }
}
