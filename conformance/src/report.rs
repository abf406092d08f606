//! Validation report types: findings, severity levels, and report aggregation.

use serde::Serialize;

/// Severity level of a validation finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The check passed.
    Pass,
    /// The document is usable but something is worth a look.
    Warning,
    /// The document breaks an SBOL3 rule.
    Failure,
}

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// Short identifier of the validator that produced this finding.
    pub validator: String,
    /// Human-readable message describing the outcome.
    pub message: String,
    /// Severity of the finding.
    pub severity: Severity,
    /// Optional additional detail lines.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

impl Finding {
    /// Creates a passing finding.
    pub fn pass(validator: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(validator, message, Severity::Pass)
    }

    /// Creates a failure.
    pub fn fail(validator: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(validator, message, Severity::Failure)
    }

    /// Creates a failure with additional detail lines.
    pub fn fail_with_details(
        validator: impl Into<String>,
        message: impl Into<String>,
        details: Vec<String>,
    ) -> Self {
        Self {
            details,
            ..Self::fail(validator, message)
        }
    }

    /// Creates a warning.
    pub fn warn(validator: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(validator, message, Severity::Warning)
    }

    fn new(validator: impl Into<String>, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            validator: validator.into(),
            message: message.into(),
            severity,
            details: Vec::new(),
        }
    }

    /// Returns true if this finding is a failure.
    pub fn is_failure(&self) -> bool {
        self.severity == Severity::Failure
    }

    /// Returns true if this finding is a warning.
    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}

/// Aggregated findings from all validators.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    /// All findings across all validators.
    pub findings: Vec<Finding>,
}

impl ValidationReport {
    /// Creates a new empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a finding, logging failures and warnings.
    pub fn push(&mut self, finding: Finding) {
        match finding.severity {
            Severity::Failure => {
                tracing::warn!(validator = %finding.validator, "{}", finding.message);
            }
            Severity::Warning => {
                tracing::info!(validator = %finding.validator, "{}", finding.message);
            }
            Severity::Pass => {}
        }
        self.findings.push(finding);
    }

    /// Extends this report with findings from another report.
    pub fn extend(&mut self, other: ValidationReport) {
        self.findings.extend(other.findings);
    }

    /// Returns the count of failures.
    pub fn failure_count(&self) -> usize {
        self.findings.iter().filter(|f| f.is_failure()).count()
    }

    /// Returns the count of warnings.
    pub fn warning_count(&self) -> usize {
        self.findings.iter().filter(|f| f.is_warning()).count()
    }

    /// Returns true if there are no failures.
    pub fn all_passed(&self) -> bool {
        self.failure_count() == 0
    }

    /// Failures and warnings only.
    pub fn issues(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity != Severity::Pass)
    }
}
