//! SBOL3 validation for assembled documents.
//!
//! Each validator checks one family of SBOL3 rules and reports a
//! [`Finding`] per check. [`validate`] runs them all.
//!
//! | Validator | Rules |
//! |-----------|-------|
//! | `sbol/identity` | displayId syntax, `namespace/displayId`, child nesting, uniqueness |
//! | `sbol/sequence` | sequence references resolve, IUPAC elements |
//! | `sbol/location` | location sequences resolve and belong to the owner, bounds |
//! | `sbol/component` | types present, single topology, IRI terms, `instanceOf` targets |
//!
//! # Entry Point
//!
//! ```
//! use igem_sbol::Document;
//!
//! let report = igem_conformance::validate(&Document::with_namespace("https://example.org"));
//! assert!(report.all_passed());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod report;
pub mod validators;

use igem_sbol::Document;

pub use report::{Finding, Severity, ValidationReport};

/// Runs all validators over `doc` and returns the aggregated report.
///
/// Validators run in this order:
/// 1. Identities
/// 2. Sequences
/// 3. Locations
/// 4. Components and features
pub fn validate(doc: &Document) -> ValidationReport {
    let mut report = ValidationReport::new();
    report.extend(validators::identity::validate(doc));
    report.extend(validators::sequence::validate(doc));
    report.extend(validators::location::validate(doc));
    report.extend(validators::component::validate(doc));
    tracing::debug!(
        findings = report.findings.len(),
        failures = report.failure_count(),
        "validated {} objects",
        doc.len()
    );
    report
}
