//! Sequence rules: references resolve and elements fit their encoding.

use std::sync::OnceLock;

use igem_sbol::{ontology, Document};
use regex::Regex;

use crate::report::{Finding, ValidationReport};

const VALIDATOR: &str = "sbol/sequence";

/// IUPAC nucleotide codes, including gaps.
const IUPAC_NUCLEIC_ACID: &str = r"^[ACGTURYSWKMBDHVNacgturyswkmbdhvn.\-]*$";

fn iupac() -> Result<&'static Regex, &'static regex::Error> {
    static RE: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(IUPAC_NUCLEIC_ACID)).as_ref()
}

/// Validates sequences and the component references to them.
pub fn validate(doc: &Document) -> ValidationReport {
    let mut report = ValidationReport::new();
    check_references(doc, &mut report);
    check_elements(doc, &mut report);
    report
}

/// Every `Component.sequences` entry names a `Sequence` in the document.
fn check_references(doc: &Document, report: &mut ValidationReport) {
    let mut dangling = Vec::new();
    for component in doc.components() {
        for reference in &component.sequences {
            if doc.lookup_sequence(reference).is_err() {
                dangling.push(format!("{} -> {reference}", component.identity));
            }
        }
        if component.has_type(ontology::SBO_DNA) && component.sequences.is_empty() {
            report.push(Finding::warn(
                VALIDATOR,
                format!("{}: DNA component without a sequence", component.identity),
            ));
        }
    }

    if dangling.is_empty() {
        report.push(Finding::pass(VALIDATOR, "All sequence references resolve"));
    } else {
        report.push(Finding::fail_with_details(
            VALIDATOR,
            format!("{} sequence references do not resolve", dangling.len()),
            dangling,
        ));
    }
}

/// IUPAC-encoded elements use only nucleotide codes.
fn check_elements(doc: &Document, report: &mut ValidationReport) {
    let alphabet = match iupac() {
        Ok(alphabet) => alphabet,
        Err(e) => {
            report.push(Finding::fail(VALIDATOR, format!("IUPAC alphabet unavailable: {e}")));
            return;
        }
    };
    let mut invalid = Vec::new();
    for sequence in doc.sequences() {
        if !ontology::same_term(&sequence.encoding, ontology::IUPAC_DNA_ENCODING) {
            report.push(Finding::warn(
                VALIDATOR,
                format!(
                    "{}: elements not checked for encoding {}",
                    sequence.identity, sequence.encoding
                ),
            ));
            continue;
        }
        if !alphabet.is_match(&sequence.elements) {
            invalid.push(sequence.identity.clone());
        }
        if sequence.is_empty() {
            report.push(Finding::warn(VALIDATOR, format!("{}: empty sequence", sequence.identity)));
        }
    }

    if invalid.is_empty() {
        report.push(Finding::pass(VALIDATOR, "Sequence elements match their encoding"));
    } else {
        report.push(Finding::fail_with_details(
            VALIDATOR,
            "Sequence elements outside the IUPAC nucleic-acid alphabet",
            invalid,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::fixtures;

    #[test]
    fn fixture_passes_without_warnings() {
        let report = validate(&fixtures::document());
        assert!(report.all_passed());
        assert_eq!(report.warning_count(), 0);
    }

    #[test]
    fn ambiguity_codes_are_nucleotides() -> Result<(), regex::Error> {
        let alphabet = iupac().map_err(Clone::clone)?;
        assert!(alphabet.is_match("ACGTNRYacgt-."));
        assert!(!alphabet.is_match("acgtx"));
        assert!(!alphabet.is_match("MKLV PEPTIDE"));
        Ok(())
    }

    #[test]
    fn dangling_sequence_reference_fails() {
        let mut component = fixtures::component();
        component.sequences.push(format!("{}/missing_seq", fixtures::NS));
        let report = validate(&fixtures::document_of(fixtures::sequence(), component));
        assert_eq!(report.failure_count(), 1);
        let failure = report.issues().find(|f| f.is_failure());
        assert!(failure.is_some_and(|f| f.details[0].ends_with("/missing_seq")));
    }

    #[test]
    fn non_nucleotide_elements_fail() {
        let mut sequence = fixtures::sequence();
        sequence.elements = "acgtZZ".to_owned();
        let report = validate(&fixtures::document_of(sequence, fixtures::component()));
        assert_eq!(report.failure_count(), 1);
    }

    #[test]
    fn other_encodings_are_skipped_with_a_warning() {
        let mut sequence = fixtures::sequence();
        sequence.encoding = "https://identifiers.org/edam:format_1208".to_owned();
        sequence.elements = "MKLV".to_owned();
        let report = validate(&fixtures::document_of(sequence, fixtures::component()));
        assert!(report.all_passed());
        assert_eq!(report.warning_count(), 1);
    }
}
