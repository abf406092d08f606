//! Location rules.
//!
//! A feature location must lie on one of its component's own sequences. A
//! sub-component source location must lie on a sequence of the component it
//! instantiates, when that component is in the document. Ranges are 1-based
//! and inclusive; a cut sits between elements.

use igem_sbol::{Component, Document, Feature, Location, LocationKind};

use crate::report::{Finding, ValidationReport};

const VALIDATOR: &str = "sbol/location";

/// Validates every location owned by a component in `doc`.
pub fn validate(doc: &Document) -> ValidationReport {
    let mut report = ValidationReport::new();
    let mut problems = Vec::new();
    let mut checked = 0usize;

    for component in doc.components() {
        for feature in &component.features {
            for location in feature.locations() {
                checked += 1;
                check_location(doc, component, location, &mut problems);
            }
            if let Feature::SubComponent(sub) = feature {
                let instance = doc.find_component(&sub.instance_of);
                for location in &sub.source_locations {
                    checked += 1;
                    check_source_location(doc, instance, location, &mut problems);
                }
            }
        }
    }

    if problems.is_empty() {
        report.push(Finding::pass(
            VALIDATOR,
            format!("{checked} locations fit their sequences"),
        ));
    } else {
        report.push(Finding::fail_with_details(
            VALIDATOR,
            format!("{} location problems", problems.len()),
            problems,
        ));
    }
    report
}

fn check_location(
    doc: &Document,
    owner: &Component,
    location: &Location,
    problems: &mut Vec<String>,
) {
    if !owner.sequences.contains(&location.sequence) {
        problems.push(format!(
            "{}: sequence {} is not a sequence of {}",
            location.identity, location.sequence, owner.identity
        ));
    }
    check_bounds(doc, location, problems);
}

fn check_source_location(
    doc: &Document,
    instance: Option<&Component>,
    location: &Location,
    problems: &mut Vec<String>,
) {
    if let Some(instance) = instance {
        if !instance.sequences.contains(&location.sequence) {
            problems.push(format!(
                "{}: sequence {} is not a sequence of {}",
                location.identity, location.sequence, instance.identity
            ));
        }
    }
    check_bounds(doc, location, problems);
}

fn check_bounds(doc: &Document, location: &Location, problems: &mut Vec<String>) {
    let Some(sequence) = doc.find_sequence(&location.sequence) else {
        problems.push(format!(
            "{}: sequence {} not found",
            location.identity, location.sequence
        ));
        return;
    };
    let length = sequence.len();
    match location.kind {
        LocationKind::Range { start, end } if start < 1 || start > end || end > length => {
            problems.push(format!(
                "{}: range {start}..{end} outside 1..{length}",
                location.identity
            ));
        }
        LocationKind::Cut { at } if at > length => {
            problems.push(format!(
                "{}: cut at {at} beyond length {length}",
                location.identity
            ));
        }
        _ => {}
    }
}
