//! Identity rules.
//!
//! Top-level objects are named `namespace/displayId`. Owned children (features
//! and locations) are named under the identity of their owner, and every
//! identity in a document is unique.

use std::collections::HashSet;

use igem_sbol::identity::is_valid_display_id;
use igem_sbol::{Document, Location, TopLevel};

use crate::report::{Finding, ValidationReport};

const VALIDATOR: &str = "sbol/identity";

/// Validates the identities of every object in `doc`.
pub fn validate(doc: &Document) -> ValidationReport {
    let mut report = ValidationReport::new();
    let mut problems = Vec::new();
    let mut seen = HashSet::new();

    for object in doc.objects() {
        check_top_level(object, &mut problems);
        if let TopLevel::Component(component) = object {
            for feature in &component.features {
                check_child(
                    &component.identity,
                    feature.identity(),
                    feature.display_id(),
                    &mut problems,
                );
                note_unique(feature.identity(), &mut seen, &mut problems);
                for location in feature.locations() {
                    check_location(feature.identity(), location, &mut seen, &mut problems);
                }
                if let igem_sbol::Feature::SubComponent(sub) = feature {
                    for location in &sub.source_locations {
                        check_location(feature.identity(), location, &mut seen, &mut problems);
                    }
                }
            }
        }
        note_unique(object.identity(), &mut seen, &mut problems);
    }

    if problems.is_empty() {
        report.push(Finding::pass(
            VALIDATOR,
            format!("{} identities are well formed and unique", seen.len()),
        ));
    } else {
        report.push(Finding::fail_with_details(
            VALIDATOR,
            format!("{} identity problems", problems.len()),
            problems,
        ));
    }
    report
}

fn check_top_level(object: &TopLevel, problems: &mut Vec<String>) {
    let identity = object.identity();
    let display_id = object.display_id();
    if !is_valid_display_id(display_id) {
        problems.push(format!("{identity}: invalid displayId '{display_id}'"));
    }
    let expected = format!("{}/{display_id}", object.namespace());
    if identity != expected {
        problems.push(format!("{identity}: expected identity {expected}"));
    }
}

fn check_child(parent: &str, identity: &str, display_id: &str, problems: &mut Vec<String>) {
    if !is_valid_display_id(display_id) {
        problems.push(format!("{identity}: invalid displayId '{display_id}'"));
    }
    let nested = identity
        .strip_prefix(parent)
        .and_then(|rest| rest.strip_prefix('/'));
    if nested != Some(display_id) {
        problems.push(format!("{identity}: not a child of {parent}"));
    }
}

fn check_location(
    parent: &str,
    location: &Location,
    seen: &mut HashSet<String>,
    problems: &mut Vec<String>,
) {
    check_child(parent, &location.identity, &location.display_id, problems);
    note_unique(&location.identity, seen, problems);
}

fn note_unique(identity: &str, seen: &mut HashSet<String>, problems: &mut Vec<String>) {
    if !seen.insert(identity.to_owned()) {
        problems.push(format!("{identity}: duplicate identity"));
    }
}
