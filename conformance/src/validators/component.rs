//! Component and feature rules.

use igem_sbol::{ontology, Document, Feature};

use crate::report::{Finding, ValidationReport};

const VALIDATOR: &str = "sbol/component";

/// Validates component types, topology, terms, and sub-component references.
pub fn validate(doc: &Document) -> ValidationReport {
    let mut report = ValidationReport::new();
    check_types(doc, &mut report);
    check_terms(doc, &mut report);
    check_instances(doc, &mut report);
    report
}

/// Every component has a type and at most one topology.
fn check_types(doc: &Document, report: &mut ValidationReport) {
    let mut problems = Vec::new();
    for component in doc.components() {
        if component.types.is_empty() {
            problems.push(format!("{}: no type", component.identity));
        }
        if component.has_type(ontology::SO_LINEAR) && component.has_type(ontology::SO_CIRCULAR) {
            problems.push(format!(
                "{}: typed both linear and circular",
                component.identity
            ));
        }
    }

    if problems.is_empty() {
        report.push(Finding::pass(VALIDATOR, "Component types are consistent"));
    } else {
        report.push(Finding::fail_with_details(
            VALIDATOR,
            format!("{} component type problems", problems.len()),
            problems,
        ));
    }
}

/// Types and roles are IRIs the RDF serializers can write.
fn check_terms(doc: &Document, report: &mut ValidationReport) {
    let mut problems = Vec::new();
    for component in doc.components() {
        let owned = component
            .types
            .iter()
            .chain(&component.roles)
            .map(|term| (component.identity.as_str(), term));
        let features = component
            .features
            .iter()
            .flat_map(|f| f.roles().iter().map(move |term| (f.identity(), term)));
        for (owner, term) in owned.chain(features) {
            if !ontology::is_iri(term) {
                problems.push(format!("{owner}: '{term}' is not an IRI"));
            }
        }
    }

    if problems.is_empty() {
        report.push(Finding::pass(VALIDATOR, "Types and roles are IRIs"));
    } else {
        report.push(Finding::fail_with_details(
            VALIDATOR,
            format!("{} terms are not IRIs", problems.len()),
            problems,
        ));
    }
}

/// `SubComponent.instanceOf` names a component. Components outside the
/// document are allowed but reported.
fn check_instances(doc: &Document, report: &mut ValidationReport) {
    let mut subs = 0usize;
    for component in doc.components() {
        for feature in &component.features {
            let Feature::SubComponent(sub) = feature else {
                continue;
            };
            subs += 1;
            if doc.find_component(&sub.instance_of).is_none() {
                report.push(Finding::warn(
                    VALIDATOR,
                    format!(
                        "{}: instanceOf {} is not in this document",
                        sub.identity, sub.instance_of
                    ),
                ));
            }
        }
    }
    report.push(Finding::pass(
        VALIDATOR,
        format!("{subs} sub-components checked"),
    ));
}
