//! Turtle 1.1 serializer for SBOL3 documents.
//!
//! Produces a valid Turtle document: prefix declarations followed by one
//! block per object, top-levels in document order with their children after
//! them.

use super::graph::{nodes, Object};
use crate::Document;

/// Serializes a document to a Turtle string.
#[must_use]
pub fn to_turtle(doc: &Document) -> String {
    let mut out = String::with_capacity(4 * 1024);

    // Prefix declarations
    out.push_str("@prefix rdf:  <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .\n");
    out.push_str("@prefix xsd:  <http://www.w3.org/2001/XMLSchema#> .\n");
    out.push_str("@prefix sbol: <http://sbols.org/v3#> .\n");
    out.push('\n');

    for node in nodes(doc) {
        out.push_str(&format!("<{}>\n  a sbol:{}", node.identity, node.class));
        for (property, value) in &node.properties {
            out.push_str(&format!(" ;\n  sbol:{} {}", property, object_to_turtle(value)));
        }
        out.push_str(" .\n\n");
    }

    out
}

fn turtle_string(s: &str) -> String {
    let escaped = s
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r");
    format!("\"{}\"", escaped)
}

fn object_to_turtle(value: &Object) -> String {
    match value {
        Object::Iri(iri) => format!("<{}>", iri),
        Object::Literal(s) => turtle_string(s),
        Object::Integer(i) => format!("\"{}\"^^xsd:integer", i),
    }
}
