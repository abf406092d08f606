//! N-Triples serializer for SBOL3 documents.
//!
//! Produces a valid N-Triples document (one triple per line, absolute IRIs).
//! Lines are sorted and deduplicated so that the same document always
//! serializes byte-for-byte identically.

use super::graph::{nodes, sbol_iri, Object};
use crate::Document;

const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
const XSD_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";

/// Serializes a document to a sorted N-Triples string.
#[must_use]
pub fn to_ntriples(doc: &Document) -> String {
    let mut lines: Vec<String> = Vec::new();

    for node in nodes(doc) {
        lines.push(triple(&node.identity, RDF_TYPE, &iri(&sbol_iri(node.class))));
        for (property, value) in &node.properties {
            lines.push(triple(&node.identity, &sbol_iri(property), &object(value)));
        }
    }

    lines.sort();
    lines.dedup();

    let mut out = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in lines {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

fn triple(subj: &str, pred: &str, obj: &str) -> String {
    format!("<{}> <{}> {} .", subj, pred, obj)
}

fn iri(s: &str) -> String {
    format!("<{}>", s)
}

fn lit(s: &str) -> String {
    let escaped = s
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r");
    format!("\"{}\"", escaped)
}

fn object(value: &Object) -> String {
    match value {
        Object::Iri(s) => iri(s),
        Object::Literal(s) => lit(s),
        Object::Integer(i) => format!("\"{}\"^^<{}>", i, XSD_INTEGER),
    }
}
