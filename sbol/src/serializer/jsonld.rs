//! JSON-LD 1.1 serializer for SBOL3 documents.
//!
//! Produces a single JSON-LD document with a compact `@context` and a flat
//! `@graph` array holding every object, children included.

use serde_json::{json, Map, Value};

use super::graph::{nodes, Node, Object};
use crate::ontology::SBOL3;
use crate::Document;

/// Serializes a document to a JSON-LD `Value`.
///
/// The returned value can be pretty-printed with [`serde_json::to_string_pretty`].
#[must_use]
pub fn to_json_ld(doc: &Document) -> Value {
    let graph: Vec<Value> = nodes(doc).iter().map(node_to_json).collect();
    json!({
        "@context": build_context(),
        "@graph": graph
    })
}

fn build_context() -> Value {
    let mut ctx = Map::new();
    ctx.insert("sbol".to_owned(), json!(SBOL3));
    ctx.insert("xsd".to_owned(), json!("http://www.w3.org/2001/XMLSchema#"));
    Value::Object(ctx)
}

fn node_to_json(node: &Node) -> Value {
    let mut obj = Map::new();
    obj.insert("@id".to_owned(), json!(node.identity));
    obj.insert("@type".to_owned(), json!(format!("sbol:{}", node.class)));

    for (property, value) in &node.properties {
        let key = format!("sbol:{property}");
        let value = object_to_json(value);
        // Repeated properties collapse into an array.
        match obj.get_mut(&key) {
            None => {
                obj.insert(key, value);
            }
            Some(Value::Array(values)) => values.push(value),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, value]);
            }
        }
    }
    Value::Object(obj)
}

fn object_to_json(value: &Object) -> Value {
    match value {
        Object::Iri(iri) => json!({ "@id": iri }),
        Object::Literal(s) => json!(s),
        Object::Integer(i) => json!(i),
    }
}
