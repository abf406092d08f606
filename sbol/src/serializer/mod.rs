//! Serializers for SBOL3 documents.
//!
//! Three serialization formats are supported:
//! - **Turtle** ([`turtle`]): readable output, one block per object
//! - **N-Triples** ([`ntriples`]): sorted, one triple per line; diff-friendly
//! - **JSON-LD** ([`jsonld`]): `@context` + `@graph`, behind the `serializers` feature
//!
//! All three walk the same node model ([`graph`]), so they always agree on
//! which triples a document contains.

pub mod graph;
#[cfg(feature = "serializers")]
pub mod jsonld;
pub mod ntriples;
pub mod turtle;
