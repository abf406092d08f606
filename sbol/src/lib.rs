//! SBOL3 object model for DNA parts and constructs.
//!
//! The `igem-sbol` crate holds the subset of the SBOL3 data model that part
//! and backbone composition needs: components, sequences, sub-components,
//! sequence features, and locations. Objects live in a [`Document`] and are
//! named by IRIs ([`identity`]). Roles and types are ontology terms
//! ([`ontology`]).
//!
//! # Entry Point
//!
//! ```
//! let mut doc = igem_sbol::Document::with_namespace("https://github.com/Gonza10V");
//! assert!(doc.is_empty());
//! ```
//!
//! # Serialization
//!
//! ```
//! let doc = igem_sbol::Document::new();
//! let turtle = igem_sbol::serializer::turtle::to_turtle(&doc);
//! let nt = igem_sbol::serializer::ntriples::to_ntriples(&doc);
//! let json_ld = igem_sbol::serializer::jsonld::to_json_ld(&doc);
//! assert!(turtle.contains("@prefix sbol:"));
//! assert!(nt.is_empty());
//! assert!(json_ld["@graph"].as_array().is_some());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod document;
pub mod error;
pub mod identity;
pub mod model;
pub mod ontology;
pub mod serializer;

pub use document::Document;
pub use error::SbolError;
pub use model::{
    Component, Feature, Location, LocationKind, Sequence, SequenceFeature, SubComponent,
    TopLevel, Topology,
};
pub use ontology::TermHierarchy;
