//! Part-in-backbone composition of SBOL3 DNA components.
//!
//! Given a part (for example a promoter) and a backbone whose last feature
//! marks where the vector is opened, [`part_in_backbone`] builds the
//! composite construct: its spliced sequence, its topology, and the
//! sub-components recording where the part and the backbone regions came
//! from.
//!
//! # Entry Point
//!
//! ```
//! use igem_assembly::Catalog;
//!
//! let catalog = Catalog::from_toml_str(r#"
//! namespace = "https://github.com/Gonza10V"
//!
//! [[components]]
//! id = "j23101"
//! roles = ["SO:0000167"]
//! sequence = "tttacagctagctcagtcctaggtattatgctagc"
//!
//! [[components]]
//! id = "vector"
//! roles = ["SO:0000755"]
//! sequence = "aaaaggtctcaaaa"
//!
//! [[components.features]]
//! ranges = [[1, 4], [11, 14]]
//!
//! [[constructs]]
//! id = "j23101_in_vector"
//! part = "j23101"
//! backbone = "vector"
//! "#)?;
//! let doc = catalog.build()?;
//! assert_eq!(doc.components().count(), 3);
//! # Ok::<(), igem_assembly::CatalogError>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod backbone;
pub mod catalog;
pub mod component;
pub mod error;
pub mod helpers;

pub use backbone::{part_in_backbone, PartInBackboneOptions};
pub use catalog::{Catalog, CatalogError, ComponentEntry, ConstructEntry, FeatureEntry, TermEntry};
pub use component::{dna_component_with_sequence, ComponentAttributes};
pub use error::AssemblyError;
pub use helpers::is_plasmid;
