//! TOML parts catalogs.
//!
//! A catalog names a namespace, the parts and backbones available under it,
//! and the constructs to assemble from them:
//!
//! ```toml
//! namespace = "https://github.com/Gonza10V"
//!
//! [[components]]
//! id = "j23101"
//! roles = ["SO:0000167"]
//! sequence = "tttacagctagctcagtcctaggtattatgctagc"
//!
//! [[components]]
//! id = "podd_backbone"
//! roles = ["SO:0000755"]
//! sequence = "..."
//!
//! [[components.features]]
//! id = "open_backbone"
//! ranges = [[1, 20], [41, 120]]
//!
//! [[constructs]]
//! id = "j23101_in_podd"
//! part = "j23101"
//! backbone = "podd_backbone"
//! topology = "circular"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use igem_sbol::identity::{child_identity, display_id_of, is_valid_display_id, make_identity};
use igem_sbol::{
    Component, Document, Feature, Location, SbolError, Sequence, SequenceFeature,
    TermHierarchy, Topology,
};

use crate::backbone::{part_in_backbone, PartInBackboneOptions};
use crate::component::{dna_component_with_sequence, expand_terms, ComponentAttributes};
use crate::error::AssemblyError;

/// Failures loading a catalog or building from it.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog {}", path.display())]
    Io {
        /// Catalog path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The catalog is not valid TOML or does not match the schema.
    #[error("invalid catalog: {0}")]
    Parse(#[from] toml::de::Error),

    /// A feature id is not a valid display id.
    #[error("component '{component}' has a feature with invalid id '{id}'")]
    InvalidFeatureId {
        /// Owning component id.
        component: String,
        /// Offending feature id.
        id: String,
    },

    /// Two features of one component end up with the same identity.
    #[error("component '{component}' has more than one feature with id '{id}'")]
    DuplicateFeatureId {
        /// Owning component id.
        component: String,
        /// Repeated feature id.
        id: String,
    },

    /// A construct names a part or backbone that is not in the catalog.
    #[error("construct '{construct}' names unknown {slot} '{id}'")]
    UnknownComponent {
        /// Construct id.
        construct: String,
        /// `"part"` or `"backbone"`.
        slot: &'static str,
        /// The missing component id.
        id: String,
    },

    /// A construct failed to assemble.
    #[error("construct '{construct}' could not be assembled: {source}")]
    Assembly {
        /// Construct id.
        construct: String,
        /// Why.
        #[source]
        source: AssemblyError,
    },

    /// An identity could not be built or an object could not be stored.
    #[error(transparent)]
    Sbol(#[from] SbolError),
}

/// A parts catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
    /// Namespace for every identity in the catalog.
    pub namespace: String,
    /// Ontology terms that extend the built-in Sequence Ontology subset.
    #[serde(default)]
    pub terms: Vec<TermEntry>,
    /// Parts and backbones.
    #[serde(default)]
    pub components: Vec<ComponentEntry>,
    /// Constructs to assemble.
    #[serde(default)]
    pub constructs: Vec<ConstructEntry>,
}

/// An extra `is_a` declaration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TermEntry {
    /// Term CURIE or IRI.
    pub id: String,
    /// Direct parents, CURIEs or IRIs.
    pub parents: Vec<String>,
}

/// A part or backbone.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComponentEntry {
    /// Display id; the identity is `namespace/id`.
    pub id: String,
    /// Human-readable name.
    pub name: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Roles, CURIEs or IRIs.
    #[serde(default)]
    pub roles: Vec<String>,
    /// DNA sequence elements.
    pub sequence: String,
    /// Sequence features, in order. A backbone's last one is its open backbone.
    #[serde(default)]
    pub features: Vec<FeatureEntry>,
}

/// A sequence feature of a catalog component.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeatureEntry {
    /// Display id. Defaults to `SequenceFeature<n>`.
    pub id: Option<String>,
    /// Human-readable name.
    pub name: Option<String>,
    /// Roles, CURIEs or IRIs.
    #[serde(default)]
    pub roles: Vec<String>,
    /// 1-based inclusive `[start, end]` ranges on the component's sequence.
    pub ranges: Vec<[usize; 2]>,
}

/// A part-in-backbone construct.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConstructEntry {
    /// Display id of the new component.
    pub id: String,
    /// Id of the part component.
    pub part: String,
    /// Id of the backbone component.
    pub backbone: String,
    /// `"linear"` or `"circular"` (default).
    #[serde(default)]
    pub topology: Topology,
    /// Human-readable name.
    pub name: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Extra roles, CURIEs or IRIs.
    #[serde(default)]
    pub roles: Vec<String>,
}

impl Catalog {
    /// Parses a catalog from TOML.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] if the text is not a valid catalog.
    pub fn from_toml_str(s: &str) -> Result<Self, CatalogError> {
        Ok(toml::from_str(s)?)
    }

    /// Reads and parses a catalog file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file cannot be read and
    /// [`CatalogError::Parse`] if it is not a valid catalog.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// The built-in Sequence Ontology subset extended with the catalog's terms.
    #[must_use]
    pub fn hierarchy(&self) -> TermHierarchy {
        let mut hierarchy = TermHierarchy::sequence_ontology().clone();
        for term in &self.terms {
            hierarchy.insert(&term.id, term.parents.iter().map(String::as_str));
        }
        hierarchy
    }

    /// Builds a document holding every catalog component and its sequence.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Sbol`] for invalid or duplicate ids and roles
    /// that are not IRIs, [`CatalogError::InvalidFeatureId`] for invalid
    /// feature ids, and [`CatalogError::DuplicateFeatureId`] when two features
    /// of a component share an identity.
    pub fn build_document(&self) -> Result<Document, CatalogError> {
        let mut doc = Document::with_namespace(&self.namespace);
        for entry in &self.components {
            let (component, sequence) = entry.to_sbol(doc.namespace.as_deref())?;
            doc.add(sequence)?;
            doc.add(component)?;
        }
        tracing::debug!(
            namespace = %self.namespace,
            objects = doc.len(),
            "catalog components loaded"
        );
        Ok(doc)
    }

    /// Assembles one construct against a document built by
    /// [`Catalog::build_document`].
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownComponent`] if the part or backbone is
    /// not in `doc`, and [`CatalogError::Assembly`] if assembly fails.
    pub fn assemble(
        &self,
        doc: &Document,
        construct: &ConstructEntry,
        hierarchy: &TermHierarchy,
    ) -> Result<(Component, Sequence), CatalogError> {
        let resolve = |slot: &'static str, id: &str| {
            make_identity(doc.namespace.as_deref(), id)
                .ok()
                .and_then(|identity| doc.find_component(&identity))
                .ok_or_else(|| CatalogError::UnknownComponent {
                    construct: construct.id.clone(),
                    slot,
                    id: id.to_owned(),
                })
        };
        let part = resolve("part", &construct.part)?;
        let backbone = resolve("backbone", &construct.backbone)?;

        let options = PartInBackboneOptions::default()
            .with_topology(construct.topology)
            .with_attributes(ComponentAttributes {
                name: construct.name.clone(),
                description: construct.description.clone(),
                roles: construct.roles.clone(),
            })
            .with_hierarchy(hierarchy);

        part_in_backbone(doc, &construct.id, part, backbone, &options).map_err(|source| {
            CatalogError::Assembly {
                construct: construct.id.clone(),
                source,
            }
        })
    }

    /// Builds the catalog document and adds every assembled construct to it.
    ///
    /// # Errors
    ///
    /// Returns the first error from [`Catalog::build_document`] or
    /// [`Catalog::assemble`], or [`CatalogError::Sbol`] if a construct id
    /// collides with an existing object.
    pub fn build(&self) -> Result<Document, CatalogError> {
        let mut doc = self.build_document()?;
        let hierarchy = self.hierarchy();
        for construct in &self.constructs {
            let (component, sequence) = self.assemble(&doc, construct, &hierarchy)?;
            tracing::info!(
                construct = %construct.id,
                topology = %construct.topology,
                length = sequence.len(),
                "construct assembled"
            );
            doc.add(sequence)?;
            doc.add(component)?;
        }
        Ok(doc)
    }
}

impl ComponentEntry {
    fn to_sbol(&self, namespace: Option<&str>) -> Result<(Component, Sequence), CatalogError> {
        let (mut component, sequence) = dna_component_with_sequence(
            namespace,
            &self.id,
            &self.sequence,
            ComponentAttributes {
                name: self.name.clone(),
                description: self.description.clone(),
                roles: self.roles.clone(),
            },
        )?;

        for (i, entry) in self.features.iter().enumerate() {
            let feature_id = match &entry.id {
                Some(id) if is_valid_display_id(id) => format!("{}/{}", component.identity, id),
                Some(id) => {
                    return Err(CatalogError::InvalidFeatureId {
                        component: self.id.clone(),
                        id: id.clone(),
                    })
                }
                None => child_identity(&component.identity, "SequenceFeature", i + 1),
            };
            if component.find_feature(&feature_id).is_some() {
                return Err(CatalogError::DuplicateFeatureId {
                    component: self.id.clone(),
                    id: display_id_of(&feature_id).to_owned(),
                });
            }
            let mut feature = SequenceFeature::new(&feature_id);
            feature.name = entry.name.clone();
            feature.roles = expand_terms(&entry.roles)?;
            for (j, [start, end]) in entry.ranges.iter().enumerate() {
                feature.locations.push(Location::range(
                    child_identity(&feature_id, "Range", j + 1),
                    &sequence.identity,
                    *start,
                    *end,
                ));
            }
            component.features.push(Feature::SequenceFeature(feature));
        }

        Ok((component, sequence))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"
namespace = "https://github.com/Gonza10V"

[[terms]]
id = "https://example.org/terms/odd_vector"
parents = ["SO:0000755"]

[[components]]
id = "insert"
roles = ["SO:0000167"]
sequence = "GG"

[[components]]
id = "bb"
roles = ["https://example.org/terms/odd_vector"]
sequence = "aaaaCCCCtttt"

[[components.features]]
id = "open_backbone"
ranges = [[1, 4], [9, 12]]

[[constructs]]
id = "insert_in_bb"
part = "insert"
backbone = "bb"
topology = "linear"
name = "insert in bb"
"#;

    #[test]
    fn parses_sections() -> Result<(), CatalogError> {
        let catalog = Catalog::from_toml_str(CATALOG)?;
        assert_eq!(catalog.components.len(), 2);
        assert_eq!(catalog.components[1].features[0].ranges, [[1, 4], [9, 12]]);
        assert_eq!(catalog.constructs[0].topology, Topology::Linear);
        Ok(())
    }

    #[test]
    fn features_become_sequence_features_with_ranges() -> Result<(), CatalogError> {
        let doc = Catalog::from_toml_str(CATALOG)?.build_document()?;
        let bb = doc.lookup_component("https://github.com/Gonza10V/bb")?;
        let open = bb.last_feature().map(Feature::identity);
        assert_eq!(open, Some("https://github.com/Gonza10V/bb/open_backbone"));
        let locations = bb.features[0].locations();
        assert_eq!(
            locations[1].identity,
            "https://github.com/Gonza10V/bb/open_backbone/Range2"
        );
        assert_eq!(locations[1].sequence, "https://github.com/Gonza10V/bb_seq");
        Ok(())
    }

    #[test]
    fn build_assembles_constructs_with_catalog_terms() -> Result<(), CatalogError> {
        let doc = Catalog::from_toml_str(CATALOG)?.build()?;
        let seq = doc.lookup_sequence("https://github.com/Gonza10V/insert_in_bb_seq")?;
        assert_eq!(seq.elements, "aaaaGGtttt");
        let construct = doc.lookup_component("https://github.com/Gonza10V/insert_in_bb")?;
        assert_eq!(construct.name.as_deref(), Some("insert in bb"));
        assert_eq!(doc.len(), 6);
        Ok(())
    }

    #[test]
    fn unknown_part_is_named() -> Result<(), CatalogError> {
        let text = CATALOG.replace("part = \"insert\"", "part = \"missing\"");
        let result = Catalog::from_toml_str(&text)?.build();
        assert!(matches!(
            result,
            Err(CatalogError::UnknownComponent { slot: "part", ref id, .. }) if id == "missing"
        ));
        Ok(())
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let text = CATALOG.replace("topology = \"linear\"", "topology = \"linear\"\nlinear = true");
        assert!(matches!(Catalog::from_toml_str(&text), Err(CatalogError::Parse(_))));
    }

    #[test]
    fn bad_feature_id_is_rejected() -> Result<(), CatalogError> {
        let text = CATALOG.replace("id = \"open_backbone\"", "id = \"open-backbone\"");
        let result = Catalog::from_toml_str(&text)?.build_document();
        assert!(matches!(result, Err(CatalogError::InvalidFeatureId { .. })));
        Ok(())
    }

    #[test]
    fn repeated_feature_id_is_rejected() -> Result<(), CatalogError> {
        let text = CATALOG.replace(
            "[[components.features]]\nid = \"open_backbone\"",
            "[[components.features]]\nid = \"open_backbone\"\nranges = [[5, 8]]\n\n\
             [[components.features]]\nid = \"open_backbone\"",
        );
        let result = Catalog::from_toml_str(&text)?.build_document();
        assert!(matches!(
            result,
            Err(CatalogError::DuplicateFeatureId { ref component, ref id })
                if component == "bb" && id == "open_backbone"
        ));
        Ok(())
    }

    #[test]
    fn explicit_id_may_not_take_an_automatic_name() -> Result<(), CatalogError> {
        let text = CATALOG.replace(
            "[[components.features]]\nid = \"open_backbone\"",
            "[[components.features]]\nid = \"SequenceFeature2\"\nranges = [[5, 8]]\n\n\
             [[components.features]]",
        );
        let result = Catalog::from_toml_str(&text)?.build_document();
        assert!(matches!(
            result,
            Err(CatalogError::DuplicateFeatureId { ref id, .. }) if id == "SequenceFeature2"
        ));
        Ok(())
    }

    #[test]
    fn roles_that_are_not_iris_are_rejected() -> Result<(), CatalogError> {
        let text = CATALOG.replace("roles = [\"SO:0000167\"]", "roles = [\"my role\"]");
        let result = Catalog::from_toml_str(&text)?.build_document();
        assert!(matches!(
            result,
            Err(CatalogError::Sbol(SbolError::InvalidIri(ref term))) if term == "my role"
        ));

        let text = CATALOG.replace(
            "id = \"open_backbone\"",
            "id = \"open_backbone\"\nroles = [\"bad role\"]",
        );
        let result = Catalog::from_toml_str(&text)?.build_document();
        assert!(matches!(result, Err(CatalogError::Sbol(SbolError::InvalidIri(_)))));
        Ok(())
    }
}
