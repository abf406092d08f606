//! DNA components paired with their sequence.

use igem_sbol::identity::{display_id_of, make_identity, namespace_of};
use igem_sbol::{ontology, Component, SbolError, Sequence};

/// Optional attributes for a new component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentAttributes {
    /// Human-readable name.
    pub name: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Roles, as CURIEs or IRIs.
    pub roles: Vec<String>,
}

/// Creates a DNA component and the sequence it refers to.
///
/// The sequence identity is the component identity with the suffix `_seq`.
/// The component is typed `SBO:0000251` (DNA) and the sequence is encoded as
/// IUPAC nucleic acid. Roles given as CURIEs are expanded to identifiers.org
/// IRIs.
///
/// # Errors
///
/// Returns [`SbolError`] if `identity` is relative and `namespace` is `None`,
/// if its last segment is not a valid display id, or if a role is not an IRI
/// once expanded.
pub fn dna_component_with_sequence(
    namespace: Option<&str>,
    identity: &str,
    elements: &str,
    attributes: ComponentAttributes,
) -> Result<(Component, Sequence), SbolError> {
    let component_identity = make_identity(namespace, identity)?;
    let roles = expand_terms(&attributes.roles)?;
    let sequence_identity = format!("{component_identity}_seq");
    let has_namespace = namespace_of(&component_identity).to_owned();

    let sequence = Sequence {
        display_id: display_id_of(&sequence_identity).to_owned(),
        identity: sequence_identity.clone(),
        namespace: has_namespace.clone(),
        name: None,
        description: None,
        elements: elements.to_owned(),
        encoding: ontology::IUPAC_DNA_ENCODING.to_owned(),
    };

    let component = Component {
        display_id: display_id_of(&component_identity).to_owned(),
        identity: component_identity,
        namespace: has_namespace,
        name: attributes.name,
        description: attributes.description,
        types: vec![ontology::SBO_DNA.to_owned()],
        roles,
        sequences: vec![sequence_identity],
        features: Vec::new(),
    };

    Ok((component, sequence))
}

/// Expands CURIEs to IRIs and rejects terms that RDF cannot carry.
///
/// # Errors
///
/// Returns [`SbolError::InvalidIri`] for the first term that is not an IRI.
pub fn expand_terms(terms: &[String]) -> Result<Vec<String>, SbolError> {
    terms
        .iter()
        .map(|term| {
            let iri = ontology::expand(term);
            if ontology::is_iri(&iri) {
                Ok(iri)
            } else {
                Err(SbolError::InvalidIri(term.clone()))
            }
        })
        .collect()
}
