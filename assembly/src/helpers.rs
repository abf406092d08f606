//! Role checks on components.

use igem_sbol::{ontology, Component, TermHierarchy};

/// Returns true if `component` has the plasmid-vector role (`SO:0000755`) or
/// a role that `hierarchy` places under it.
#[must_use]
pub fn is_plasmid(component: &Component, hierarchy: &TermHierarchy) -> bool {
    component
        .roles
        .iter()
        .any(|role| hierarchy.is_a(role, ontology::SO_PLASMID_VECTOR))
}
