//! Ontology terms referenced by SBOL3 documents.
//!
//! SBOL3 types and roles are IRIs drawn from external ontologies: the
//! Sequence Ontology (SO), the Systems Biology Ontology (SBO), and EDAM.
//! This module holds the constants the crate emits, CURIE normalization, and
//! an `is_a` table used to answer questions such as "is this role a kind of
//! plasmid vector?".

use std::borrow::Cow;
use std::collections::{HashMap, HashSet};

/// SBOL3 namespace.
pub const SBOL3: &str = "http://sbols.org/v3#";
/// Resolver prefix used for SO/SBO/EDAM terms in SBOL3 documents.
pub const IDENTIFIERS_ORG: &str = "https://identifiers.org/";

/// `SBO:0000251` deoxyribonucleic acid.
pub const SBO_DNA: &str = "https://identifiers.org/SBO:0000251";
/// `SO:0000987` linear topology.
pub const SO_LINEAR: &str = "https://identifiers.org/SO:0000987";
/// `SO:0000988` circular topology.
pub const SO_CIRCULAR: &str = "https://identifiers.org/SO:0000988";
/// `SO:0000755` plasmid vector.
pub const SO_PLASMID_VECTOR: &str = "https://identifiers.org/SO:0000755";
/// `SO:0000915` engineered insert.
pub const SO_ENGINEERED_INSERT: &str = "https://identifiers.org/SO:0000915";
/// `SO:0000804` engineered region.
pub const SO_ENGINEERED_REGION: &str = "https://identifiers.org/SO:0000804";
/// `SO:0000167` promoter.
pub const SO_PROMOTER: &str = "https://identifiers.org/SO:0000167";

/// EDAM `format_1207`: IUPAC nucleic acid sequence.
pub const IUPAC_DNA_ENCODING: &str = "https://identifiers.org/edam:format_1207";

/// `sbol:mergeRoles` role integration.
pub const SBOL_MERGE_ROLES: &str = "http://sbols.org/v3#mergeRoles";
/// `sbol:overrideRoles` role integration.
pub const SBOL_OVERRIDE_ROLES: &str = "http://sbols.org/v3#overrideRoles";
/// `sbol:inline` orientation.
pub const SBOL_INLINE: &str = "http://sbols.org/v3#inline";
/// `sbol:reverseComplement` orientation.
pub const SBOL_REVERSE_COMPLEMENT: &str = "http://sbols.org/v3#reverseComplement";

const RESOLVER_PREFIXES: &[&str] = &["https://identifiers.org/", "http://identifiers.org/"];
const OBO_PREFIXES: &[&str] = &[
    "http://purl.obolibrary.org/obo/",
    "https://purl.obolibrary.org/obo/",
];

/// Returns the CURIE (`SO:0000755`) for a term written as an identifiers.org
/// IRI, an OBO PURL, or already as a CURIE. Returns `None` for any other IRI.
#[must_use]
pub fn curie(term: &str) -> Option<Cow<'_, str>> {
    for prefix in RESOLVER_PREFIXES {
        if let Some(rest) = term.strip_prefix(prefix) {
            return rest.contains(':').then_some(Cow::Borrowed(rest));
        }
    }
    for prefix in OBO_PREFIXES {
        if let Some(rest) = term.strip_prefix(prefix) {
            // OBO PURLs spell the separator as an underscore: SO_0000755.
            let (ns, local) = rest.split_once('_')?;
            return Some(Cow::Owned(format!("{ns}:{local}")));
        }
    }
    if !term.contains("://") && term.contains(':') {
        return Some(Cow::Borrowed(term));
    }
    None
}

/// Expands a CURIE to its identifiers.org IRI. Absolute IRIs pass through.
#[must_use]
pub fn expand(term: &str) -> String {
    if term.contains("://") {
        term.to_owned()
    } else {
        format!("{IDENTIFIERS_ORG}{term}")
    }
}

/// Returns true if `term` can be written as an RDF IRI: it has a scheme and
/// none of the characters excluded from `IRIREF` (spaces, controls,
/// `<>"{}|^` and backticks, backslash).
#[must_use]
pub fn is_iri(term: &str) -> bool {
    let Some((scheme, rest)) = term.split_once(':') else {
        return false;
    };
    let mut scheme_chars = scheme.chars();
    let scheme_ok = scheme_chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && scheme_chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    scheme_ok
        && !rest.is_empty()
        && !term
            .chars()
            .any(|c| c <= ' ' || matches!(c, '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\'))
}

/// Returns true if two term references name the same ontology term,
/// regardless of how each is spelled.
#[must_use]
pub fn same_term(a: &str, b: &str) -> bool {
    a == b || matches!((curie(a), curie(b)), (Some(x), Some(y)) if x == y)
}

fn normalize(term: &str) -> String {
    curie(term).map_or_else(|| term.to_owned(), Cow::into_owned)
}

/// A term in the built-in Sequence Ontology table.
#[derive(Debug, Clone, Copy)]
pub struct Term {
    /// CURIE (e.g., `"SO:0000755"`).
    pub id: &'static str,
    /// Ontology label.
    pub label: &'static str,
    /// CURIEs of the direct `is_a` parents.
    pub parents: &'static [&'static str],
}

/// The Sequence Ontology subset shipped with the crate: the replicon and
/// vector subtree, engineered regions, and the part roles used by iGEM
/// distribution parts.
pub const SEQUENCE_ONTOLOGY: &[Term] = &[
    Term { id: "SO:0000110", label: "sequence_feature", parents: &[] },
    Term { id: "SO:0000001", label: "region", parents: &["SO:0000110"] },
    Term { id: "SO:0001235", label: "replicon", parents: &["SO:0000001"] },
    Term { id: "SO:0000155", label: "plasmid", parents: &["SO:0001235"] },
    Term { id: "SO:0000440", label: "vector_replicon", parents: &["SO:0001235"] },
    Term { id: "SO:0000755", label: "plasmid_vector", parents: &["SO:0000440"] },
    Term { id: "SO:0000754", label: "lambda_vector", parents: &["SO:0000440"] },
    Term { id: "SO:0000804", label: "engineered_region", parents: &["SO:0000001"] },
    Term { id: "SO:0000637", label: "engineered_plasmid", parents: &["SO:0000155", "SO:0000804"] },
    Term { id: "SO:0000915", label: "engineered_insert", parents: &["SO:0000804"] },
    Term { id: "SO:0005836", label: "regulatory_region", parents: &["SO:0000001"] },
    Term { id: "SO:0000167", label: "promoter", parents: &["SO:0005836"] },
    Term { id: "SO:0000296", label: "origin_of_replication", parents: &["SO:0000001"] },
];

/// An `is_a` table over ontology terms, keyed by CURIE.
#[derive(Debug, Clone, Default)]
pub struct TermHierarchy {
    parents: HashMap<String, Vec<String>>,
}

impl TermHierarchy {
    /// Creates an empty hierarchy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the built-in Sequence Ontology subset ([`SEQUENCE_ONTOLOGY`]).
    #[must_use]
    pub fn sequence_ontology() -> &'static TermHierarchy {
        static SO: std::sync::OnceLock<TermHierarchy> = std::sync::OnceLock::new();
        SO.get_or_init(|| {
            let mut hierarchy = TermHierarchy::new();
            for term in SEQUENCE_ONTOLOGY {
                hierarchy.insert(term.id, term.parents.iter().copied());
            }
            hierarchy
        })
    }

    /// Declares `term` with the given direct parents. Parents accumulate
    /// across calls for the same term.
    pub fn insert<'a>(&mut self, term: &str, parents: impl IntoIterator<Item = &'a str>) {
        let entry = self.parents.entry(normalize(term)).or_default();
        for parent in parents {
            let parent = normalize(parent);
            if !entry.contains(&parent) {
                entry.push(parent);
            }
        }
    }

    /// Direct parents of `term`; empty if the term is unknown.
    #[must_use]
    pub fn parents(&self, term: &str) -> &[String] {
        self.parents
            .get(&normalize(term))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns true if `term` is `ancestor` or one of its descendants.
    #[must_use]
    pub fn is_a(&self, term: &str, ancestor: &str) -> bool {
        let target = normalize(ancestor);
        let mut stack = vec![normalize(term)];
        let mut seen = HashSet::new();
        while let Some(current) = stack.pop() {
            if current == target {
                return true;
            }
            if !seen.insert(current.clone()) {
                continue;
            }
            if let Some(parents) = self.parents.get(&current) {
                stack.extend(parents.iter().cloned());
            }
        }
        false
    }

    /// Number of declared terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// Returns true if no terms are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iri_check_rejects_what_rdf_cannot_write() {
        assert!(is_iri(SO_PLASMID_VECTOR));
        assert!(is_iri(&expand("SO:0000167")));
        assert!(is_iri("urn:uuid:1234"));
        assert!(!is_iri(&expand("my role")));
        assert!(!is_iri("https://example.org/a>b"));
        assert!(!is_iri("no_scheme"));
        assert!(!is_iri("1http://example.org"));
    }

    #[test]
    fn curie_accepts_every_spelling() {
        assert_eq!(curie(SO_PLASMID_VECTOR).as_deref(), Some("SO:0000755"));
        assert_eq!(
            curie("http://identifiers.org/SO:0000755").as_deref(),
            Some("SO:0000755")
        );
        assert_eq!(
            curie("http://purl.obolibrary.org/obo/SO_0000755").as_deref(),
            Some("SO:0000755")
        );
        assert_eq!(curie("SO:0000755").as_deref(), Some("SO:0000755"));
        assert_eq!(curie("https://example.org/role"), None);
    }

    #[test]
    fn expand_leaves_iris_alone() {
        assert_eq!(expand("SO:0000167"), SO_PROMOTER);
        assert_eq!(expand(SO_PROMOTER), SO_PROMOTER);
    }

    #[test]
    fn plasmid_vector_is_a_vector_replicon() {
        let so = TermHierarchy::sequence_ontology();
        assert!(so.is_a(SO_PLASMID_VECTOR, "SO:0000440"));
        assert!(so.is_a(SO_PLASMID_VECTOR, SO_PLASMID_VECTOR));
        assert!(!so.is_a("SO:0000155", SO_PLASMID_VECTOR));
        assert!(!so.is_a(SO_PROMOTER, SO_PLASMID_VECTOR));
    }

    #[test]
    fn table_terms_are_unique() {
        let mut ids = HashSet::new();
        for term in SEQUENCE_ONTOLOGY {
            assert!(ids.insert(term.id), "Duplicate term: {}", term.id);
        }
        assert_eq!(TermHierarchy::sequence_ontology().len(), SEQUENCE_ONTOLOGY.len());
    }

    #[test]
    fn extended_terms_inherit_through_new_edges() {
        let mut hierarchy = TermHierarchy::sequence_ontology().clone();
        hierarchy.insert("SO:9999999", ["http://purl.obolibrary.org/obo/SO_0000755"]);
        assert!(hierarchy.is_a("https://identifiers.org/SO:9999999", SO_PLASMID_VECTOR));
    }

    #[test]
    fn cycles_terminate() {
        let mut hierarchy = TermHierarchy::new();
        hierarchy.insert("X:1", ["X:2"]);
        hierarchy.insert("X:2", ["X:1"]);
        assert!(!hierarchy.is_a("X:1", "X:3"));
    }
}
