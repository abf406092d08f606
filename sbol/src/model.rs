//! Core SBOL3 model types.
//!
//! Top-level objects ([`Component`], [`Sequence`]) live in a
//! [`Document`](crate::Document). Features and locations are owned by the
//! component that declares them. Cross references (a component's sequences,
//! a sub-component's `instanceOf`, a location's sequence) are identities and
//! are resolved through the document.

use std::fmt;
use std::str::FromStr;

use crate::error::SbolError;
use crate::identity::display_id_of;
use crate::ontology;

/// Topology of a DNA construct, recorded as a component type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Topology {
    /// `SO:0000987`: the construct has two free ends.
    Linear,
    /// `SO:0000988`: the construct is closed (a plasmid).
    #[default]
    Circular,
}

impl Topology {
    /// Returns the SO term IRI used in `sbol:type`.
    #[must_use]
    pub fn as_iri(self) -> &'static str {
        match self {
            Topology::Linear => ontology::SO_LINEAR,
            Topology::Circular => ontology::SO_CIRCULAR,
        }
    }

    /// Returns the lowercase name used in catalogs and on the command line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Topology::Linear => "linear",
            Topology::Circular => "circular",
        }
    }

    /// Maps a type IRI (in any spelling) back to a topology.
    #[must_use]
    pub fn from_iri(iri: &str) -> Option<Self> {
        if ontology::same_term(iri, ontology::SO_LINEAR) {
            Some(Topology::Linear)
        } else if ontology::same_term(iri, ontology::SO_CIRCULAR) {
            Some(Topology::Circular)
        } else {
            None
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Topology {
    type Err = SbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "linear" => Ok(Topology::Linear),
            "circular" => Ok(Topology::Circular),
            _ => Err(SbolError::UnknownTopology(s.to_owned())),
        }
    }
}

/// An SBOL3 `Sequence`: the primary structure of a component.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sequence {
    /// Full IRI.
    pub identity: String,
    /// Last segment of the identity.
    pub display_id: String,
    /// `sbol:hasNamespace`.
    pub namespace: String,
    /// Human-readable name.
    pub name: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Sequence elements, e.g. `"tttacagc..."`.
    pub elements: String,
    /// IRI of the encoding of `elements`.
    pub encoding: String,
}

impl Sequence {
    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the sequence has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// An SBOL3 `Component`: a part, a backbone, or a composite construct.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Component {
    /// Full IRI.
    pub identity: String,
    /// Last segment of the identity.
    pub display_id: String,
    /// `sbol:hasNamespace`.
    pub namespace: String,
    /// Human-readable name.
    pub name: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// `sbol:type` IRIs (molecule type, topology).
    pub types: Vec<String>,
    /// `sbol:role` IRIs.
    pub roles: Vec<String>,
    /// Identities of the `Sequence`s this component refers to.
    pub sequences: Vec<String>,
    /// Owned features, in declaration order.
    pub features: Vec<Feature>,
}

impl Component {
    /// Returns true if any role names the same term as `role`.
    #[must_use]
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| ontology::same_term(r, role))
    }

    /// Returns true if any type names the same term as `type_`.
    #[must_use]
    pub fn has_type(&self, type_: &str) -> bool {
        self.types.iter().any(|t| ontology::same_term(t, type_))
    }

    /// The first topology found among the component's types.
    #[must_use]
    pub fn topology(&self) -> Option<Topology> {
        self.types.iter().find_map(|t| Topology::from_iri(t))
    }

    /// The final feature, which for a backbone marks the open backbone.
    #[must_use]
    pub fn last_feature(&self) -> Option<&Feature> {
        self.features.last()
    }

    /// Looks up an owned feature by identity.
    #[must_use]
    pub fn find_feature(&self, identity: &str) -> Option<&Feature> {
        self.features.iter().find(|f| f.identity() == identity)
    }
}

/// A feature owned by a component.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind")
)]
pub enum Feature {
    /// A use of another component inside this one.
    SubComponent(SubComponent),
    /// A region of this component's own sequence.
    SequenceFeature(SequenceFeature),
}

impl Feature {
    /// Full IRI.
    #[must_use]
    pub fn identity(&self) -> &str {
        match self {
            Feature::SubComponent(f) => &f.identity,
            Feature::SequenceFeature(f) => &f.identity,
        }
    }

    /// Last segment of the identity.
    #[must_use]
    pub fn display_id(&self) -> &str {
        match self {
            Feature::SubComponent(f) => &f.display_id,
            Feature::SequenceFeature(f) => &f.display_id,
        }
    }

    /// `sbol:role` IRIs.
    #[must_use]
    pub fn roles(&self) -> &[String] {
        match self {
            Feature::SubComponent(f) => &f.roles,
            Feature::SequenceFeature(f) => &f.roles,
        }
    }

    /// Locations on the owning component's sequences.
    #[must_use]
    pub fn locations(&self) -> &[Location] {
        match self {
            Feature::SubComponent(f) => &f.locations,
            Feature::SequenceFeature(f) => &f.locations,
        }
    }

    /// SBOL3 class name, also used to name owned children.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Feature::SubComponent(_) => "SubComponent",
            Feature::SequenceFeature(_) => "SequenceFeature",
        }
    }
}

/// An SBOL3 `SubComponent`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubComponent {
    /// Full IRI (child of the owning component).
    pub identity: String,
    /// Last segment of the identity.
    pub display_id: String,
    /// Human-readable name.
    pub name: Option<String>,
    /// `sbol:role` IRIs.
    pub roles: Vec<String>,
    /// `sbol:roleIntegration`: how `roles` combine with the instance's roles.
    pub role_integration: Option<String>,
    /// Identity of the component being used.
    pub instance_of: String,
    /// Where the instance sits on the owning component's sequence.
    pub locations: Vec<Location>,
    /// Which part of the instance's sequence is used.
    pub source_locations: Vec<Location>,
}

impl SubComponent {
    /// Creates a sub-component with no roles or locations.
    #[must_use]
    pub fn new(identity: impl Into<String>, instance_of: impl Into<String>) -> Self {
        let identity = identity.into();
        Self {
            display_id: display_id_of(&identity).to_owned(),
            identity,
            name: None,
            roles: Vec::new(),
            role_integration: None,
            instance_of: instance_of.into(),
            locations: Vec::new(),
            source_locations: Vec::new(),
        }
    }
}

/// An SBOL3 `SequenceFeature`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SequenceFeature {
    /// Full IRI (child of the owning component).
    pub identity: String,
    /// Last segment of the identity.
    pub display_id: String,
    /// Human-readable name.
    pub name: Option<String>,
    /// `sbol:role` IRIs.
    pub roles: Vec<String>,
    /// Locations on the owning component's sequences.
    pub locations: Vec<Location>,
}

impl SequenceFeature {
    /// Creates a sequence feature with no roles or locations.
    #[must_use]
    pub fn new(identity: impl Into<String>) -> Self {
        let identity = identity.into();
        Self {
            display_id: display_id_of(&identity).to_owned(),
            identity,
            name: None,
            roles: Vec::new(),
            locations: Vec::new(),
        }
    }
}

/// The shape of a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type")
)]
pub enum LocationKind {
    /// 1-based inclusive interval.
    Range {
        /// First element, counted from 1.
        start: usize,
        /// Last element, inclusive.
        end: usize,
    },
    /// A point between two elements; `at = 0` is before the first element.
    Cut {
        /// Number of elements before the cut.
        at: usize,
    },
    /// The whole sequence.
    EntireSequence,
}

/// An SBOL3 `Location` on a sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    /// Full IRI (child of the owning feature).
    pub identity: String,
    /// Last segment of the identity.
    pub display_id: String,
    /// Identity of the `Sequence` this location is on.
    pub sequence: String,
    /// `sbol:orientation`, if stated.
    pub orientation: Option<String>,
    /// Range, cut, or entire sequence.
    pub kind: LocationKind,
}

impl Location {
    /// Creates a `Range` location.
    #[must_use]
    pub fn range(
        identity: impl Into<String>,
        sequence: impl Into<String>,
        start: usize,
        end: usize,
    ) -> Self {
        Self::new(identity, sequence, LocationKind::Range { start, end })
    }

    /// Creates a location of any kind.
    #[must_use]
    pub fn new(identity: impl Into<String>, sequence: impl Into<String>, kind: LocationKind) -> Self {
        let identity = identity.into();
        Self {
            display_id: display_id_of(&identity).to_owned(),
            identity,
            sequence: sequence.into(),
            orientation: None,
            kind,
        }
    }

    /// SBOL3 class name, also used to name owned children.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self.kind {
            LocationKind::Range { .. } => "Range",
            LocationKind::Cut { .. } => "Cut",
            LocationKind::EntireSequence => "EntireSequence",
        }
    }

    /// `(start, end)` if this is a `Range`.
    #[must_use]
    pub fn as_range(&self) -> Option<(usize, usize)> {
        match self.kind {
            LocationKind::Range { start, end } => Some((start, end)),
            _ => None,
        }
    }

    /// Number of elements covered, or `None` for `EntireSequence`, whose
    /// length depends on the sequence. An inverted range covers nothing.
    #[must_use]
    pub fn len(&self) -> Option<usize> {
        match self.kind {
            LocationKind::Range { start, end } => {
                Some(end.checked_sub(start).map_or(0, |d| d.saturating_add(1)))
            }
            LocationKind::Cut { .. } => Some(0),
            LocationKind::EntireSequence => None,
        }
    }

    /// True if the location is known to cover no elements.
    #[must_use]
    pub fn is_empty(&self) -> Option<bool> {
        self.len().map(|n| n == 0)
    }

    /// Extracts the covered elements from `elements`, the elements of the
    /// sequence this location is on. Returns `None` if the location does not
    /// fit the sequence. A cut covers no elements.
    #[must_use]
    pub fn slice<'a>(&self, elements: &'a str) -> Option<&'a str> {
        match self.kind {
            LocationKind::Range { start, end } if start >= 1 && start <= end => {
                elements.get(start - 1..end)
            }
            LocationKind::Range { .. } => None,
            LocationKind::Cut { at } => (at <= elements.len()).then_some(""),
            LocationKind::EntireSequence => Some(elements),
        }
    }
}

/// A top-level object stored in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind")
)]
pub enum TopLevel {
    /// A component.
    Component(Component),
    /// A sequence.
    Sequence(Sequence),
}

impl TopLevel {
    /// Full IRI.
    #[must_use]
    pub fn identity(&self) -> &str {
        match self {
            TopLevel::Component(c) => &c.identity,
            TopLevel::Sequence(s) => &s.identity,
        }
    }

    /// Last segment of the identity.
    #[must_use]
    pub fn display_id(&self) -> &str {
        match self {
            TopLevel::Component(c) => &c.display_id,
            TopLevel::Sequence(s) => &s.display_id,
        }
    }

    /// `sbol:hasNamespace`.
    #[must_use]
    pub fn namespace(&self) -> &str {
        match self {
            TopLevel::Component(c) => &c.namespace,
            TopLevel::Sequence(s) => &s.namespace,
        }
    }

    /// SBOL3 class name.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            TopLevel::Component(_) => "Component",
            TopLevel::Sequence(_) => "Sequence",
        }
    }
}

impl From<Component> for TopLevel {
    fn from(component: Component) -> Self {
        TopLevel::Component(component)
    }
}

impl From<Sequence> for TopLevel {
    fn from(sequence: Sequence) -> Self {
        TopLevel::Sequence(sequence)
    }
}
