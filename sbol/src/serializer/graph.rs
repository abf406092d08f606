//! Node model shared by the serializers.
//!
//! Each SBOL3 object (top-level or owned child) becomes one [`Node`]: an
//! identity, an SBOL3 class, and an ordered list of `sbol:` property values.
//! Nodes are listed top-level first, followed depth-first by their children.

use crate::model::{Component, Feature, Location, LocationKind, Sequence, TopLevel};
use crate::ontology::SBOL3;
use crate::Document;

/// The object position of a triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Object {
    /// An IRI reference.
    Iri(String),
    /// A plain string literal.
    Literal(String),
    /// An `xsd:integer` literal.
    Integer(usize),
}

/// One SBOL3 object as RDF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Subject IRI.
    pub identity: String,
    /// SBOL3 class local name (`"Component"`, `"Range"`, ...).
    pub class: &'static str,
    /// `(sbol: local name, value)` pairs in emission order.
    pub properties: Vec<(&'static str, Object)>,
}

impl Node {
    fn new(identity: &str, class: &'static str) -> Self {
        Self {
            identity: identity.to_owned(),
            class,
            properties: Vec::new(),
        }
    }

    fn iri(&mut self, property: &'static str, value: &str) {
        self.properties.push((property, Object::Iri(value.to_owned())));
    }

    fn iris<'a>(&mut self, property: &'static str, values: impl IntoIterator<Item = &'a String>) {
        for value in values {
            self.iri(property, value);
        }
    }

    fn literal(&mut self, property: &'static str, value: &str) {
        self.properties.push((property, Object::Literal(value.to_owned())));
    }

    fn optional(&mut self, property: &'static str, value: Option<&String>) {
        if let Some(value) = value {
            self.literal(property, value);
        }
    }

    fn integer(&mut self, property: &'static str, value: usize) {
        self.properties.push((property, Object::Integer(value)));
    }
}

/// Full IRI of an `sbol:` local name.
#[must_use]
pub fn sbol_iri(local: &str) -> String {
    format!("{SBOL3}{local}")
}

/// Returns every object in `doc` as a node.
#[must_use]
pub fn nodes(doc: &Document) -> Vec<Node> {
    let mut out = Vec::new();
    for object in doc.objects() {
        match object {
            TopLevel::Component(c) => component_nodes(c, &mut out),
            TopLevel::Sequence(s) => out.push(sequence_node(s)),
        }
    }
    out
}

fn sequence_node(sequence: &Sequence) -> Node {
    let mut node = Node::new(&sequence.identity, "Sequence");
    node.literal("displayId", &sequence.display_id);
    node.iri("hasNamespace", &sequence.namespace);
    node.optional("name", sequence.name.as_ref());
    node.optional("description", sequence.description.as_ref());
    node.literal("elements", &sequence.elements);
    node.iri("encoding", &sequence.encoding);
    node
}

fn component_nodes(component: &Component, out: &mut Vec<Node>) {
    let mut node = Node::new(&component.identity, "Component");
    node.literal("displayId", &component.display_id);
    node.iri("hasNamespace", &component.namespace);
    node.optional("name", component.name.as_ref());
    node.optional("description", component.description.as_ref());
    node.iris("type", &component.types);
    node.iris("role", &component.roles);
    node.iris("hasSequence", &component.sequences);
    for feature in &component.features {
        node.iri("hasFeature", feature.identity());
    }
    out.push(node);

    for feature in &component.features {
        feature_nodes(feature, out);
    }
}

fn feature_nodes(feature: &Feature, out: &mut Vec<Node>) {
    let mut node = Node::new(feature.identity(), feature.type_name());
    node.literal("displayId", feature.display_id());
    let (name, source_locations) = match feature {
        Feature::SubComponent(sc) => (sc.name.as_ref(), sc.source_locations.as_slice()),
        Feature::SequenceFeature(sf) => (sf.name.as_ref(), &[][..]),
    };
    node.optional("name", name);
    node.iris("role", feature.roles());
    if let Feature::SubComponent(sc) = feature {
        if let Some(integration) = &sc.role_integration {
            node.iri("roleIntegration", integration);
        }
        node.iri("instanceOf", &sc.instance_of);
    }
    for location in feature.locations() {
        node.iri("hasLocation", &location.identity);
    }
    for location in source_locations {
        node.iri("sourceLocation", &location.identity);
    }
    out.push(node);

    for location in feature.locations().iter().chain(source_locations) {
        out.push(location_node(location));
    }
}

fn location_node(location: &Location) -> Node {
    let mut node = Node::new(&location.identity, location.type_name());
    node.literal("displayId", &location.display_id);
    node.iri("hasSequence", &location.sequence);
    if let Some(orientation) = &location.orientation {
        node.iri("orientation", orientation);
    }
    match location.kind {
        LocationKind::Range { start, end } => {
            node.integer("start", start);
            node.integer("end", end);
        }
        LocationKind::Cut { at } => node.integer("at", at),
        LocationKind::EntireSequence => {}
    }
    node
}
