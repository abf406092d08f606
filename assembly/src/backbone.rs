//! Placing a part in an opened backbone.
//!
//! A backbone's last feature is its *open backbone*: two ranges on the
//! backbone sequence that remain once the vector is cut open. The part is
//! spliced between them.
//!
//! ```text
//! backbone   [==== r1 ====]xxxxxxxx[==== r2 ====]
//! linear     [==== r1 ====][ part ][==== r2 ====]
//! circular   [ part ][==== r2 ====][==== r1 ====]   (closed after r1)
//! ```

use igem_sbol::identity::child_identity;
use igem_sbol::{
    ontology, Component, Document, Feature, Location, Sequence, SubComponent, TermHierarchy,
    Topology,
};

use crate::component::{dna_component_with_sequence, ComponentAttributes};
use crate::error::AssemblyError;
use crate::helpers::is_plasmid;

/// How to build the part-in-backbone construct.
#[derive(Debug, Clone)]
pub struct PartInBackboneOptions<'h> {
    /// Topology of the result. Defaults to circular.
    pub topology: Topology,
    /// Name, description, and extra roles of the new component.
    pub attributes: ComponentAttributes,
    /// Hierarchy used to recognise plasmid-vector roles.
    pub hierarchy: &'h TermHierarchy,
}

impl Default for PartInBackboneOptions<'static> {
    fn default() -> Self {
        Self {
            topology: Topology::Circular,
            attributes: ComponentAttributes::default(),
            hierarchy: TermHierarchy::sequence_ontology(),
        }
    }
}

impl<'h> PartInBackboneOptions<'h> {
    /// Sets the topology.
    #[must_use]
    pub fn with_topology(mut self, topology: Topology) -> Self {
        self.topology = topology;
        self
    }

    /// Sets the attributes of the new component.
    #[must_use]
    pub fn with_attributes(mut self, attributes: ComponentAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Uses `hierarchy` for the plasmid-vector check.
    #[must_use]
    pub fn with_hierarchy<'a>(self, hierarchy: &'a TermHierarchy) -> PartInBackboneOptions<'a> {
        PartInBackboneOptions {
            topology: self.topology,
            attributes: self.attributes,
            hierarchy,
        }
    }
}

/// An open-backbone region: its source range and the elements it covers.
struct Region<'a> {
    start: usize,
    end: usize,
    elements: &'a str,
}

/// Creates a part-in-backbone component and its sequence.
///
/// `part` and `backbone` reference their sequences by identity; both are
/// resolved in `doc`. The result is not added to `doc`. Its identity is
/// built from `identity` and the document namespace, and the sequence
/// identity carries the suffix `_seq`.
///
/// The new component gets the plasmid-vector role, the topology type, and
/// two sub-components:
/// - the part (`SubComponent1`): role engineered insert, roles merged with
///   the part's, one range on the new sequence;
/// - the backbone (`SubComponent2`): ranges on the new sequence for each
///   backbone-derived stretch, and source ranges on the backbone sequence
///   for the open-backbone regions in the order they appear.
///
/// # Errors
///
/// Checked in order: [`AssemblyError::NotAPlasmid`],
/// [`AssemblyError::BackboneSequenceCount`],
/// [`AssemblyError::PartSequenceCount`],
/// [`AssemblyError::MissingOpenBackbone`],
/// [`AssemblyError::OpenBackboneLocations`]. Then unresolved sequences
/// ([`AssemblyError::Sbol`]), non-range, off-sequence or out-of-bounds
/// open-backbone locations, and an empty part sequence.
pub fn part_in_backbone(
    doc: &Document,
    identity: &str,
    part: &Component,
    backbone: &Component,
    options: &PartInBackboneOptions<'_>,
) -> Result<(Component, Sequence), AssemblyError> {
    if !is_plasmid(backbone, options.hierarchy) {
        return Err(AssemblyError::NotAPlasmid {
            backbone: backbone.identity.clone(),
        });
    }
    let [backbone_sequence] = backbone.sequences.as_slice() else {
        return Err(AssemblyError::BackboneSequenceCount {
            found: backbone.sequences.len(),
        });
    };
    let [part_sequence] = part.sequences.as_slice() else {
        return Err(AssemblyError::PartSequenceCount {
            found: part.sequences.len(),
        });
    };
    let open_backbone = backbone
        .last_feature()
        .ok_or_else(|| AssemblyError::MissingOpenBackbone {
            backbone: backbone.identity.clone(),
        })?;
    let [first, second] = open_backbone.locations() else {
        return Err(AssemblyError::OpenBackboneLocations {
            found: open_backbone.locations().len(),
        });
    };

    let backbone_sequence = doc.lookup_sequence(backbone_sequence)?;
    let part_sequence = doc.lookup_sequence(part_sequence)?;
    let r1 = open_region(first, backbone_sequence)?;
    let r2 = open_region(second, backbone_sequence)?;
    let insert = part_sequence.elements.as_str();
    if insert.is_empty() {
        return Err(AssemblyError::EmptyPart {
            sequence: part_sequence.identity.clone(),
        });
    }

    // Spans are 1-based inclusive on the new sequence.
    let (elements, part_span, backbone_spans, sources) = match options.topology {
        Topology::Linear => {
            let part_start = r1.elements.len() + 1;
            let part_end = r1.elements.len() + insert.len();
            let elements = format!("{}{}{}", r1.elements, insert, r2.elements);
            let total = elements.len();
            (
                elements,
                (part_start, part_end),
                vec![(1, r1.elements.len()), (part_end + 1, total)],
                [r1, r2],
            )
        }
        Topology::Circular => {
            let elements = format!("{}{}{}", insert, r2.elements, r1.elements);
            let total = elements.len();
            (
                elements,
                (1, insert.len()),
                vec![(insert.len() + 1, total)],
                [r2, r1],
            )
        }
    };

    let (mut component, sequence) = dna_component_with_sequence(
        doc.namespace.as_deref(),
        identity,
        &elements,
        options.attributes.clone(),
    )?;
    if !component.has_role(ontology::SO_PLASMID_VECTOR) {
        component.roles.push(ontology::SO_PLASMID_VECTOR.to_owned());
    }

    let part_id = child_identity(&component.identity, "SubComponent", 1);
    let mut part_sub = SubComponent::new(&part_id, &part.identity);
    part_sub.roles.push(ontology::SO_ENGINEERED_INSERT.to_owned());
    part_sub.role_integration = Some(ontology::SBOL_MERGE_ROLES.to_owned());
    part_sub.locations.push(Location::range(
        child_identity(&part_id, "Range", 1),
        &sequence.identity,
        part_span.0,
        part_span.1,
    ));

    let backbone_id = child_identity(&component.identity, "SubComponent", 2);
    let mut backbone_sub = SubComponent::new(&backbone_id, &backbone.identity);
    let mut ranges = 0;
    let mut next_range = || {
        ranges += 1;
        child_identity(&backbone_id, "Range", ranges)
    };
    for (start, end) in backbone_spans {
        backbone_sub
            .locations
            .push(Location::range(next_range(), &sequence.identity, start, end));
    }
    for region in &sources {
        backbone_sub.source_locations.push(Location::range(
            next_range(),
            &backbone_sequence.identity,
            region.start,
            region.end,
        ));
    }

    component.features.push(Feature::SubComponent(part_sub));
    component.features.push(Feature::SubComponent(backbone_sub));
    component.types.push(options.topology.as_iri().to_owned());

    tracing::debug!(
        identity = %component.identity,
        part = %part.identity,
        backbone = %backbone.identity,
        topology = %options.topology,
        length = sequence.len(),
        "assembled part in backbone"
    );

    Ok((component, sequence))
}

fn open_region<'a>(location: &Location, sequence: &'a Sequence) -> Result<Region<'a>, AssemblyError> {
    let (start, end) = location
        .as_range()
        .ok_or_else(|| AssemblyError::OpenBackboneNotRange {
            location: location.identity.clone(),
            kind: location.type_name(),
        })?;
    if location.sequence != sequence.identity {
        return Err(AssemblyError::OpenBackboneOffSequence {
            location: location.identity.clone(),
            sequence: location.sequence.clone(),
            backbone_sequence: sequence.identity.clone(),
        });
    }
    let elements = location
        .slice(&sequence.elements)
        .ok_or_else(|| AssemblyError::LocationOutOfBounds {
            location: location.identity.clone(),
            start,
            end,
            sequence: sequence.identity.clone(),
            length: sequence.len(),
        })?;
    Ok(Region {
        start,
        end,
        elements,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use igem_sbol::{LocationKind, SequenceFeature};

    const NS: &str = "https://github.com/Gonza10V";

    /// Backbone `aaaaCCCCtttt` opened to keep `aaaa` (1..4) and `tttt` (9..12).
    fn fixture() -> (Document, Component, Component) {
        let mut doc = Document::with_namespace(NS);
        let (part, part_seq) = dna_component_with_sequence(
            Some(NS),
            "insert",
            "GG",
            ComponentAttributes::default(),
        )
        .unwrap_or_else(|e| unreachable!("{e}"));
        let (mut backbone, backbone_seq) = dna_component_with_sequence(
            Some(NS),
            "bb",
            "aaaaCCCCtttt",
            ComponentAttributes {
                roles: vec!["SO:0000755".to_owned()],
                ..ComponentAttributes::default()
            },
        )
        .unwrap_or_else(|e| unreachable!("{e}"));
        let feature_id = child_identity(&backbone.identity, "SequenceFeature", 1);
        let mut open = SequenceFeature::new(&feature_id);
        open.locations.push(Location::range(
            child_identity(&feature_id, "Range", 1),
            &backbone_seq.identity,
            1,
            4,
        ));
        open.locations.push(Location::range(
            child_identity(&feature_id, "Range", 2),
            &backbone_seq.identity,
            9,
            12,
        ));
        backbone.features.push(Feature::SequenceFeature(open));
        assert!(doc
            .add_all([part_seq, backbone_seq])
            .and_then(|()| doc.add_all([part.clone(), backbone.clone()]))
            .is_ok());
        (doc, part, backbone)
    }

    fn sub(component: &Component, index: usize) -> &SubComponent {
        match &component.features[index] {
            Feature::SubComponent(sc) => sc,
            Feature::SequenceFeature(_) => unreachable!("expected a SubComponent"),
        }
    }

    #[test]
    fn circular_puts_part_first() -> Result<(), AssemblyError> {
        let (doc, part, backbone) = fixture();
        let (component, sequence) =
            part_in_backbone(&doc, "c", &part, &backbone, &PartInBackboneOptions::default())?;

        assert_eq!(sequence.elements, "GGttttaaaa");
        assert_eq!(sequence.identity, format!("{NS}/c_seq"));
        assert_eq!(component.topology(), Some(Topology::Circular));
        assert!(component.has_role(ontology::SO_PLASMID_VECTOR));

        let part_sub = sub(&component, 0);
        assert_eq!(part_sub.identity, format!("{NS}/c/SubComponent1"));
        assert_eq!(part_sub.instance_of, part.identity);
        assert_eq!(part_sub.roles, [ontology::SO_ENGINEERED_INSERT]);
        assert_eq!(part_sub.role_integration.as_deref(), Some(ontology::SBOL_MERGE_ROLES));
        assert_eq!(part_sub.locations[0].as_range(), Some((1, 2)));

        let backbone_sub = sub(&component, 1);
        assert_eq!(backbone_sub.instance_of, backbone.identity);
        let spans: Vec<_> = backbone_sub.locations.iter().filter_map(Location::as_range).collect();
        assert_eq!(spans, [(3, 10)]);
        let sources: Vec<_> = backbone_sub
            .source_locations
            .iter()
            .filter_map(Location::as_range)
            .collect();
        assert_eq!(sources, [(9, 12), (1, 4)]);
        assert!(backbone_sub
            .source_locations
            .iter()
            .all(|l| l.sequence == format!("{NS}/bb_seq")));
        Ok(())
    }

    #[test]
    fn linear_puts_part_between_regions() -> Result<(), AssemblyError> {
        let (doc, part, backbone) = fixture();
        let options = PartInBackboneOptions::default().with_topology(Topology::Linear);
        let (component, sequence) = part_in_backbone(&doc, "l", &part, &backbone, &options)?;

        assert_eq!(sequence.elements, "aaaaGGtttt");
        assert_eq!(component.topology(), Some(Topology::Linear));
        assert_eq!(sub(&component, 0).locations[0].as_range(), Some((5, 6)));
        let spans: Vec<_> = sub(&component, 1)
            .locations
            .iter()
            .filter_map(Location::as_range)
            .collect();
        assert_eq!(spans, [(1, 4), (7, 10)]);
        Ok(())
    }

    #[test]
    fn plasmid_vector_role_is_not_duplicated() -> Result<(), AssemblyError> {
        let (doc, part, backbone) = fixture();
        let options = PartInBackboneOptions::default().with_attributes(ComponentAttributes {
            roles: vec!["SO:0000755".to_owned()],
            ..ComponentAttributes::default()
        });
        let (component, _) = part_in_backbone(&doc, "c", &part, &backbone, &options)?;
        assert_eq!(component.roles, [ontology::SO_PLASMID_VECTOR]);
        Ok(())
    }

    #[test]
    fn backbone_without_plasmid_role_is_rejected() {
        let (doc, part, mut backbone) = fixture();
        backbone.roles.clear();
        let result = part_in_backbone(&doc, "c", &part, &backbone, &PartInBackboneOptions::default());
        assert_eq!(
            result,
            Err(AssemblyError::NotAPlasmid {
                backbone: format!("{NS}/bb")
            })
        );
    }

    #[test]
    fn sequence_counts_are_checked_backbone_first() {
        let (doc, mut part, mut backbone) = fixture();
        part.sequences.clear();
        backbone.sequences.push(format!("{NS}/insert_seq"));
        let options = PartInBackboneOptions::default();
        assert_eq!(
            part_in_backbone(&doc, "c", &part, &backbone, &options),
            Err(AssemblyError::BackboneSequenceCount { found: 2 })
        );
        backbone.sequences.pop();
        assert_eq!(
            part_in_backbone(&doc, "c", &part, &backbone, &options),
            Err(AssemblyError::PartSequenceCount { found: 0 })
        );
    }

    #[test]
    fn open_backbone_needs_two_locations() {
        let (doc, part, mut backbone) = fixture();
        if let Some(Feature::SequenceFeature(open)) = backbone.features.last_mut() {
            open.locations.pop();
        }
        assert_eq!(
            part_in_backbone(&doc, "c", &part, &backbone, &PartInBackboneOptions::default()),
            Err(AssemblyError::OpenBackboneLocations { found: 1 })
        );
        backbone.features.clear();
        assert!(matches!(
            part_in_backbone(&doc, "c", &part, &backbone, &PartInBackboneOptions::default()),
            Err(AssemblyError::MissingOpenBackbone { .. })
        ));
    }

    #[test]
    fn out_of_bounds_range_is_reported() {
        let (doc, part, mut backbone) = fixture();
        if let Some(Feature::SequenceFeature(open)) = backbone.features.last_mut() {
            open.locations[1].kind = LocationKind::Range { start: 9, end: 40 };
        }
        assert!(matches!(
            part_in_backbone(&doc, "c", &part, &backbone, &PartInBackboneOptions::default()),
            Err(AssemblyError::LocationOutOfBounds { end: 40, length: 12, .. })
        ));
    }

    #[test]
    fn open_backbone_locations_must_be_ranges() {
        for (shape, name) in [
            (LocationKind::Cut { at: 8 }, "Cut"),
            (LocationKind::EntireSequence, "EntireSequence"),
        ] {
            let (doc, part, mut backbone) = fixture();
            if let Some(Feature::SequenceFeature(open)) = backbone.features.last_mut() {
                open.locations[1].kind = shape;
            }
            assert_eq!(
                part_in_backbone(&doc, "c", &part, &backbone, &PartInBackboneOptions::default()),
                Err(AssemblyError::OpenBackboneNotRange {
                    location: format!("{NS}/bb/SequenceFeature1/Range2"),
                    kind: name,
                })
            );
        }
    }

    #[test]
    fn open_backbone_on_another_sequence_is_rejected() {
        let (doc, part, mut backbone) = fixture();
        if let Some(Feature::SequenceFeature(open)) = backbone.features.last_mut() {
            open.locations[0].sequence = format!("{NS}/insert_seq");
        }
        assert_eq!(
            part_in_backbone(&doc, "c", &part, &backbone, &PartInBackboneOptions::default()),
            Err(AssemblyError::OpenBackboneOffSequence {
                location: format!("{NS}/bb/SequenceFeature1/Range1"),
                sequence: format!("{NS}/insert_seq"),
                backbone_sequence: format!("{NS}/bb_seq"),
            })
        );
    }

    #[test]
    fn empty_part_is_rejected() {
        let (mut doc, _, backbone) = fixture();
        let (part, part_seq) =
            dna_component_with_sequence(Some(NS), "p", "", ComponentAttributes::default())
                .unwrap_or_else(|e| unreachable!("{e}"));
        assert!(doc.add(part_seq).is_ok());
        assert_eq!(
            part_in_backbone(&doc, "c", &part, &backbone, &PartInBackboneOptions::default()),
            Err(AssemblyError::EmptyPart {
                sequence: format!("{NS}/p_seq")
            })
        );
    }

    #[test]
    fn unresolved_sequence_is_reported() {
        let (_, part, backbone) = fixture();
        let empty = Document::with_namespace(NS);
        assert!(matches!(
            part_in_backbone(&empty, "c", &part, &backbone, &PartInBackboneOptions::default()),
            Err(AssemblyError::Sbol(igem_sbol::SbolError::UnresolvedReference { .. }))
        ));
    }
}
