//! Property tests: whatever the open-backbone ranges, the new sequence is the
//! part plus both regions, and every new location reads back what it claims.

use igem_assembly::{
    dna_component_with_sequence, part_in_backbone, AssemblyError, ComponentAttributes,
    PartInBackboneOptions,
};
use igem_sbol::identity::child_identity;
use igem_sbol::{Document, Feature, Location, SequenceFeature, SubComponent, Topology};
use proptest::prelude::*;

const NS: &str = "https://example.org/lab";

fn dna(len: std::ops::Range<usize>) -> impl Strategy<Value = String> {
    proptest::collection::vec(prop::sample::select(vec!['a', 'c', 'g', 't']), len)
        .prop_map(|chars| chars.into_iter().collect())
}

/// Backbone elements plus two non-overlapping ranges, the first before the second.
fn opened_backbone() -> impl Strategy<Value = (String, (usize, usize), (usize, usize))> {
    dna(4..80).prop_flat_map(|elements| {
        let len = elements.len();
        (Just(elements), 1..=len / 2)
            .prop_flat_map(move |(elements, split)| {
                (Just(elements), 1..=split, Just(split), split + 1..=len)
            })
            .prop_flat_map(move |(elements, s1, e1, s2)| {
                (Just(elements), Just((s1, e1)), Just(s2), s2..=len)
            })
            .prop_map(|(elements, r1, s2, e2)| (elements, r1, (s2, e2)))
    })
}

fn assemble(
    part: &str,
    backbone: &str,
    r1: (usize, usize),
    r2: (usize, usize),
    topology: Topology,
) -> Result<(Document, igem_sbol::Component, igem_sbol::Sequence), AssemblyError> {
    let mut doc = Document::with_namespace(NS);
    let (part_c, part_s) =
        dna_component_with_sequence(Some(NS), "part", part, ComponentAttributes::default())?;
    let (mut bb_c, bb_s) = dna_component_with_sequence(
        Some(NS),
        "backbone",
        backbone,
        ComponentAttributes {
            roles: vec!["SO:0000755".to_owned()],
            ..ComponentAttributes::default()
        },
    )?;
    let feature_id = child_identity(&bb_c.identity, "SequenceFeature", 1);
    let mut open = SequenceFeature::new(&feature_id);
    for (i, (start, end)) in [r1, r2].into_iter().enumerate() {
        open.locations.push(Location::range(
            child_identity(&feature_id, "Range", i + 1),
            &bb_s.identity,
            start,
            end,
        ));
    }
    bb_c.features.push(Feature::SequenceFeature(open));
    doc.add_all([part_s, bb_s])?;
    doc.add_all([part_c.clone(), bb_c.clone()])?;

    let options = PartInBackboneOptions::default().with_topology(topology);
    let (component, sequence) = part_in_backbone(&doc, "construct", &part_c, &bb_c, &options)?;
    Ok((doc, component, sequence))
}

fn sub(feature: &Feature) -> Option<&SubComponent> {
    match feature {
        Feature::SubComponent(sc) => Some(sc),
        Feature::SequenceFeature(_) => None,
    }
}

proptest! {
    #[test]
    fn locations_read_back_their_sources(
        part in dna(1..40),
        (backbone, r1, r2) in opened_backbone(),
        linear in any::<bool>(),
    ) {
        let topology = if linear { Topology::Linear } else { Topology::Circular };
        let (doc, component, sequence) = assemble(&part, &backbone, r1, r2, topology)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;

        let region1 = &backbone[r1.0 - 1..r1.1];
        let region2 = &backbone[r2.0 - 1..r2.1];
        prop_assert_eq!(sequence.len(), part.len() + region1.len() + region2.len());

        let subs: Vec<&SubComponent> = component.features.iter().filter_map(sub).collect();
        prop_assert_eq!(subs.len(), 2);

        // The part location covers exactly the part.
        let part_loc = &subs[0].locations[0];
        prop_assert_eq!(part_loc.slice(&sequence.elements), Some(part.as_str()));

        // Backbone locations, concatenated, equal the source regions in order.
        let placed: String = subs[1]
            .locations
            .iter()
            .filter_map(|l| l.slice(&sequence.elements))
            .collect();
        let backbone_seq = doc.lookup_sequence(&subs[1].source_locations[0].sequence)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        let sourced: String = subs[1]
            .source_locations
            .iter()
            .filter_map(|l| l.slice(&backbone_seq.elements))
            .collect();
        prop_assert_eq!(&placed, &sourced);
        prop_assert_eq!(placed.len() + part.len(), sequence.len());
    }
}
