//! Assembly failure modes.

use igem_sbol::SbolError;

/// Why a part could not be placed in a backbone.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssemblyError {
    /// The backbone carries no plasmid-vector role (or descendant term).
    #[error("the backbone {backbone} has no valid plasmid vector or child role")]
    NotAPlasmid {
        /// Backbone identity.
        backbone: String,
    },

    /// The backbone must reference exactly one sequence.
    #[error("the backbone should have only one sequence, found {found} sequences")]
    BackboneSequenceCount {
        /// Number of sequences found.
        found: usize,
    },

    /// The part must reference exactly one sequence.
    #[error("the part should have only one sequence, found {found} sequences")]
    PartSequenceCount {
        /// Number of sequences found.
        found: usize,
    },

    /// The backbone has no features, so there is no open backbone.
    #[error("the backbone {backbone} has no features; its last feature should be the open backbone")]
    MissingOpenBackbone {
        /// Backbone identity.
        backbone: String,
    },

    /// The open backbone must have exactly two locations.
    #[error(
        "the backbone last feature should be the open backbone and should contain 2 locations, \
         found {found} locations"
    )]
    OpenBackboneLocations {
        /// Number of locations found.
        found: usize,
    },

    /// An open-backbone location is a cut or whole-sequence location.
    #[error("open backbone location {location} is a {kind}, expected a Range")]
    OpenBackboneNotRange {
        /// Location identity.
        location: String,
        /// SBOL3 class of the location.
        kind: &'static str,
    },

    /// An open-backbone location is on a sequence other than the backbone's.
    #[error("open backbone location {location} is on {sequence}, not the backbone sequence {backbone_sequence}")]
    OpenBackboneOffSequence {
        /// Location identity.
        location: String,
        /// Sequence the location refers to.
        sequence: String,
        /// The backbone's own sequence.
        backbone_sequence: String,
    },

    /// An open-backbone range does not fit the backbone sequence.
    #[error("location {location} ({start}..{end}) does not fit sequence {sequence} of length {length}")]
    LocationOutOfBounds {
        /// Location identity.
        location: String,
        /// Range start.
        start: usize,
        /// Range end.
        end: usize,
        /// Sequence identity.
        sequence: String,
        /// Sequence length.
        length: usize,
    },

    /// The part's sequence has no elements to insert.
    #[error("the part sequence {sequence} is empty")]
    EmptyPart {
        /// Sequence identity.
        sequence: String,
    },

    /// A reference did not resolve or an identity was malformed.
    #[error(transparent)]
    Sbol(#[from] SbolError),
}
