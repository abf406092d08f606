//! Errors raised by the SBOL3 model and document.

/// Failures building identities or storing objects in a [`Document`](crate::Document).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SbolError {
    /// A relative name was given with no namespace to resolve it against.
    #[error("cannot make an identity for '{0}': no namespace is set")]
    NoNamespace(String),

    /// The last segment of an identity is not a valid SBOL3 display id.
    #[error("invalid display id '{display_id}' in identity '{identity}'")]
    InvalidDisplayId {
        /// The offending identity.
        identity: String,
        /// Its last segment.
        display_id: String,
    },

    /// An object with the same identity is already in the document.
    #[error("duplicate identity: {0}")]
    DuplicateIdentity(String),

    /// A reference does not resolve to an object of the expected class.
    #[error("{reference} does not resolve to a {expected} in the document")]
    UnresolvedReference {
        /// The identity that was looked up.
        reference: String,
        /// SBOL3 class that was expected.
        expected: &'static str,
    },

    /// A type or role that cannot be written as an IRI.
    #[error("'{0}' is not a valid IRI")]
    InvalidIri(String),

    /// A topology name other than `linear` or `circular`.
    #[error("unknown topology '{0}' (expected 'linear' or 'circular')")]
    UnknownTopology(String),
}
