//! The document: an ordered set of top-level objects under a namespace.

use crate::error::SbolError;
use crate::model::{Component, Sequence, TopLevel};

/// A collection of top-level SBOL3 objects.
///
/// Objects keep their insertion order, which the serializers follow.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    /// Default namespace for identities created against this document.
    pub namespace: Option<String>,
    objects: Vec<TopLevel>,
}

impl Document {
    /// Creates an empty document with no namespace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty document whose new objects live under `namespace`.
    #[must_use]
    pub fn with_namespace(namespace: impl Into<String>) -> Self {
        Self {
            namespace: Some(namespace.into().trim_end_matches('/').to_owned()),
            objects: Vec::new(),
        }
    }

    /// Adds a top-level object.
    ///
    /// # Errors
    ///
    /// Returns [`SbolError::DuplicateIdentity`] if an object with the same
    /// identity is already present.
    pub fn add(&mut self, object: impl Into<TopLevel>) -> Result<(), SbolError> {
        let object = object.into();
        if self.find(object.identity()).is_some() {
            return Err(SbolError::DuplicateIdentity(object.identity().to_owned()));
        }
        tracing::debug!(identity = object.identity(), kind = object.type_name(), "added to document");
        self.objects.push(object);
        Ok(())
    }

    /// Adds every object in order, stopping at the first duplicate.
    ///
    /// # Errors
    ///
    /// Returns [`SbolError::DuplicateIdentity`] on the first duplicate;
    /// objects before it stay in the document.
    pub fn add_all<I, T>(&mut self, objects: I) -> Result<(), SbolError>
    where
        I: IntoIterator<Item = T>,
        T: Into<TopLevel>,
    {
        for object in objects {
            self.add(object)?;
        }
        Ok(())
    }

    /// Looks up a top-level object by identity.
    #[must_use]
    pub fn find(&self, identity: &str) -> Option<&TopLevel> {
        self.objects.iter().find(|o| o.identity() == identity)
    }

    /// Looks up a component by identity.
    #[must_use]
    pub fn find_component(&self, identity: &str) -> Option<&Component> {
        match self.find(identity)? {
            TopLevel::Component(c) => Some(c),
            TopLevel::Sequence(_) => None,
        }
    }

    /// Looks up a sequence by identity.
    #[must_use]
    pub fn find_sequence(&self, identity: &str) -> Option<&Sequence> {
        match self.find(identity)? {
            TopLevel::Sequence(s) => Some(s),
            TopLevel::Component(_) => None,
        }
    }

    /// Resolves a sequence reference held by a component or location.
    ///
    /// # Errors
    ///
    /// Returns [`SbolError::UnresolvedReference`] if `reference` is missing
    /// or names something other than a `Sequence`.
    pub fn lookup_sequence(&self, reference: &str) -> Result<&Sequence, SbolError> {
        self.find_sequence(reference)
            .ok_or_else(|| SbolError::UnresolvedReference {
                reference: reference.to_owned(),
                expected: "Sequence",
            })
    }

    /// Resolves a component reference, e.g. a sub-component's `instanceOf`.
    ///
    /// # Errors
    ///
    /// Returns [`SbolError::UnresolvedReference`] if `reference` is missing
    /// or names something other than a `Component`.
    pub fn lookup_component(&self, reference: &str) -> Result<&Component, SbolError> {
        self.find_component(reference)
            .ok_or_else(|| SbolError::UnresolvedReference {
                reference: reference.to_owned(),
                expected: "Component",
            })
    }

    /// All top-level objects in insertion order.
    pub fn objects(&self) -> impl Iterator<Item = &TopLevel> {
        self.objects.iter()
    }

    /// All components in insertion order.
    pub fn components(&self) -> impl Iterator<Item = &Component> {
        self.objects.iter().filter_map(|o| match o {
            TopLevel::Component(c) => Some(c),
            TopLevel::Sequence(_) => None,
        })
    }

    /// All sequences in insertion order.
    pub fn sequences(&self) -> impl Iterator<Item = &Sequence> {
        self.objects.iter().filter_map(|o| match o {
            TopLevel::Sequence(s) => Some(s),
            TopLevel::Component(_) => None,
        })
    }

    /// Number of top-level objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns true if the document holds no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
