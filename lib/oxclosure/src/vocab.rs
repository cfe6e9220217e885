//! The two relations a class closure follows.

use oxrdf::NamedNodeRef;
use std::fmt;

pub mod rdfs {
    //! [RDFS](https://www.w3.org/TR/rdf-schema/) terms used by the closure.

    pub use oxrdf::vocab::rdfs::SUB_CLASS_OF;
}

pub mod owl {
    //! [OWL 2](https://www.w3.org/TR/owl2-rdf-based-semantics/) terms used by the closure.
    use oxrdf::NamedNodeRef;

    /// The property that determines that two given classes are equivalent.
    pub const EQUIVALENT_CLASS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#equivalentClass");
}

/// An edge kind of a class hierarchy.
///
/// These are the only predicates a [`ClassGraph`](crate::ClassGraph) is ever queried with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassRelation {
    /// `child rdfs:subClassOf parent`, directed from the child to the parent.
    SubClassOf,
    /// `a owl:equivalentClass b`, stored directed but meant to be symmetric.
    EquivalentClass,
}

impl ClassRelation {
    /// The IRI of the predicate encoding this relation.
    #[inline]
    pub const fn iri(self) -> NamedNodeRef<'static> {
        match self {
            Self::SubClassOf => rdfs::SUB_CLASS_OF,
            Self::EquivalentClass => owl::EQUIVALENT_CLASS,
        }
    }

    /// Returns the relation encoded by the given predicate, if any.
    ///
    /// ```
    /// use oxclosure::ClassRelation;
    /// use oxrdf::vocab::{rdf, rdfs};
    ///
    /// assert_eq!(
    ///     ClassRelation::from_iri(rdfs::SUB_CLASS_OF),
    ///     Some(ClassRelation::SubClassOf)
    /// );
    /// assert_eq!(ClassRelation::from_iri(rdf::TYPE), None);
    /// ```
    pub fn from_iri(iri: NamedNodeRef<'_>) -> Option<Self> {
        if iri == rdfs::SUB_CLASS_OF {
            Some(Self::SubClassOf)
        } else if iri == owl::EQUIVALENT_CLASS {
            Some(Self::EquivalentClass)
        } else {
            None
        }
    }
}

impl fmt::Display for ClassRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let iri = self.iri();
        write!(f, "{iri}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relation_iris() {
        assert_eq!(
            ClassRelation::SubClassOf.iri().as_str(),
            "http://www.w3.org/2000/01/rdf-schema#subClassOf"
        );
        assert_eq!(
            ClassRelation::EquivalentClass.to_string(),
            "<http://www.w3.org/2002/07/owl#equivalentClass>"
        );
        for relation in [ClassRelation::SubClassOf, ClassRelation::EquivalentClass] {
            assert_eq!(ClassRelation::from_iri(relation.iri()), Some(relation));
        }
    }
}
