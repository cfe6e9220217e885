use oxiri::Iri;
use oxrdf::{NamedNode, Term};
use std::fmt::Debug;
use std::hash::Hash;

/// A node of a class hierarchy.
///
/// Nodes are only compared by equality and hashing.
/// The only structural information the closure looks at is whether a node is a proper resource identifier,
/// which is what the `only_uris` option of [`ClosureOptions`](crate::ClosureOptions) filters on.
pub trait ClassNode: Clone + Eq + Hash + Debug {
    /// Returns `true` if the node is an IRI and not a literal, a blank node or some other kind of term.
    fn is_resource(&self) -> bool;
}

impl ClassNode for Term {
    #[inline]
    fn is_resource(&self) -> bool {
        matches!(self, Self::NamedNode(_))
    }
}

impl ClassNode for NamedNode {
    #[inline]
    fn is_resource(&self) -> bool {
        true
    }
}

/// Strings are resources if they are valid absolute IRIs.
impl ClassNode for String {
    fn is_resource(&self) -> bool {
        Iri::parse(self.as_str()).is_ok()
    }
}

impl ClassNode for &str {
    fn is_resource(&self) -> bool {
        Iri::parse(*self).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxrdf::{BlankNode, Literal};

    #[test]
    fn terms() {
        assert!(Term::from(NamedNode::new_unchecked("http://example.org/a")).is_resource());
        assert!(!Term::from(BlankNode::default()).is_resource());
        assert!(!Term::from(Literal::new_simple_literal("a")).is_resource());
    }

    #[test]
    fn strings() {
        assert!("http://example.org/a".is_resource());
        assert!(String::from("urn:isbn:0451450523").is_resource());
        assert!(!"a".is_resource());
        assert!(!String::from("_:b0").is_resource());
        assert!(!"http://example.org/a b".is_resource());
    }
}
