use crate::node::ClassNode;
use crate::vocab::ClassRelation;
use oxrdf::{Graph, NamedOrBlankNodeRef, Term, TermRef};
use std::convert::Infallible;

/// A read-only source of class hierarchy edges.
///
/// A closure only needs the two lookups below.
/// Errors raised by them are returned to the caller of the closure as is.
pub trait ClassGraph {
    /// The node type of the graph.
    type Node: ClassNode;
    /// The error raised by the lookups.
    type Error;

    /// Returns all the `s` such that `s predicate object` is in the graph.
    fn subjects_for_predicate_object(
        &self,
        predicate: ClassRelation,
        object: &Self::Node,
    ) -> Result<Vec<Self::Node>, Self::Error>;

    /// Returns all the `o` such that `subject predicate o` is in the graph.
    fn objects_for_subject_predicate(
        &self,
        subject: &Self::Node,
        predicate: ClassRelation,
    ) -> Result<Vec<Self::Node>, Self::Error>;
}

impl ClassGraph for Graph {
    type Node = Term;
    type Error = Infallible;

    fn subjects_for_predicate_object(
        &self,
        predicate: ClassRelation,
        object: &Term,
    ) -> Result<Vec<Term>, Infallible> {
        Ok(Graph::subjects_for_predicate_object(self, predicate.iri(), object.as_ref())
            .map(|subject| subject.into_owned().into())
            .collect())
    }

    fn objects_for_subject_predicate(
        &self,
        subject: &Term,
        predicate: ClassRelation,
    ) -> Result<Vec<Term>, Infallible> {
        let Some(subject) = subject_ref(subject) else {
            return Ok(Vec::new());
        };
        Ok(Graph::objects_for_subject_predicate(self, subject, predicate.iri())
            .map(TermRef::into_owned)
            .collect())
    }
}

/// Terms that cannot be the subject of a triple have no outgoing edges.
pub(crate) fn subject_ref(term: &Term) -> Option<NamedOrBlankNodeRef<'_>> {
    match term {
        Term::NamedNode(node) => Some(node.as_ref().into()),
        Term::BlankNode(node) => Some(node.as_ref().into()),
        _ => None,
    }
}
