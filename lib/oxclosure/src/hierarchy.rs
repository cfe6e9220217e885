//! An in-memory class hierarchy indexed for closure lookups.

use crate::graph::ClassGraph;
use crate::node::ClassNode;
use crate::vocab::ClassRelation;
use oxrdf::{Graph, Term};
use rustc_hash::{FxHashMap, FxHashSet};
use std::convert::Infallible;

/// An in-memory set of `rdfs:subClassOf` and `owl:equivalentClass` edges.
///
/// Edges are indexed in both directions so that both [`ClassGraph`] lookups are hash map hits.
/// Lookups return nodes in insertion order.
///
/// ```
/// use oxclosure::{closure, ClassHierarchy, ClosureOptions};
///
/// let mut hierarchy = ClassHierarchy::<&str>::new();
/// hierarchy.add_sub_class_of("http://example.org/png", "http://example.org/image");
/// hierarchy.add_equivalent_class("http://example.org/png", "http://example.org/portable");
///
/// let descendants = closure(&hierarchy, "http://example.org/image", ClosureOptions::default())?;
/// assert_eq!(descendants.len(), 3);
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Debug, Clone)]
pub struct ClassHierarchy<N: ClassNode = Term> {
    edges: FxHashSet<(N, ClassRelation, N)>,
    by_subject: FxHashMap<(N, ClassRelation), Vec<N>>,
    by_object: FxHashMap<(ClassRelation, N), Vec<N>>,
}

impl<N: ClassNode> ClassHierarchy<N> {
    /// Creates an empty hierarchy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the edge `subject predicate object`.
    ///
    /// Returns `true` if the edge was not already present.
    pub fn insert(&mut self, subject: N, predicate: ClassRelation, object: N) -> bool {
        if !self
            .edges
            .insert((subject.clone(), predicate, object.clone()))
        {
            return false;
        }
        self.by_subject
            .entry((subject.clone(), predicate))
            .or_default()
            .push(object.clone());
        self.by_object
            .entry((predicate, object))
            .or_default()
            .push(subject);
        true
    }

    /// Adds `child rdfs:subClassOf parent`.
    pub fn add_sub_class_of(&mut self, child: impl Into<N>, parent: impl Into<N>) -> bool {
        self.insert(child.into(), ClassRelation::SubClassOf, parent.into())
    }

    /// Adds `a owl:equivalentClass b`.
    ///
    /// Only this direction is stored, the closure takes care of the symmetry.
    pub fn add_equivalent_class(&mut self, a: impl Into<N>, b: impl Into<N>) -> bool {
        self.insert(a.into(), ClassRelation::EquivalentClass, b.into())
    }

    /// Checks if the edge `subject predicate object` is present.
    pub fn contains(&self, subject: &N, predicate: ClassRelation, object: &N) -> bool {
        self.edges
            .contains(&(subject.clone(), predicate, object.clone()))
    }

    /// Returns the number of edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Checks if the hierarchy has no edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl ClassHierarchy<Term> {
    /// Indexes the `rdfs:subClassOf` and `owl:equivalentClass` triples of an RDF graph.
    ///
    /// Every other triple is ignored.
    pub fn from_graph(graph: &Graph) -> Self {
        let mut hierarchy = Self::new();
        for relation in [ClassRelation::SubClassOf, ClassRelation::EquivalentClass] {
            for triple in graph.triples_for_predicate(relation.iri()) {
                hierarchy.insert(
                    triple.subject.into_owned().into(),
                    relation,
                    triple.object.into_owned(),
                );
            }
        }
        hierarchy
    }
}

impl<N: ClassNode> Default for ClassHierarchy<N> {
    fn default() -> Self {
        Self {
            edges: FxHashSet::default(),
            by_subject: FxHashMap::default(),
            by_object: FxHashMap::default(),
        }
    }
}

impl<N: ClassNode> FromIterator<(N, ClassRelation, N)> for ClassHierarchy<N> {
    fn from_iter<I: IntoIterator<Item = (N, ClassRelation, N)>>(iter: I) -> Self {
        let mut hierarchy = Self::new();
        hierarchy.extend(iter);
        hierarchy
    }
}

impl<N: ClassNode> Extend<(N, ClassRelation, N)> for ClassHierarchy<N> {
    fn extend<I: IntoIterator<Item = (N, ClassRelation, N)>>(&mut self, iter: I) {
        for (subject, predicate, object) in iter {
            self.insert(subject, predicate, object);
        }
    }
}

impl<N: ClassNode> ClassGraph for ClassHierarchy<N> {
    type Node = N;
    type Error = Infallible;

    fn subjects_for_predicate_object(
        &self,
        predicate: ClassRelation,
        object: &N,
    ) -> Result<Vec<N>, Infallible> {
        Ok(self
            .by_object
            .get(&(predicate, object.clone()))
            .cloned()
            .unwrap_or_default())
    }

    fn objects_for_subject_predicate(
        &self,
        subject: &N,
        predicate: ClassRelation,
    ) -> Result<Vec<N>, Infallible> {
        Ok(self
            .by_subject
            .get(&(subject.clone(), predicate))
            .cloned()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::{owl, rdfs};
    use oxrdf::vocab::rdf;
    use oxrdf::{NamedNode, TripleRef};

    #[test]
    fn insert_deduplicates() {
        let mut hierarchy = ClassHierarchy::<&str>::new();
        assert!(hierarchy.is_empty());
        assert!(hierarchy.add_sub_class_of("urn:a", "urn:b"));
        assert!(!hierarchy.add_sub_class_of("urn:a", "urn:b"));
        assert!(hierarchy.add_equivalent_class("urn:a", "urn:b"));
        assert_eq!(hierarchy.len(), 2);
        assert!(hierarchy.contains(&"urn:a", ClassRelation::SubClassOf, &"urn:b"));
        assert!(!hierarchy.contains(&"urn:b", ClassRelation::SubClassOf, &"urn:a"));
        assert_eq!(
            hierarchy.subjects_for_predicate_object(ClassRelation::SubClassOf, &"urn:b"),
            Ok(vec!["urn:a"])
        );
    }

    #[test]
    fn lookups_keep_insertion_order() {
        let hierarchy: ClassHierarchy<String> = ["c", "a", "b"]
            .into_iter()
            .map(|child| {
                (
                    format!("urn:{child}"),
                    ClassRelation::SubClassOf,
                    "urn:parent".to_owned(),
                )
            })
            .collect();
        assert_eq!(
            hierarchy.subjects_for_predicate_object(
                ClassRelation::SubClassOf,
                &"urn:parent".to_owned()
            ),
            Ok(vec![
                "urn:c".to_owned(),
                "urn:a".to_owned(),
                "urn:b".to_owned()
            ])
        );
        assert_eq!(
            hierarchy.objects_for_subject_predicate(
                &"urn:parent".to_owned(),
                ClassRelation::SubClassOf
            ),
            Ok(Vec::new())
        );
    }

    #[test]
    fn from_graph_keeps_only_class_relations() {
        let a = NamedNode::new_unchecked("http://example.org/a");
        let b = NamedNode::new_unchecked("http://example.org/b");
        let mut graph = Graph::new();
        graph.insert(TripleRef::new(a.as_ref(), rdfs::SUB_CLASS_OF, b.as_ref()));
        graph.insert(TripleRef::new(b.as_ref(), owl::EQUIVALENT_CLASS, a.as_ref()));
        graph.insert(TripleRef::new(a.as_ref(), rdf::TYPE, b.as_ref()));

        let hierarchy = ClassHierarchy::from_graph(&graph);
        assert_eq!(hierarchy.len(), 2);
        assert!(hierarchy.contains(
            &a.clone().into(),
            ClassRelation::SubClassOf,
            &b.clone().into()
        ));
        assert!(hierarchy.contains(&b.into(), ClassRelation::EquivalentClass, &a.into()));
    }
}
