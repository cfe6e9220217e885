use crate::graph::{ClassGraph, subject_ref};
use crate::vocab::ClassRelation;
use oxigraph::model::{GraphName, GraphNameRef, Term};
use oxigraph::store::{StorageError, Store};

/// A [`ClassGraph`] reading one graph of an Oxigraph [`Store`].
///
/// Storage errors are returned by the closure unchanged.
///
/// ```
/// use oxclosure::{closure, ClosureOptions, StoreClassGraph};
/// use oxigraph::model::vocab::rdfs;
/// use oxigraph::model::{GraphNameRef, NamedNodeRef, QuadRef, Term};
/// use oxigraph::store::Store;
///
/// let parent = NamedNodeRef::new("http://example.org/parent")?;
/// let child = NamedNodeRef::new("http://example.org/child")?;
/// let store = Store::new()?;
/// store.insert(QuadRef::new(child, rdfs::SUB_CLASS_OF, parent, GraphNameRef::DefaultGraph))?;
///
/// let descendants = closure(
///     &StoreClassGraph::new(&store),
///     Term::from(parent.into_owned()),
///     ClosureOptions::default(),
/// )?;
/// assert!(descendants.contains(&Term::from(child.into_owned())));
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Clone)]
pub struct StoreClassGraph<'a> {
    store: &'a Store,
    graph_name: GraphName,
}

impl<'a> StoreClassGraph<'a> {
    /// Reads the default graph of the store.
    pub fn new(store: &'a Store) -> Self {
        Self::for_graph(store, GraphName::DefaultGraph)
    }

    /// Reads the given graph of the store.
    pub fn for_graph(store: &'a Store, graph_name: impl Into<GraphName>) -> Self {
        Self {
            store,
            graph_name: graph_name.into(),
        }
    }

    /// The graph read from.
    #[inline]
    pub fn graph_name(&self) -> GraphNameRef<'_> {
        self.graph_name.as_ref()
    }
}

impl ClassGraph for StoreClassGraph<'_> {
    type Node = Term;
    type Error = StorageError;

    fn subjects_for_predicate_object(
        &self,
        predicate: ClassRelation,
        object: &Term,
    ) -> Result<Vec<Term>, StorageError> {
        self.store
            .quads_for_pattern(
                None,
                Some(predicate.iri()),
                Some(object.as_ref()),
                Some(self.graph_name.as_ref()),
            )
            .map(|quad| quad.map(|quad| quad.subject.into()))
            .collect()
    }

    fn objects_for_subject_predicate(
        &self,
        subject: &Term,
        predicate: ClassRelation,
    ) -> Result<Vec<Term>, StorageError> {
        let Some(subject) = subject_ref(subject) else {
            return Ok(Vec::new());
        };
        self.store
            .quads_for_pattern(
                Some(subject),
                Some(predicate.iri()),
                None,
                Some(self.graph_name.as_ref()),
            )
            .map(|quad| quad.map(|quad| quad.object))
            .collect()
    }
}
