//! Breadth-first closure over `rdfs:subClassOf` and `owl:equivalentClass` edges.

use crate::graph::ClassGraph;
use crate::node::ClassNode;
use crate::options::ClosureOptions;
use crate::vocab::ClassRelation;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;
use std::iter::FusedIterator;
use tracing::{debug, trace};

/// Computes all the descendants of `start` in `graph`.
///
/// The traversal is breadth-first and each node is expanded at most once,
/// so it terminates on any graph, including cyclic equivalences and self-loops.
/// The returned set has no particular order.
///
/// The first error returned by the graph lookups stops the traversal and is returned unchanged.
///
/// ```
/// use oxclosure::{closure, ClassHierarchy, ClosureOptions, TraversalMode};
///
/// let mut hierarchy = ClassHierarchy::<&str>::new();
/// hierarchy.add_sub_class_of("urn:ex:geotiff", "urn:ex:raster");
/// hierarchy.add_equivalent_class("urn:ex:tiff", "urn:ex:geotiff");
///
/// let options = ClosureOptions::default().with_mode(TraversalMode::SubclassesOnly);
/// let mut descendants = closure(&hierarchy, "urn:ex:raster", options)?
///     .into_iter()
///     .collect::<Vec<_>>();
/// descendants.sort_unstable();
/// assert_eq!(descendants, ["urn:ex:geotiff", "urn:ex:raster"]);
///
/// let descendants = closure(&hierarchy, "urn:ex:raster", ClosureOptions::default())?;
/// assert!(descendants.contains("urn:ex:tiff"));
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
pub fn closure<G: ClassGraph + ?Sized>(
    graph: &G,
    start: G::Node,
    options: ClosureOptions,
) -> Result<FxHashSet<G::Node>, G::Error> {
    ClosureTraversal::new(graph, start, options).run()
}

/// Lazily computes the descendants of `start` in `graph`.
///
/// See [`Descendants`].
pub fn descendants<G: ClassGraph + ?Sized>(
    graph: &G,
    start: G::Node,
    options: ClosureOptions,
) -> Descendants<'_, G> {
    Descendants::new(ClosureTraversal::new(graph, start, options))
}

/// The state of a closure computation.
///
/// The state is made of a FIFO frontier of nodes waiting to be expanded,
/// the set of all nodes ever put in the frontier and the set of descendants found so far.
/// Each call to [`step`](Self::step) expands one node.
///
/// ```
/// use oxclosure::{ClassHierarchy, ClosureOptions, ClosureTraversal};
///
/// let mut hierarchy = ClassHierarchy::<&str>::new();
/// hierarchy.add_sub_class_of("urn:ex:b", "urn:ex:a");
///
/// let mut traversal = ClosureTraversal::new(&hierarchy, "urn:ex:a", ClosureOptions::default());
/// assert_eq!(traversal.step()?, Some("urn:ex:a"));
/// assert_eq!(traversal.step()?, Some("urn:ex:b"));
/// assert_eq!(traversal.step()?, None);
/// assert!(traversal.is_finished());
/// assert_eq!(traversal.result().len(), 2);
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
pub struct ClosureTraversal<'a, G: ClassGraph + ?Sized> {
    graph: &'a G,
    start: G::Node,
    options: ClosureOptions,
    frontier: VecDeque<G::Node>,
    visited: FxHashSet<G::Node>,
    result: FxHashSet<G::Node>,
    // Only filled when driven by `Descendants`.
    newly_counted: Option<VecDeque<G::Node>>,
}

impl<'a, G: ClassGraph + ?Sized> ClosureTraversal<'a, G> {
    /// Creates a traversal whose frontier only contains `start`.
    pub fn new(graph: &'a G, start: G::Node, options: ClosureOptions) -> Self {
        let mut visited = FxHashSet::default();
        visited.insert(start.clone());
        let mut result = FxHashSet::default();
        if options.include_start {
            result.insert(start.clone());
        }
        Self {
            graph,
            frontier: VecDeque::from([start.clone()]),
            start,
            options,
            visited,
            result,
            newly_counted: None,
        }
    }

    /// The node the traversal started from.
    #[inline]
    pub fn start(&self) -> &G::Node {
        &self.start
    }

    /// The options the traversal was created with.
    #[inline]
    pub fn options(&self) -> ClosureOptions {
        self.options
    }

    /// Checks if there is no node left to expand.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.frontier.is_empty()
    }

    /// All the nodes that have been put in the frontier so far, including the start node.
    #[inline]
    pub fn visited(&self) -> &FxHashSet<G::Node> {
        &self.visited
    }

    /// The descendants found so far.
    #[inline]
    pub fn result(&self) -> &FxHashSet<G::Node> {
        &self.result
    }

    /// Returns the descendants found so far.
    #[inline]
    pub fn into_result(self) -> FxHashSet<G::Node> {
        self.result
    }

    /// Expands the next node of the frontier.
    ///
    /// Returns the expanded node or `None` if the frontier is empty.
    /// If a graph lookup fails, the error is returned and the node is not expanded any further.
    pub fn step(&mut self) -> Result<Option<G::Node>, G::Error> {
        let Some(current) = self.frontier.pop_front() else {
            return Ok(None);
        };
        if self.options.include_start || current != self.start {
            self.count(current.clone());
        }

        for child in self
            .graph
            .subjects_for_predicate_object(ClassRelation::SubClassOf, &current)?
        {
            if self.discover(&child) {
                trace!(parent = ?current, ?child, "sub class discovered");
            }
        }

        if self.options.mode.follows_equivalents() {
            let forward = self
                .graph
                .objects_for_subject_predicate(&current, ClassRelation::EquivalentClass)?;
            let backward = self
                .graph
                .subjects_for_predicate_object(ClassRelation::EquivalentClass, &current)?;
            for equivalent in forward.into_iter().chain(backward) {
                if self.discover(&equivalent) {
                    trace!(class = ?current, ?equivalent, "equivalent class discovered");
                    if self.options.mode.counts_equivalents_on_discovery() {
                        self.count(equivalent);
                    }
                }
            }
        }
        Ok(Some(current))
    }

    /// Expands nodes until the frontier is empty and returns the descendants.
    pub fn run(mut self) -> Result<FxHashSet<G::Node>, G::Error> {
        while self.step()?.is_some() {}
        debug!(
            start = ?self.start,
            mode = %self.options.mode,
            visited = self.visited.len(),
            descendants = self.result.len(),
            "class closure computed"
        );
        Ok(self.result)
    }

    /// Puts `node` in the frontier if it passes the resource filter and has never been visited.
    fn discover(&mut self, node: &G::Node) -> bool {
        if self.options.only_uris && !node.is_resource() {
            trace!(?node, "non resource node skipped");
            return false;
        }
        if !self.visited.insert(node.clone()) {
            return false;
        }
        self.frontier.push_back(node.clone());
        true
    }

    fn count(&mut self, node: G::Node) {
        if let Some(newly_counted) = &mut self.newly_counted {
            if !self.result.contains(&node) {
                newly_counted.push_back(node.clone());
            }
        }
        self.result.insert(node);
    }
}

/// An iterator over the descendants of a class, computed lazily.
///
/// Each node is yielded once, when it enters the set of descendants,
/// so collecting the iterator gives the same set as [`closure`].
/// Under [`TraversalMode::IncludeEquivalents`](crate::TraversalMode::IncludeEquivalents)
/// equivalent classes are yielded as soon as they are discovered,
/// under [`TraversalMode::TraverseEquivalents`](crate::TraversalMode::TraverseEquivalents)
/// only when they are expanded.
///
/// Dropping the iterator abandons the traversal.
/// After an error has been yielded the iterator only returns `None`,
/// nodes counted by the step that failed are not yielded.
///
/// ```
/// use oxclosure::{descendants, ClassHierarchy, ClosureOptions};
///
/// let mut hierarchy = ClassHierarchy::<&str>::new();
/// hierarchy.add_sub_class_of("urn:ex:b", "urn:ex:a");
/// hierarchy.add_sub_class_of("urn:ex:c", "urn:ex:b");
///
/// let nodes = descendants(&hierarchy, "urn:ex:a", ClosureOptions::default().without_start())
///     .collect::<Result<Vec<_>, _>>()?;
/// assert_eq!(nodes, ["urn:ex:b", "urn:ex:c"]);
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[must_use]
pub struct Descendants<'a, G: ClassGraph + ?Sized> {
    traversal: ClosureTraversal<'a, G>,
    ready: VecDeque<G::Node>,
    failed: bool,
}

impl<'a, G: ClassGraph + ?Sized> Descendants<'a, G> {
    fn new(mut traversal: ClosureTraversal<'a, G>) -> Self {
        let ready = traversal.result.iter().cloned().collect();
        traversal.newly_counted = Some(VecDeque::new());
        Self {
            traversal,
            ready,
            failed: false,
        }
    }

    /// The underlying traversal state.
    #[inline]
    pub fn traversal(&self) -> &ClosureTraversal<'a, G> {
        &self.traversal
    }
}

impl<G: ClassGraph + ?Sized> Iterator for Descendants<'_, G> {
    type Item = Result<G::Node, G::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(node) = self.ready.pop_front() {
                return Some(Ok(node));
            }
            if self.failed {
                return None;
            }
            match self.traversal.step() {
                Ok(Some(_)) => {
                    if let Some(newly_counted) = &mut self.traversal.newly_counted {
                        self.ready.append(newly_counted);
                    }
                }
                Ok(None) => return None,
                Err(e) => {
                    // Nodes counted by the failed step are not reported.
                    self.failed = true;
                    self.traversal.frontier.clear();
                    return Some(Err(e));
                }
            }
        }
    }
}

impl<G: ClassGraph + ?Sized> FusedIterator for Descendants<'_, G> {}
