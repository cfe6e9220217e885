#![doc = include_str!("../README.md")]
#![doc(test(attr(deny(warnings))))]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc(html_favicon_url = "https://raw.githubusercontent.com/oxigraph/oxigraph/main/logo.svg")]
#![doc(html_logo_url = "https://raw.githubusercontent.com/oxigraph/oxigraph/main/logo.svg")]

mod error;
mod graph;
mod hierarchy;
mod node;
mod options;
#[cfg(feature = "store")]
mod store;
mod traversal;
pub mod vocab;

pub use crate::error::ParseTraversalModeError;
pub use crate::graph::ClassGraph;
pub use crate::hierarchy::ClassHierarchy;
pub use crate::node::ClassNode;
pub use crate::options::{ClosureOptions, TraversalMode};
#[cfg(feature = "store")]
pub use crate::store::StoreClassGraph;
pub use crate::traversal::{ClosureTraversal, Descendants, closure, descendants};
pub use crate::vocab::ClassRelation;
