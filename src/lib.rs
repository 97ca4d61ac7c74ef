//! Topological ordering of directed graphs.
//!
//! Build a [`directed::DirectedGraph`] with a
//! [`directed::DirectedGraphBuilder`], then order it with either a
//! depth-first traversal or Kahn's algorithm. Both fail with
//! [`error::GraphHasCycle`] when no order exists.
//!
//! ```
//! use topoweave::prelude::*;
//!
//! let dg = DirectedGraphBuilder::from_adjacency([
//!     ("A", vec!["B", "C"]),
//!     ("B", vec!["D"]),
//!     ("C", vec!["D"]),
//!     ("D", vec![]),
//! ])
//! .build_directed();
//!
//! let order = dg.topological_sort_kahn().unwrap();
//! assert_eq!(order.first(), Some(&&"A"));
//! assert_eq!(order.last(), Some(&&"D"));
//! ```

use std::fmt::Debug;
use std::hash::Hash;

pub mod config;
pub mod directed;
pub mod error;
mod utils;

/// Prelude of data types and functionality.
pub mod prelude {
    pub(crate) type GraphInteractionResult<T> = Result<T, GraphInteractionError>;
    pub use crate::config::*;
    pub use crate::directed::acyclic::DirectedAcyclicGraph;
    pub use crate::directed::{DirectedGraph, DirectedGraphBuilder};
    pub use crate::error::*;
    pub use crate::Vertex;
}

use prelude::*;

/// Anything that can identify a node of a graph.
pub trait Vertex: Clone + Eq + Hash + Debug {}

impl<T> Vertex for T where T: Clone + Eq + Hash + Debug {}

/// Orders an adjacency mapping in one call.
///
/// Each item is a node together with the nodes it points to. The
/// `config` decides what happens to neighbors that are never listed as
/// a node and which algorithm produces the order.
///
/// ```
/// use std::collections::HashMap;
/// use topoweave::prelude::*;
///
/// let graph = HashMap::from([("A", vec!["B"]), ("B", vec!["C"]), ("C", vec!["A"])]);
/// let err = topoweave::topological_sort(graph, &SortConfig::default()).unwrap_err();
/// assert!(err.is_cycle());
/// ```
pub fn topological_sort<V, N>(
    adjacency: impl IntoIterator<Item = (V, N)>,
    config: &SortConfig,
) -> Result<Vec<V>, SortError>
where
    V: Vertex,
    N: IntoIterator<Item = V>,
{
    let dg = DirectedGraphBuilder::from_adjacency(adjacency).build_with_policy(config.undeclared)?;
    let order = dg.topological_sort(config.algorithm)?;
    Ok(order.into_iter().cloned().collect())
}
