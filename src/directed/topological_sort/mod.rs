//! The two ordering components. Both work on the dense symbols of a
//! frozen [`DirectedGraph`], keep all of their working state local to
//! the call and never touch the graph.

use crate::prelude::*;
use crate::utils::sym::Sym;

pub(crate) mod dfs;
pub(crate) mod kahn;

#[inline]
pub(crate) fn sort<V: Vertex>(
    dg: &DirectedGraph<V>,
    algorithm: Algorithm,
) -> Result<Vec<Sym>, GraphHasCycle> {
    let order = match algorithm {
        Algorithm::DepthFirst => dfs::topological_sort(dg)?,
        Algorithm::Kahn => kahn::topological_sort(dg)?,
    };
    log::trace!("{algorithm} ordered {} nodes", order.len());
    Ok(order)
}
