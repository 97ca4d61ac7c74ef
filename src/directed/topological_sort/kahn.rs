use std::collections::VecDeque;

use crate::prelude::*;
use crate::utils::sym::Sym;

/// Kahn's algorithm.
///
/// ```text
/// L ← Empty list that will contain the sorted elements
/// S ← Queue of all nodes with no incoming edge
///
/// while S is not empty do
///     remove the first node n from S
///     add n to L
///     for each node m with an edge e from n to m do
///         remove edge e from the graph
///         if m has no other incoming edges then
///             insert m at the back of S
///
/// if L is shorter than the number of nodes then
///     return error   (graph has at least one cycle)
/// else
///     return L   (a topologically sorted order)
/// ```
///
/// Edges are never removed from the graph itself, only from a local
/// in-degree table.
pub(crate) fn topological_sort<V: Vertex>(dg: &DirectedGraph<V>) -> Result<Vec<Sym>, GraphHasCycle> {
    let n_nodes = dg.n_nodes();

    let mut in_degree = vec![0usize; n_nodes];
    for (_, children) in dg.children_map.iter() {
        for child in children.iter() {
            in_degree[child.into_usize()] += 1;
        }
    }

    let mut no_deps: VecDeque<Sym> = dg
        .node_syms()
        .filter(|node| in_degree[node.into_usize()] == 0)
        .collect();

    let mut res = Vec::with_capacity(n_nodes);

    while let Some(node) = no_deps.pop_front() {
        res.push(node);

        for child in dg.children_map.get(node).iter() {
            let degree = &mut in_degree[child.into_usize()];
            *degree -= 1;
            if *degree == 0 {
                no_deps.push_back(child);
            }
        }
    }

    if res.len() != n_nodes {
        log::debug!(
            "{} of {} nodes never reached in-degree zero, graph has a cycle",
            n_nodes - res.len(),
            n_nodes
        );
        return Err(GraphHasCycle);
    }

    Ok(res)
}
