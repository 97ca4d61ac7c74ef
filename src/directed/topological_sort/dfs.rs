use crate::prelude::*;
use crate::utils::sym::Sym;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Visit {
    Unvisited,
    /// On the path from the current traversal root.
    InProgress,
    Done,
}

/// Depth-first topological sort.
///
/// Each node is emitted once all of its descendants have been
/// emitted, then the emission order is reversed once at the end.
/// Reaching a node that is still [`Visit::InProgress`] means we
/// found a back-edge, so the graph has a cycle.
///
/// The recursion is simulated with an explicit stack of pending
/// child iterators, so the depth of the graph is only bounded by
/// memory.
pub(crate) fn topological_sort<V: Vertex>(dg: &DirectedGraph<V>) -> Result<Vec<Sym>, GraphHasCycle> {
    let n_nodes = dg.n_nodes();
    let mut state = vec![Visit::Unvisited; n_nodes];
    let mut res = Vec::with_capacity(n_nodes);
    let mut stack = Vec::new();

    for root in dg.node_syms() {
        if state[root.into_usize()] != Visit::Unvisited {
            continue;
        }

        state[root.into_usize()] = Visit::InProgress;
        stack.push((root, dg.children_map.get(root).iter()));

        while let Some((node, children)) = stack.last_mut() {
            let node = *node;
            let next = children.next();
            match next {
                Some(child) => match state[child.into_usize()] {
                    Visit::InProgress => {
                        log::debug!(
                            "back-edge {:?} -> {:?}, graph has a cycle",
                            dg.resolve(node),
                            dg.resolve(child)
                        );
                        return Err(GraphHasCycle);
                    }
                    Visit::Unvisited => {
                        state[child.into_usize()] = Visit::InProgress;
                        stack.push((child, dg.children_map.get(child).iter()));
                    }
                    Visit::Done => {}
                },
                None => {
                    state[node.into_usize()] = Visit::Done;
                    res.push(node);
                    stack.pop();
                }
            }
        }
    }

    res.reverse();

    Ok(res)
}
