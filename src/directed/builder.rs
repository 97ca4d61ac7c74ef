use fxhash::FxHashSet;
use rayon::prelude::*;

use crate::prelude::*;
use crate::utils::{interner::InternerBuilder, node_map::NodeMap, sym::Sym};

use super::acyclic::DirectedAcyclicGraph;

/// Collects edges and vertices, then freezes them into a
/// [`DirectedGraph`].
///
/// ```
/// use topoweave::prelude::*;
///
/// let mut builder = DirectedGraphBuilder::new();
/// builder.add_edge("shirt", "tie").add_edge("tie", "jacket");
/// let dg = builder.build_directed();
/// assert_eq!(dg.topological_sort_dfs().unwrap(), [&"shirt", &"tie", &"jacket"]);
/// ```
#[derive(Clone)]
pub struct DirectedGraphBuilder<V> {
    pub(crate) parents: Vec<Sym>,
    pub(crate) children: Vec<Sym>,
    /// Nodes that showed up as a key of the adjacency mapping.
    pub(crate) declared: FxHashSet<Sym>,
    pub(crate) interner: InternerBuilder<V>,
}

fn find_leaves(n_nodes: usize, unique_parents: &[Sym]) -> Vec<Sym> {
    Sym::range(n_nodes)
        .collect::<Vec<_>>()
        .into_par_iter()
        .filter(|node| unique_parents.binary_search(node).is_err())
        .collect()
}

fn find_roots(n_nodes: usize, unique_children: &[Sym]) -> Vec<Sym> {
    Sym::range(n_nodes)
        .collect::<Vec<_>>()
        .into_par_iter()
        .filter(|node| unique_children.binary_search(node).is_err())
        .collect()
}

impl<V: Vertex> DirectedGraphBuilder<V> {
    pub fn new() -> Self {
        DirectedGraphBuilder {
            interner: InternerBuilder::new(),
            declared: FxHashSet::default(),
            children: Vec::new(),
            parents: Vec::new(),
        }
    }

    /// Loads a list of `(from, to)` edges.
    pub fn from_edges(edges: impl IntoIterator<Item = (V, V)>) -> Self {
        let mut builder = Self::new();
        for (from, to) in edges {
            builder.add_edge(from, to);
        }
        builder
    }

    /// Loads an adjacency mapping, one entry per node.
    pub fn from_adjacency<N>(adjacency: impl IntoIterator<Item = (V, N)>) -> Self
    where
        N: IntoIterator<Item = V>,
    {
        let mut builder = Self::new();
        for (node, neighbors) in adjacency {
            builder.add_neighbors(node, neighbors);
        }
        builder
    }

    #[inline(always)]
    pub(crate) fn get_or_intern(&mut self, val: V) -> Sym {
        self.interner.get_or_intern(val)
    }

    #[inline]
    fn declare(&mut self, val: V) -> Sym {
        let sym = self.get_or_intern(val);
        self.declared.insert(sym);
        sym
    }

    pub fn add_node(&mut self, node: V) -> &mut Self {
        self.declare(node);
        self
    }

    pub fn add_edge(&mut self, from: V, to: V) -> &mut Self {
        let from = self.declare(from);
        let to = self.get_or_intern(to);
        self.parents.push(from);
        self.children.push(to);
        self
    }

    pub fn add_neighbors(&mut self, node: V, neighbors: impl IntoIterator<Item = V>) -> &mut Self {
        let from = self.declare(node);
        for to in neighbors {
            let to = self.get_or_intern(to);
            self.parents.push(from);
            self.children.push(to);
        }
        self
    }

    pub fn add_path(&mut self, path: impl IntoIterator<Item = V>) -> &mut Self {
        let mut path = path.into_iter().peekable();
        while let (Some(from), Some(to)) = (path.next(), path.peek()) {
            let to = to.clone();
            self.add_edge(from, to);
        }
        self
    }

    /// First edge, in insertion order, whose target was never declared.
    fn first_undeclared(&self) -> Option<(Sym, Sym)> {
        self.parents
            .iter()
            .zip(self.children.iter())
            .find(|(_, child)| !self.declared.contains(*child))
            .map(|(&parent, &child)| (parent, child))
    }

    /// Freezes the graph. Vertices that only appear as edge targets
    /// become nodes without children.
    pub fn build_directed(self) -> DirectedGraph<V> {
        let n_promoted = self.interner.len() - self.declared.len();
        if n_promoted > 0 {
            log::debug!("promoting {n_promoted} undeclared vertices to nodes");
        }

        let mut unique_parents = self.parents.clone();
        unique_parents.sort_unstable();
        unique_parents.dedup();

        let mut unique_children = self.children.clone();
        unique_children.sort_unstable();
        unique_children.dedup();

        let n_nodes = self.interner.len();

        let leaves = find_leaves(n_nodes, &unique_parents);
        let roots = find_roots(n_nodes, &unique_children);

        let mut n_edges = 0;

        // Maps parents to their children
        let mut children_map = NodeMap::new(n_nodes);

        for (&parent, &child) in self.parents.iter().zip(self.children.iter()) {
            if children_map.get_mut(parent).or_init().insert(child) {
                n_edges += 1;
            }
        }

        // Maps children to their parents
        let mut parent_map = NodeMap::new(n_nodes);

        for (&parent, &child) in self.parents.iter().zip(self.children.iter()) {
            parent_map.get_mut(child).or_init().insert(parent);
        }

        // Every node without parents or children gets an explicit
        // empty set.
        for node in Sym::range(n_nodes) {
            let parent_entry = parent_map.get_mut(node);
            if parent_entry.is_uninitialized() {
                parent_entry.into_empty();
            }
            let child_entry = children_map.get_mut(node);
            if child_entry.is_uninitialized() {
                child_entry.into_empty();
            }
        }

        log::trace!(
            "built graph with {n_nodes} nodes, {n_edges} edges, {} roots and {} leaves",
            roots.len(),
            leaves.len()
        );

        DirectedGraph {
            resolver: self.interner.build(),
            leaves,
            roots,
            children_map,
            parent_map,
            n_edges,
        }
    }

    /// Freezes the graph, failing if any neighbor was never declared
    /// as a node of its own.
    pub fn build_checked(self) -> GraphInteractionResult<DirectedGraph<V>> {
        if let Some((parent, child)) = self.first_undeclared() {
            let dg = self.build_directed();
            return Err(GraphInteractionError::UndeclaredNode {
                from: format!("{:?}", dg.resolve(parent)),
                to: format!("{:?}", dg.resolve(child)),
            });
        }
        Ok(self.build_directed())
    }

    pub fn build_with_policy(
        self,
        policy: UndeclaredPolicy,
    ) -> GraphInteractionResult<DirectedGraph<V>> {
        match policy {
            UndeclaredPolicy::Promote => Ok(self.build_directed()),
            UndeclaredPolicy::Reject => self.build_checked(),
        }
    }

    pub fn build_acyclic(self) -> Result<DirectedAcyclicGraph<V>, GraphHasCycle> {
        self.build_acyclic_with(Algorithm::default())
    }

    pub fn build_acyclic_with(
        self,
        algorithm: Algorithm,
    ) -> Result<DirectedAcyclicGraph<V>, GraphHasCycle> {
        DirectedAcyclicGraph::build(self.build_directed(), algorithm)
    }
}

impl<V: Vertex> Default for DirectedGraphBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}
