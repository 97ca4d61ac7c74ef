use std::borrow::Borrow;
use std::hash::Hash;

use crate::prelude::*;
use crate::utils::{interner::Resolver, node_map::NodeMap, sym::Sym};

pub mod acyclic;
mod builder;
mod debug;
pub(crate) mod topological_sort;

pub use builder::DirectedGraphBuilder;

/// An immutable directed graph. Every vertex referenced by an edge is
/// a node of the graph; nodes are enumerated in the order they first
/// appeared while building.
pub struct DirectedGraph<V> {
    pub(crate) resolver: Resolver<V>,
    pub(crate) leaves: Vec<Sym>,
    pub(crate) roots: Vec<Sym>,
    pub(crate) children_map: NodeMap,
    pub(crate) parent_map: NodeMap,
    pub(crate) n_edges: usize,
}

impl<V: Vertex> DirectedGraph<V> {
    #[inline(always)]
    pub(crate) fn get_internal<Q>(&self, node: &Q) -> GraphInteractionResult<Sym>
    where
        V: Borrow<Q>,
        Q: ?Sized + Eq + Hash + std::fmt::Debug,
    {
        self.resolver
            .get(node)
            .ok_or_else(|| GraphInteractionError::node_not_exists(node))
    }

    pub fn contains<Q>(&self, node: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: ?Sized + Eq + Hash,
    {
        self.resolver.get(node).is_some()
    }

    pub fn children<Q>(&self, node: &Q) -> GraphInteractionResult<Vec<&V>>
    where
        V: Borrow<Q>,
        Q: ?Sized + Eq + Hash + std::fmt::Debug,
    {
        let node = self.get_internal(node)?;
        Ok(self
            .children_map
            .get(node)
            .iter()
            .map(|child| self.resolve(child))
            .collect())
    }

    pub fn parents<Q>(&self, node: &Q) -> GraphInteractionResult<Vec<&V>>
    where
        V: Borrow<Q>,
        Q: ?Sized + Eq + Hash + std::fmt::Debug,
    {
        let node = self.get_internal(node)?;
        Ok(self
            .parent_map
            .get(node)
            .iter()
            .map(|parent| self.resolve(parent))
            .collect())
    }

    pub fn has_children<Q>(&self, node: &Q) -> GraphInteractionResult<bool>
    where
        V: Borrow<Q>,
        Q: ?Sized + Eq + Hash + std::fmt::Debug,
    {
        let node = self.get_internal(node)?;
        Ok(self.children_map.get(node).len() > 0)
    }

    pub fn has_parents<Q>(&self, node: &Q) -> GraphInteractionResult<bool>
    where
        V: Borrow<Q>,
        Q: ?Sized + Eq + Hash + std::fmt::Debug,
    {
        let node = self.get_internal(node)?;
        Ok(self.parent_map.get(node).len() > 0)
    }

    pub fn edge_exists<Q>(&self, from: &Q, to: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: ?Sized + Eq + Hash,
    {
        match (self.resolver.get(from), self.resolver.get(to)) {
            (Some(from), Some(to)) => self.children_map.get(from).contains(to),
            _ => false,
        }
    }

    /// Orders the graph with the chosen algorithm.
    pub fn topological_sort(&self, algorithm: Algorithm) -> Result<Vec<&V>, GraphHasCycle> {
        let order = topological_sort::sort(self, algorithm)?;
        Ok(self.resolver.resolve_many(&order))
    }

    pub fn topological_sort_dfs(&self) -> Result<Vec<&V>, GraphHasCycle> {
        self.topological_sort(Algorithm::DepthFirst)
    }

    pub fn topological_sort_kahn(&self) -> Result<Vec<&V>, GraphHasCycle> {
        self.topological_sort(Algorithm::Kahn)
    }

    pub fn is_acyclic(&self) -> bool {
        topological_sort::kahn::topological_sort(self).is_ok()
    }
}

impl<V> DirectedGraph<V> {
    #[inline(always)]
    pub(crate) fn resolve(&self, sym: Sym) -> &V {
        self.resolver.resolve(sym)
    }

    #[inline]
    pub(crate) fn node_syms(&self) -> impl Iterator<Item = Sym> + Clone {
        Sym::range(self.n_nodes())
    }

    pub fn n_nodes(&self) -> usize {
        self.resolver.len()
    }

    pub fn n_edges(&self) -> usize {
        self.n_edges
    }

    pub fn is_empty(&self) -> bool {
        self.n_nodes() == 0
    }

    /// Every node, in enumeration order.
    pub fn nodes(&self) -> impl Iterator<Item = &V> {
        self.resolver.values().iter()
    }

    /// Nodes with no incoming edges.
    pub fn roots(&self) -> Vec<&V> {
        self.resolver.resolve_many(&self.roots)
    }

    /// Nodes with no outgoing edges.
    pub fn leaves(&self) -> Vec<&V> {
        self.resolver.resolve_many(&self.leaves)
    }
}
