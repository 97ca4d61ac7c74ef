use std::ops::Deref;

use crate::prelude::*;
use crate::utils::sym::Sym;

use super::topological_sort;

/// A directed graph known to have no cycles, together with the
/// topological order that proved it.
pub struct DirectedAcyclicGraph<V> {
    pub(crate) dg: Box<DirectedGraph<V>>,
    pub(crate) topological_sort: Vec<Sym>,
    pub(crate) algorithm: Algorithm,
}

impl<V: std::fmt::Debug> std::fmt::Debug for DirectedAcyclicGraph<V> {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        std::fmt::Debug::fmt(&*self.dg, f)
    }
}

impl<V: Vertex> DirectedAcyclicGraph<V> {
    pub fn build(
        dg: DirectedGraph<V>,
        algorithm: Algorithm,
    ) -> Result<DirectedAcyclicGraph<V>, GraphHasCycle> {
        let topological_sort = topological_sort::sort(&dg, algorithm)?;
        Ok(DirectedAcyclicGraph {
            dg: Box::new(dg),
            topological_sort,
            algorithm,
        })
    }
}

impl<V> DirectedAcyclicGraph<V> {
    pub fn into_inner(self) -> DirectedGraph<V> {
        *self.dg
    }

    /// The order computed while building.
    pub fn topological_order(&self) -> Vec<&V> {
        self.dg.resolver.resolve_many(&self.topological_sort)
    }

    /// The algorithm that produced [`Self::topological_order`].
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }
}

impl<V> Deref for DirectedAcyclicGraph<V> {
    type Target = DirectedGraph<V>;
    fn deref(&self) -> &Self::Target {
        &self.dg
    }
}
