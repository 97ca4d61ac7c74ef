use fxhash::FxHashSet;

use super::sym::Sym;

#[derive(Clone, Debug)]
pub(crate) enum LazySet {
    Initialized(FxHashSet<Sym>),
    Uninitialized,
    Empty,
}

impl LazySet {
    pub(crate) fn or_init(&mut self) -> &mut FxHashSet<Sym> {
        if !self.is_initialized() {
            *self = LazySet::Initialized(FxHashSet::default());
        }

        match self {
            LazySet::Initialized(hs) => hs,
            // We just initialized it
            _ => unreachable!(),
        }
    }

    pub(crate) fn into_empty(&mut self) {
        *self = LazySet::Empty
    }

    /// Returns `true` if the lazy set is [`Initialized`].
    ///
    /// [`Initialized`]: LazySet::Initialized
    #[must_use]
    fn is_initialized(&self) -> bool {
        matches!(self, Self::Initialized(..))
    }

    /// Returns `true` if the lazy set is [`Uninitialized`].
    ///
    /// [`Uninitialized`]: LazySet::Uninitialized
    #[must_use]
    pub(crate) fn is_uninitialized(&self) -> bool {
        matches!(self, Self::Uninitialized)
    }

    pub(crate) fn len(&self) -> usize {
        match self {
            LazySet::Initialized(hs) => hs.len(),
            _ => 0,
        }
    }

    #[inline]
    pub(crate) fn contains(&self, sym: Sym) -> bool {
        match self {
            LazySet::Initialized(hs) => hs.contains(&sym),
            _ => false,
        }
    }

    #[inline]
    pub(crate) fn iter(&self) -> LazySetIter<'_> {
        match self {
            LazySet::Initialized(hs) => LazySetIter(Some(hs.iter())),
            _ => LazySetIter(None),
        }
    }
}

/// Iterator over a [`LazySet`]; yields nothing for an empty set.
pub(crate) struct LazySetIter<'a>(Option<std::collections::hash_set::Iter<'a, Sym>>);

impl Iterator for LazySetIter<'_> {
    type Item = Sym;
    #[inline]
    fn next(&mut self) -> Option<Sym> {
        self.0.as_mut()?.next().copied()
    }
}

#[derive(Clone, Debug)]
pub(crate) struct NodeMap {
    map: Vec<LazySet>,
}

impl NodeMap {
    pub(crate) fn new(n_nodes: usize) -> Self {
        let mut map = Vec::new();
        map.resize(n_nodes, LazySet::Uninitialized);
        Self { map }
    }
    #[inline]
    pub(crate) fn get(&self, node: Sym) -> &LazySet {
        &self.map[node.into_usize()]
    }
    #[inline]
    pub(crate) fn get_mut(&mut self, node: Sym) -> &mut LazySet {
        &mut self.map[node.into_usize()]
    }
    pub(crate) fn iter(&self) -> impl Iterator<Item = (Sym, &LazySet)> {
        self.map
            .iter()
            .enumerate()
            .map(|(i, set)| (Sym::new(i as u32), set))
    }
}
