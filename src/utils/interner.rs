use std::borrow::Borrow;
use std::hash::Hash;

use fxhash::FxHashMap;

use super::sym::Sym;

#[derive(Clone)]
pub(crate) struct InternerBuilder<V> {
    count: Sym,
    map_values: FxHashMap<V, Sym>,
    values: Vec<V>,
}

impl<V> InternerBuilder<V>
where
    V: Clone + Eq + Hash,
{
    pub(crate) fn new() -> Self {
        InternerBuilder {
            count: Sym::new(0),
            map_values: FxHashMap::default(),
            values: Vec::new(),
        }
    }

    pub(crate) fn get_or_intern(&mut self, val: V) -> Sym {
        match self.map_values.get(&val) {
            Some(sym) => *sym,
            None => {
                let sym = self.count;
                self.values.push(val.clone());
                self.map_values.insert(val, sym);
                self.count += 1;
                sym
            }
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.values.len()
    }

    pub(crate) fn build(self) -> Resolver<V> {
        let mut map_values = self.map_values;
        map_values.shrink_to_fit();
        Resolver {
            map_values,
            values: self.values.into_boxed_slice(),
        }
    }
}

/// Frozen, read-only side of the interner.
pub(crate) struct Resolver<V> {
    map_values: FxHashMap<V, Sym>,
    values: Box<[V]>,
}

impl<V> Resolver<V>
where
    V: Eq + Hash,
{
    #[inline(always)]
    pub(crate) fn get<Q>(&self, val: &Q) -> Option<Sym>
    where
        V: Borrow<Q>,
        Q: ?Sized + Eq + Hash,
    {
        self.map_values.get(val).copied()
    }
}

impl<V> Resolver<V> {
    /// Symbols only come from this resolver's own builder, so
    /// indexing is always in bounds.
    #[inline(always)]
    pub(crate) fn resolve(&self, sym: Sym) -> &V {
        &self.values[sym.into_usize()]
    }
    #[inline]
    pub(crate) fn resolve_many(&self, syms: &[Sym]) -> Vec<&V> {
        syms.iter().map(|&sym| self.resolve(sym)).collect()
    }
    #[inline]
    pub(crate) fn values(&self) -> &[V] {
        &self.values
    }
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.values.len()
    }
}
