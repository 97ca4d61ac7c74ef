pub(crate) mod interner;
pub(crate) mod node_map;
pub(crate) mod sym;
