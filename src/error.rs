use thiserror::Error;

/// The graph holds at least one directed cycle, so no
/// topological order exists. No partial order is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Unable to topologically sort, graph has at least one cycle")]
pub struct GraphHasCycle;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphInteractionError {
    #[error("Node `{0}` does not exist")]
    NodeNotExist(String),
    #[error("Node `{to}` is a neighbor of `{from}` but was never declared")]
    UndeclaredNode { from: String, to: String },
}

impl GraphInteractionError {
    pub(crate) fn node_not_exists(id: &(impl std::fmt::Debug + ?Sized)) -> Self {
        Self::NodeNotExist(format!("{id:?}"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown algorithm `{0}`, expected `dfs` or `kahn`")]
pub struct UnknownAlgorithm(pub String);

/// Any failure of [`crate::topological_sort`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    #[error(transparent)]
    Cycle(#[from] GraphHasCycle),
    #[error(transparent)]
    Interaction(#[from] GraphInteractionError),
}

impl SortError {
    /// Returns `true` if the sort failed because of a cycle.
    #[must_use]
    pub fn is_cycle(&self) -> bool {
        matches!(self, Self::Cycle(..))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_render_vertices_with_debug() {
        let err = GraphInteractionError::node_not_exists("A");
        assert_eq!(err.to_string(), "Node `\"A\"` does not exist");
        let err = GraphInteractionError::node_not_exists(&7);
        assert_eq!(err.to_string(), "Node `7` does not exist");
    }

    #[test]
    fn sort_error_is_transparent() {
        let err = SortError::from(GraphHasCycle);
        assert!(err.is_cycle());
        assert_eq!(err.to_string(), GraphHasCycle.to_string());
    }
}
