use super::DirectedGraph;

const DEFAULT_MAX_PRINT_SIZE: usize = 10;
const MAX_PRINTED_EDGES: usize = 10;

/// First edges of the graph, in enumeration order of their parent.
fn printed_edges<V: std::fmt::Debug>(graph: &DirectedGraph<V>) -> Vec<(String, String)> {
    graph
        .children_map
        .iter()
        .flat_map(|(parent, children)| children.iter().map(move |child| (parent, child)))
        .take(MAX_PRINTED_EDGES)
        .map(|(parent, child)| {
            (
                format!("{:?}", graph.resolve(parent)),
                format!("{:?}", graph.resolve(child)),
            )
        })
        .collect()
}

impl<V: std::fmt::Debug> std::fmt::Debug for DirectedGraph<V> {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let n_nodes = self.n_nodes();
        let n_edges = self.n_edges;
        let n_roots = self.roots.len();
        let n_leaves = self.leaves.len();
        let edges = printed_edges(self);
        let max_string_length = edges
            .iter()
            .map(|(parent, child)| parent.len().max(child.len()))
            .fold(DEFAULT_MAX_PRINT_SIZE, usize::max);
        writeln!(f, "# of nodes: {n_nodes}")?;
        writeln!(f, "# of edges: {n_edges}")?;
        writeln!(f, "# of roots: {n_roots}")?;
        writeln!(f, "# of leaves: {n_leaves}")?;
        writeln!(f)?;
        writeln!(
            f,
            "| {:^width$} | {:^width$} |",
            "Parent",
            "Child",
            width = max_string_length
        )?;
        writeln!(
            f,
            "| {:-<width$} | {:-<width$} |",
            "",
            "",
            width = max_string_length
        )?;
        for (parent, child) in &edges {
            writeln!(
                f,
                "| {:width$} | {:width$} |",
                parent,
                child,
                width = max_string_length
            )?;
        }

        if n_edges > edges.len() {
            writeln!(f, "Omitted {} edges", n_edges - edges.len())?;
        }

        Ok(())
    }
}
