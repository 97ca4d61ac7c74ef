use rayon::prelude::*;
use topoweave::prelude::*;

fn get_layered_graph() -> DirectedGraph<String> {
    let mut builder = DirectedGraphBuilder::new();
    for layer in 0..20 {
        for i in 0..50 {
            for j in (0..50).step_by(7) {
                builder.add_edge(format!("{layer}-{i}"), format!("{}-{}", layer + 1, (i + j) % 50));
            }
        }
    }
    builder.build_directed()
}

#[test]
fn one_graph_sorted_from_many_threads() {
    let dg = get_layered_graph();
    let expected_dfs = dg.topological_sort_dfs().unwrap();
    let expected_kahn = dg.topological_sort_kahn().unwrap();

    (0..64).into_par_iter().for_each(|i| {
        if i % 2 == 0 {
            assert_eq!(dg.topological_sort_dfs().unwrap(), expected_dfs);
        } else {
            assert_eq!(dg.topological_sort_kahn().unwrap(), expected_kahn);
        }
    });
}

#[test]
fn independent_graphs_sorted_in_parallel() {
    let results: Vec<bool> = (0..32u32)
        .into_par_iter()
        .map(|n| {
            let mut builder = DirectedGraphBuilder::new();
            builder.add_path(0..=n);
            if n % 2 == 1 {
                builder.add_edge(n, 0);
            }
            builder.build_directed().topological_sort_dfs().is_ok()
        })
        .collect();

    for (n, ok) in results.into_iter().enumerate() {
        assert_eq!(ok, n % 2 == 0, "graph {n}");
    }
}
