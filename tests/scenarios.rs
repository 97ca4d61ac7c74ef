use std::collections::HashMap;

use topoweave::prelude::*;

const ALGORITHMS: [Algorithm; 2] = [Algorithm::DepthFirst, Algorithm::Kahn];

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn position<V: Vertex>(order: &[&V], node: &V) -> usize {
    order
        .iter()
        .position(|&n| n == node)
        .unwrap_or_else(|| panic!("{node:?} missing from {order:?}"))
}

fn assert_valid_order<V: Vertex>(dg: &DirectedGraph<V>, order: &[&V]) {
    assert_eq!(order.len(), dg.n_nodes());
    for node in dg.nodes() {
        for child in dg.children(node).unwrap() {
            assert!(position(order, node) < position(order, child));
        }
    }
}

fn valid_edges() -> [(i32, i32); 6] {
    [(2, 3), (5, 0), (4, 0), (4, 1), (5, 2), (3, 1)]
}

fn invalid_edges() -> [(i32, i32); 6] {
    [(2, 3), (5, 0), (4, 0), (4, 1), (5, 2), (3, 2)]
}

#[test]
fn diamond_orders_a_before_b_and_c_before_d() {
    init_logger();
    let dg = DirectedGraphBuilder::from_adjacency([
        ("A", vec!["B", "C"]),
        ("B", vec!["D"]),
        ("C", vec!["D"]),
        ("D", vec![]),
    ])
    .build_directed();

    for algorithm in ALGORITHMS {
        let order = dg.topological_sort(algorithm).unwrap();
        assert!(
            order == [&"A", &"B", &"C", &"D"] || order == [&"A", &"C", &"B", &"D"],
            "{algorithm}: {order:?}"
        );
    }
}

#[test]
fn three_cycle_is_detected() {
    init_logger();
    let dg = DirectedGraphBuilder::from_adjacency([("A", ["B"]), ("B", ["C"]), ("C", ["A"])])
        .build_directed();

    for algorithm in ALGORITHMS {
        assert_eq!(dg.topological_sort(algorithm), Err(GraphHasCycle));
    }
}

#[test]
fn edge_list_is_sorted_by_both_algorithms() {
    init_logger();
    let dg = DirectedGraphBuilder::from_edges(valid_edges()).build_directed();

    for algorithm in ALGORITHMS {
        let order = dg.topological_sort(algorithm).unwrap();
        assert_valid_order(&dg, &order);
        for first in [&4, &5] {
            for later in [&2, &0, &1] {
                if dg.edge_exists(first, later) {
                    assert!(position(&order, first) < position(&order, later));
                }
            }
        }
        assert!(position(&order, &2) < position(&order, &3));
        assert!(position(&order, &3) < position(&order, &1));
    }
}

#[test]
fn edge_list_with_back_edge_is_detected() {
    init_logger();
    let dg = DirectedGraphBuilder::from_edges(invalid_edges()).build_directed();

    for algorithm in ALGORITHMS {
        assert_eq!(dg.topological_sort(algorithm), Err(GraphHasCycle));
    }
    assert!(!dg.is_acyclic());
}

#[test]
fn empty_graph_is_an_empty_order() {
    let dg = DirectedGraphBuilder::<String>::new().build_directed();

    for algorithm in ALGORITHMS {
        assert_eq!(dg.topological_sort(algorithm), Ok(vec![]));
    }
}

#[test]
fn self_loop_is_a_cycle() {
    let mut builder = DirectedGraphBuilder::new();
    builder.add_node("lonely").add_edge("loop", "loop");
    let dg = builder.build_directed();

    for algorithm in ALGORITHMS {
        assert_eq!(dg.topological_sort(algorithm), Err(GraphHasCycle));
    }
}

#[test]
fn one_call_sort_over_hash_map() {
    init_logger();
    let graph: HashMap<String, Vec<String>> = [
        ("shirt", vec!["tie", "belt"]),
        ("tie", vec!["jacket"]),
        ("pants", vec!["shoes", "belt"]),
        ("belt", vec!["jacket"]),
        ("socks", vec!["shoes"]),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.into_iter().map(String::from).collect()))
    .collect();

    for algorithm in ALGORITHMS {
        let config = SortConfig::new().with_algorithm(algorithm);
        let order = topoweave::topological_sort(graph.clone(), &config).unwrap();
        assert_eq!(order.len(), 7);
        let at = |name: &str| order.iter().position(|n| n == name).unwrap();
        assert!(at("shirt") < at("tie"));
        assert!(at("tie") < at("jacket"));
        assert!(at("belt") < at("jacket"));
        assert!(at("pants") < at("belt"));
        assert!(at("socks") < at("shoes"));
    }

    let strict = SortConfig::new().with_undeclared(UndeclaredPolicy::Reject);
    let err = topoweave::topological_sort(graph, &strict).unwrap_err();
    assert!(matches!(
        err,
        SortError::Interaction(GraphInteractionError::UndeclaredNode { .. })
    ));
}

#[test]
fn acyclic_graph_caches_its_order() {
    let mut builder = DirectedGraphBuilder::from_edges(valid_edges());
    builder.add_node(42);
    let dag = builder.build_acyclic_with(Algorithm::Kahn).unwrap();

    assert_valid_order(&dag, &dag.topological_order());
    assert_eq!(dag.topological_order().first(), Some(&&5));
    assert_eq!(dag.roots(), [&5, &4, &42]);
}
