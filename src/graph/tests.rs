//! Tests for the graph algorithms.

use super::*;
use crate::Error;

fn sample_undirected() -> Graph<&'static str> {
    let mut g = Graph::undirected();
    for (u, v) in [
        ("A", "B"),
        ("A", "C"),
        ("B", "D"),
        ("B", "E"),
        ("C", "F"),
        ("E", "F"),
        ("D", "G"),
    ] {
        g.add_edge(u, v);
    }
    g
}

fn sample_weighted() -> Graph<&'static str, u32> {
    let mut g = Graph::directed();
    for (u, v, w) in [
        ("A", "B", 4),
        ("A", "C", 2),
        ("B", "D", 3),
        ("B", "E", 1),
        ("C", "B", 1),
        ("C", "D", 5),
        ("D", "E", 2),
        ("E", "F", 3),
        ("D", "F", 6),
    ] {
        g.add_weighted_edge(u, v, w);
    }
    g
}

fn course_dag() -> Graph<&'static str> {
    let mut g = Graph::directed();
    for (u, v) in [
        ("CIS 120", "CIS 133"),
        ("CIS 133", "CIS 195"),
        ("CIS 133", "CIS 233"),
        ("CIS 133", "CIS 275"),
        ("CIS 195", "CIS 425"),
        ("CIS 233", "CIS 425"),
        ("CIS 275", "CIS 425"),
        ("CIS 275", "CIS 350"),
        ("CIS 350", "CIS 410"),
        ("CIS 410", "CIS 425"),
    ] {
        g.add_edge(u, v);
    }
    g
}

#[test]
fn construction() {
    let g = sample_undirected();
    assert_eq!(g.node_count(), 7);
    assert_eq!(g.edge_count(), 7);
    assert!(!g.is_directed());
    assert!(g.has_edge(&"F", &"C"));
    assert!(!g.has_edge(&"A", &"G"));
    assert_eq!(
        g.nodes().copied().collect::<Vec<_>>(),
        ["A", "B", "C", "D", "E", "F", "G"]
    );
    let around_b: Vec<_> = g.neighbors(&"B").map(|(n, _)| *n).collect();
    assert_eq!(around_b, ["A", "D", "E"]);
    assert_eq!(g.neighbors(&"Z").count(), 0);
}

#[test]
fn breadth_first() {
    let g = sample_undirected();
    assert_eq!(g.bfs(&"A"), ["A", "B", "C", "D", "E", "F", "G"]);
    assert_eq!(
        g.bfs_level_order(&"A"),
        vec![vec!["A"], vec!["B", "C"], vec!["D", "E", "F"], vec!["G"]]
    );
    assert_eq!(g.bfs_shortest_path(&"A", &"G"), ["A", "B", "D", "G"]);
    assert_eq!(g.bfs_shortest_path(&"E", &"E"), ["E"]);
    assert!(g.bfs(&"Z").is_empty());
}

#[test]
fn bfs_shortest_path_unreachable() {
    let mut g = sample_weighted();
    g.add_node("Z");
    assert!(g.bfs_shortest_path(&"F", &"A").is_empty());
    assert!(g.bfs_shortest_path(&"A", &"Z").is_empty());
    assert_eq!(g.bfs_shortest_path(&"A", &"F"), ["A", "B", "D", "F"]);
}

#[test]
fn depth_first() {
    let g = sample_undirected();
    let expected = ["A", "B", "D", "G", "E", "F", "C"];
    assert_eq!(g.dfs_recursive(&"A"), expected);
    assert_eq!(g.dfs_iterative(&"A"), expected);

    let dag = course_dag();
    assert_eq!(dag.dfs_iterative(&"CIS 120"), dag.dfs_recursive(&"CIS 120"));
}

#[test]
fn all_simple_paths() {
    let g = sample_undirected();
    assert_eq!(
        g.dfs_paths(&"A", &"F"),
        vec![vec!["A", "B", "E", "F"], vec!["A", "C", "F"]]
    );
    assert_eq!(g.dfs_paths(&"G", &"G"), vec![vec!["G"]]);
    assert!(g.dfs_paths(&"A", &"Z").is_empty());
}

#[test]
fn dijkstra_distances_and_path() {
    let g = sample_weighted();
    let paths = g.dijkstra(&"A").unwrap();

    assert_eq!(paths.source(), Some(&"A"));
    assert_eq!(paths.distance(&"A"), Some(0));
    assert_eq!(paths.distance(&"B"), Some(3));
    assert_eq!(paths.distance(&"D"), Some(6));
    assert_eq!(paths.distance(&"F"), Some(7));
    assert_eq!(paths.previous(&"D"), Some(&"B"));
    assert_eq!(paths.previous(&"A"), None);
    assert_eq!(paths.path_to(&"F"), ["A", "C", "B", "E", "F"]);

    let all: Vec<_> = paths.distances().map(|(n, d)| (*n, d)).collect();
    assert_eq!(all[0], ("A", Some(0)));
    assert_eq!(all.len(), 6);

    assert_eq!(
        g.shortest_weighted_path(&"A", &"F").unwrap(),
        (vec!["A", "C", "B", "E", "F"], Some(7))
    );
}

#[test]
fn dijkstra_unreachable_and_unknown() {
    let mut g = sample_weighted();
    g.add_node("Z");

    let (path, distance) = g.shortest_weighted_path(&"A", &"Z").unwrap();
    assert!(path.is_empty());
    assert_eq!(distance, None);

    let from_f = g.dijkstra(&"F").unwrap();
    assert!(!from_f.is_reachable(&"A"));
    assert!(from_f.path_to(&"A").is_empty());

    let from_nowhere = g.dijkstra(&"Q").unwrap();
    assert_eq!(from_nowhere.source(), None);
    assert!(from_nowhere.distances().all(|(_, d)| d.is_none()));
}

#[test]
fn dijkstra_float_weights() {
    let mut g: Graph<u8, f64> = Graph::undirected();
    g.add_weighted_edge(1, 2, 0.5);
    g.add_weighted_edge(2, 3, 0.25);
    g.add_weighted_edge(1, 3, 1.0);
    let (path, distance) = g.shortest_weighted_path(&1, &3).unwrap();
    assert_eq!(path, [1, 2, 3]);
    assert_eq!(distance, Some(0.75));
}

#[test]
fn dijkstra_rejects_negative_weight() {
    let mut g: Graph<&str, i32> = Graph::directed();
    g.add_weighted_edge("A", "B", 2);
    g.add_weighted_edge("B", "C", -1);
    let err = g.dijkstra(&"A").unwrap_err();
    assert_eq!(
        err,
        Error::NegativeWeight {
            from: "\"B\"".into(),
            to: "\"C\"".into(),
        }
    );
    assert!(g.shortest_weighted_path(&"A", &"C").is_err());
}

#[test]
fn dijkstra_rejects_nan_weight() {
    let mut g: Graph<&str, f64> = Graph::directed();
    g.add_weighted_edge("A", "B", 1.0);
    g.add_weighted_edge("B", "C", f64::NAN);
    assert!(matches!(
        g.dijkstra(&"A"),
        Err(Error::NegativeWeight { .. })
    ));
}

#[test]
fn dijkstra_large_weights_do_not_wrap() {
    let mut g: Graph<&str, u32> = Graph::directed();
    g.add_weighted_edge("a", "b", u32::MAX);
    g.add_weighted_edge("b", "c", 1);
    assert_eq!(
        g.dijkstra(&"a").unwrap_err(),
        Error::DistanceOverflow {
            node: "\"c\"".into()
        }
    );

    // A representable detour wins over the overflowing route.
    g.add_weighted_edge("a", "d", 2);
    g.add_weighted_edge("d", "c", 3);
    let paths = g.dijkstra(&"a").unwrap();
    assert_eq!(paths.distance(&"b"), Some(u32::MAX));
    assert_eq!(paths.distance(&"c"), Some(5));
    assert_eq!(paths.path_to(&"c"), ["a", "d", "c"]);
}

#[test]
fn cycle_detection() {
    assert!(sample_undirected().has_cycle());
    assert!(!sample_weighted().has_cycle());

    let mut dag = course_dag();
    assert!(!dag.has_cycle());
    dag.add_edge("CIS 425", "CIS 120");
    assert!(dag.has_cycle());

    let mut path: Graph<i32> = Graph::undirected();
    path.add_edge(1, 2);
    path.add_edge(2, 3);
    path.add_edge(4, 5);
    assert!(!path.has_cycle());
    path.add_edge(5, 5);
    assert!(path.has_cycle());

    let mut looped: Graph<i32> = Graph::directed();
    looped.add_edge(1, 1);
    assert!(looped.has_cycle());

    // A directed diamond has no cycle even though two paths meet.
    let mut diamond: Graph<char> = Graph::directed();
    diamond.add_edge('a', 'b');
    diamond.add_edge('a', 'c');
    diamond.add_edge('b', 'd');
    diamond.add_edge('c', 'd');
    assert!(!diamond.has_cycle());
}

#[test]
fn topological_order() {
    let dag = course_dag();
    assert_eq!(
        dag.topological_sort().unwrap(),
        [
            "CIS 120", "CIS 133", "CIS 195", "CIS 233", "CIS 275", "CIS 350", "CIS 410",
            "CIS 425"
        ]
    );
}

#[test]
fn topological_sort_errors() {
    assert_eq!(
        sample_undirected().topological_sort(),
        Err(Error::UndirectedGraph)
    );

    let mut cyclic = course_dag();
    cyclic.add_edge("CIS 425", "CIS 120");
    assert_eq!(
        cyclic.topological_sort(),
        Err(Error::CycleDetected {
            ordered: 0,
            nodes: 8
        })
    );
}

#[test]
fn components() {
    let mut g = sample_undirected();
    assert_eq!(g.connected_components().len(), 1);
    g.add_edge("X", "Y");
    g.add_node("Q");
    assert_eq!(
        g.connected_components(),
        vec![
            vec!["A", "B", "C", "D", "E", "F", "G"],
            vec!["X", "Y"],
            vec!["Q"],
        ]
    );

    let mut directed: Graph<i32> = Graph::directed();
    directed.add_edge(1, 2);
    directed.add_edge(3, 2);
    directed.add_node(4);
    directed.add_edge(5, 6);
    assert_eq!(
        directed.connected_components(),
        vec![vec![1, 2, 3], vec![4], vec![5, 6]]
    );
}

#[test]
fn display() {
    let mut g: Graph<&str> = Graph::directed();
    g.add_weighted_edge("A", "B", 4);
    assert_eq!(
        g.to_string(),
        "Directed Graph (2 nodes):\n  A → [(B, 4)]\n  B → []"
    );
}
