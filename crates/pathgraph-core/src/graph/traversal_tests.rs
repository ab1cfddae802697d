//! Tests for depth-first and breadth-first path search.

use super::directed_graph::DirectedGraph;
use super::traversal::{breadth_first_search, depth_first_search, GraphTraversal};
use super::types::{Edge, Link, Node, Vertex};
use std::sync::Arc;

type Graph = DirectedGraph<Node, Link>;

fn node(id: &str) -> Arc<Node> {
    Arc::new(Node::new(id, "Junction"))
}

/// Build a graph from `(from, to)` pairs, all weighted 1.0.
fn build_graph(pairs: &[(&str, &str)]) -> Graph {
    let mut graph = Graph::new();
    for (from, to) in pairs {
        let from = graph.add_or_get_vertex(node(from));
        let to = graph.add_or_get_vertex(node(to));
        graph
            .add_or_get_edge(Arc::new(Link::new(&from, &to, 1.0)))
            .unwrap();
    }
    graph
}

/// Diamond: A → B, A → C, B → D, C → D, plus isolated E.
fn build_diamond_graph() -> Graph {
    let mut graph = build_graph(&[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")]);
    graph.add_or_get_vertex(node("E"));
    graph
}

/// Cycle with a tail: A → B → C → A, C → D.
fn build_cyclic_graph() -> Graph {
    build_graph(&[("A", "B"), ("B", "C"), ("C", "A"), ("C", "D")])
}

fn route(graph: &Graph, path: &super::GraphPath<Node, Link>) -> Vec<String> {
    let ids: Vec<String> = path.vertices().map(|v| v.id().to_string()).collect();
    for pair in path.edges().windows(2) {
        assert_eq!(pair[0].to().id(), pair[1].from().id());
    }
    for edge in path.edges() {
        assert!(graph.get_vertex(edge.to().id()).is_some());
    }
    ids
}

// ── GraphTraversal ─────────────────────────────────────────────────

#[test]
fn test_graph_traversal_impl() {
    let graph = build_diamond_graph();
    assert!(GraphTraversal::vertex(&graph, "A").is_some());
    assert!(GraphTraversal::vertex(&graph, "Z").is_none());

    let targets: Vec<&str> = GraphTraversal::outgoing_edges(&graph, "A")
        .map(|e| e.to().id())
        .collect();
    assert_eq!(targets, vec!["B", "C"]);
    assert_eq!(GraphTraversal::outgoing_edges(&graph, "E").count(), 0);
    assert_eq!(GraphTraversal::outgoing_edges(&graph, "Z").count(), 0);
}

// ── DFS Tests ──────────────────────────────────────────────────────

#[test]
fn test_dfs_same_start_and_target() {
    let graph = build_diamond_graph();
    let path = depth_first_search(&graph, "A", "A").unwrap();
    assert_eq!(path.hop_count(), 0);
    assert_eq!(path.total_weight(), 0.0);
    assert_eq!(path.start().id(), "A");
}

#[test]
fn test_dfs_follows_stored_edge_order() {
    let graph = build_diamond_graph();
    let path = depth_first_search(&graph, "A", "D").unwrap();
    assert_eq!(route(&graph, &path), vec!["A", "B", "D"]);
    assert_eq!(path.total_weight(), 0.0);
}

#[test]
fn test_dfs_prunes_failed_branches() {
    // A's first edge leads into a dead end (B → X); the route must not keep it.
    let graph = build_graph(&[("A", "B"), ("B", "X"), ("A", "C"), ("C", "T")]);
    let path = depth_first_search(&graph, "A", "T").unwrap();

    assert_eq!(route(&graph, &path), vec!["A", "C", "T"]);
    assert_eq!(path.hop_count(), 2);
    // The dead end was still explored.
    assert!(path.has_visited("B"));
    assert!(path.has_visited("X"));
}

#[test]
fn test_dfs_prunes_nested_dead_ends() {
    let graph = build_graph(&[
        ("A", "B"),
        ("B", "C"),
        ("C", "X"),
        ("B", "Y"),
        ("A", "D"),
        ("D", "T"),
    ]);
    let path = depth_first_search(&graph, "A", "T").unwrap();
    assert_eq!(route(&graph, &path), vec!["A", "D", "T"]);
    assert_eq!(path.visited_count(), 7);
}

#[test]
fn test_dfs_cycle_terminates() {
    let graph = build_cyclic_graph();
    let path = depth_first_search(&graph, "A", "D").unwrap();
    assert_eq!(route(&graph, &path), vec!["A", "B", "C", "D"]);

    let back = depth_first_search(&graph, "D", "A");
    assert!(back.is_none());
}

#[test]
fn test_dfs_unreachable_target() {
    let graph = build_diamond_graph();
    assert!(depth_first_search(&graph, "A", "E").is_none());
    assert!(depth_first_search(&graph, "D", "A").is_none());
}

#[test]
fn test_dfs_nonexistent_endpoints() {
    let graph = build_diamond_graph();
    assert!(depth_first_search(&graph, "Z", "A").is_none());
    assert!(depth_first_search(&graph, "A", "Z").is_none());
    assert!(depth_first_search(&graph, "Z", "Z").is_none());
}

#[test]
fn test_dfs_deep_chain_does_not_overflow() {
    let ids: Vec<String> = (0..20_000).map(|i| format!("v{i}")).collect();
    let pairs: Vec<(&str, &str)> = ids
        .windows(2)
        .map(|w| (w[0].as_str(), w[1].as_str()))
        .collect();
    let graph = build_graph(&pairs);

    let path = depth_first_search(&graph, "v0", "v19999").unwrap();
    assert_eq!(path.hop_count(), 19_999);
}

// ── BFS Tests ──────────────────────────────────────────────────────

#[test]
fn test_bfs_same_start_and_target() {
    let graph = build_diamond_graph();
    let path = breadth_first_search(&graph, "D", "D").unwrap();
    assert_eq!(path.hop_count(), 0);
    assert_eq!(path.visited_count(), 1);
}

#[test]
fn test_bfs_diamond() {
    let graph = build_diamond_graph();
    let path = breadth_first_search(&graph, "A", "D").unwrap();
    assert_eq!(route(&graph, &path), vec!["A", "B", "D"]);
    assert_eq!(path.total_weight(), 0.0);
}

#[test]
fn test_bfs_finds_fewest_hops() {
    // DFS goes the long way round; BFS must take the direct shortcut.
    let graph = build_graph(&[
        ("A", "B"),
        ("B", "C"),
        ("C", "D"),
        ("D", "T"),
        ("A", "T"),
    ]);
    let bfs = breadth_first_search(&graph, "A", "T").unwrap();
    let dfs = depth_first_search(&graph, "A", "T").unwrap();

    assert_eq!(route(&graph, &bfs), vec!["A", "T"]);
    assert_eq!(route(&graph, &dfs), vec!["A", "B", "C", "D", "T"]);
}

#[test]
fn test_bfs_records_discovered_vertices_off_route() {
    let graph = build_graph(&[("A", "X"), ("A", "B"), ("A", "Y"), ("B", "T")]);
    let path = breadth_first_search(&graph, "A", "T").unwrap();

    assert_eq!(route(&graph, &path), vec!["A", "B", "T"]);
    for id in ["A", "X", "B", "Y", "T"] {
        assert!(path.has_visited(id), "{id} should be visited");
    }
}

#[test]
fn test_bfs_cycle_terminates() {
    let graph = build_cyclic_graph();
    let path = breadth_first_search(&graph, "B", "D").unwrap();
    assert_eq!(route(&graph, &path), vec!["B", "C", "D"]);
    assert!(breadth_first_search(&graph, "D", "B").is_none());
}

#[test]
fn test_bfs_unreachable_and_nonexistent() {
    let graph = build_diamond_graph();
    assert!(breadth_first_search(&graph, "A", "E").is_none());
    assert!(breadth_first_search(&graph, "E", "A").is_none());
    assert!(breadth_first_search(&graph, "A", "Z").is_none());
    assert!(breadth_first_search(&graph, "Z", "A").is_none());
}

#[test]
fn test_bfs_after_removing_unconnected_vertices() {
    let mut graph = build_diamond_graph();
    graph.remove_unconnected_vertices();
    assert!(breadth_first_search(&graph, "A", "E").is_none());
    assert!(breadth_first_search(&graph, "A", "D").is_some());
}
