//! In-memory directed graph and path search.
//!
//! Provides the graph store, the vertex/edge capability traits, and four
//! searches that all take plain vertex ids: depth-first, breadth-first,
//! Dijkstra and A*.
//!
//! # Example
//!
//! ```rust
//! use pathgraph_core::graph::{breadth_first_search, DirectedGraph, Link, Node};
//! use std::sync::Arc;
//!
//! let a = Arc::new(Node::new("A", "Junction"));
//! let b = Arc::new(Node::new("B", "Junction"));
//! let c = Arc::new(Node::new("C", "Junction"));
//!
//! let mut graph: DirectedGraph<Node, Link> = DirectedGraph::new();
//! graph.add_or_get_edge(Arc::new(Link::new(&a, &b, 1.0))).unwrap();
//! graph.add_or_get_edge(Arc::new(Link::new(&b, &c, 1.0))).unwrap();
//!
//! let path = breadth_first_search(&graph, "A", "C").unwrap();
//! assert_eq!(path.to_string(), "Weight=0.000000 Length=3 Visited=3 (A, B, C)");
//! assert!(breadth_first_search(&graph, "C", "A").is_none());
//! ```

mod directed_graph;
mod frontier;
mod path;
pub mod shortest_path;
pub mod traversal;
mod types;

#[cfg(test)]
mod traversal_tests;

pub use directed_graph::{DirectedGraph, OutgoingEdges};
pub use path::{GraphPath, PathSummary};
pub use shortest_path::{a_star_shortest_path, dijkstra_shortest_path};
pub use traversal::{breadth_first_search, depth_first_search, GraphTraversal, PathOf};
pub use types::{Edge, Link, Node, Vertex};
