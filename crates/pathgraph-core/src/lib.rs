//! # pathgraph core
//!
//! Generic in-memory directed graph with path search.
//!
//! Domain models plug in by implementing two small capability traits:
//! [`Vertex`](graph::Vertex) (an id) and [`Edge`](graph::Edge) (an origin and a
//! destination). The [`DirectedGraph`](graph::DirectedGraph) store deduplicates
//! vertices by id and edges by destination, and keeps every filed edge pointing
//! at the registered vertex instance.
//!
//! ## Searches
//!
//! - [`depth_first_search`](graph::depth_first_search): any path
//! - [`breadth_first_search`](graph::breadth_first_search): fewest edges
//! - [`dijkstra_shortest_path`](graph::dijkstra_shortest_path): least total weight
//! - [`a_star_shortest_path`](graph::a_star_shortest_path): least total weight,
//!   guided by an admissible heuristic
//!
//! All searches return `None` when an id is unknown or no path exists.
//!
//! ## Quick Start
//!
//! ```rust
//! use pathgraph_core::graph::{a_star_shortest_path, DirectedGraph, Link, Node};
//! use std::sync::Arc;
//!
//! let a = Arc::new(Node::new("A", "Junction"));
//! let b = Arc::new(Node::new("B", "Junction"));
//! let d = Arc::new(Node::new("D", "Junction"));
//!
//! let mut graph: DirectedGraph<Node, Link> = DirectedGraph::new();
//! graph.add_edges([
//!     Arc::new(Link::new(&a, &b, 1.0)),
//!     Arc::new(Link::new(&b, &d, 1.0)),
//!     Arc::new(Link::new(&a, &d, 3.0)),
//! ])?;
//!
//! let path = a_star_shortest_path(&graph, "A", "D", Link::weight, |_, _| 0.0)
//!     .ok_or("no route")?;
//! assert!((path.total_weight() - 2.0).abs() < 1e-9);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![cfg_attr(
    test,
    allow(
        clippy::float_cmp,
        clippy::doc_markdown,
        clippy::uninlined_format_args,
        clippy::manual_assert
    )
)]

pub mod config;
pub mod error;
pub mod graph;

pub use config::{FrontierStrategy, GraphConfig, SearchConfig};
pub use error::{Error, Result};
pub use graph::{DirectedGraph, Edge, GraphPath, GraphTraversal, Vertex};
