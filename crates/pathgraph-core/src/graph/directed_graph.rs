//! In-memory directed graph store with identity-based deduplication.
//!
//! Vertices are registered once per id; the registered `Arc` is the instance
//! every filed edge must originate at. Each vertex entry owns its outgoing
//! edges, keyed by destination id so a vertex has at most one edge to any
//! other vertex.

use indexmap::map::Values;
use indexmap::IndexMap;
use rustc_hash::{FxBuildHasher, FxHashSet};
use std::fmt;
use std::iter::Flatten;
use std::option;
use std::sync::Arc;

use crate::config::{GraphConfig, SearchConfig};
use crate::error::{Error, Result};

use super::types::{Edge, Vertex};

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Iterator over the outgoing edges of one vertex, in insertion order.
pub type OutgoingEdges<'a, E> = Flatten<option::IntoIter<Values<'a, String, Arc<E>>>>;

/// A registered vertex and the edges leaving it.
#[derive(Debug)]
struct VertexEntry<V, E> {
    vertex: Arc<V>,
    /// Outgoing edges: destination id -> edge, in insertion order.
    edges: FxIndexMap<String, Arc<E>>,
}

impl<V, E> VertexEntry<V, E> {
    fn new(vertex: Arc<V>) -> Self {
        Self {
            vertex,
            edges: FxIndexMap::default(),
        }
    }
}

/// Directed graph over any vertex/edge pair implementing the capability traits.
///
/// Representation invariants, held between public operations:
///
/// 1. vertices are unique by [`Vertex::id`];
/// 2. every edge filed under a vertex has [`Edge::from`] pointing at that
///    registered instance (`Arc::ptr_eq`), not just an id-equal duplicate;
/// 3. a vertex only holds edges that leave it.
///
/// Lookups by id are O(1) amortized. Iteration follows insertion order.
///
/// # Example
///
/// ```rust
/// use pathgraph_core::graph::{DirectedGraph, Link, Node};
/// use std::sync::Arc;
///
/// let mut graph: DirectedGraph<Node, Link> = DirectedGraph::new();
/// let a = graph.add_or_get_vertex(Arc::new(Node::new("A", "Junction")));
/// let b = Arc::new(Node::new("B", "Junction"));
///
/// let link = Arc::new(Link::new(&a, &b, 1.0));
/// let filed = graph.add_or_get_edge(Arc::clone(&link)).unwrap();
///
/// assert!(Arc::ptr_eq(&filed, &link));
/// assert_eq!(graph.num_vertices(), 2);
/// assert_eq!(graph.num_edges(), 1);
/// ```
#[derive(Debug)]
pub struct DirectedGraph<V, E> {
    vertices: FxIndexMap<String, VertexEntry<V, E>>,
    search: SearchConfig,
}

impl<V, E> Default for DirectedGraph<V, E> {
    fn default() -> Self {
        Self {
            vertices: FxIndexMap::default(),
            search: SearchConfig::default(),
        }
    }
}

impl<V: Vertex, E: Edge<Vertex = V>> DirectedGraph<V, E> {
    /// Creates a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph with room for `expected_vertices` vertices.
    #[must_use]
    pub fn with_capacity(expected_vertices: usize) -> Self {
        Self {
            vertices: FxIndexMap::with_capacity_and_hasher(expected_vertices, FxBuildHasher),
            search: SearchConfig::default(),
        }
    }

    /// Creates a graph sized and tuned by `config`.
    #[must_use]
    pub fn with_config(config: &GraphConfig) -> Self {
        let mut graph = Self::with_capacity(config.expected_vertices);
        graph.search = config.search;
        graph
    }

    /// Returns the search settings used by the weighted searches.
    #[must_use]
    pub fn search_config(&self) -> SearchConfig {
        self.search
    }

    /// Replaces the search settings.
    pub fn set_search_config(&mut self, search: SearchConfig) {
        self.search = search;
    }

    // ── Vertices ───────────────────────────────────────────────────────

    /// Registers `vertex` unless a vertex with the same id already exists.
    ///
    /// Returns the registered instance: `vertex` itself if it was added, or
    /// the existing duplicate, in which case `vertex` is dropped.
    pub fn add_or_get_vertex(&mut self, vertex: Arc<V>) -> Arc<V> {
        let index = self.register(&vertex);
        Arc::clone(&self.vertices[index].vertex)
    }

    /// Registers every vertex not yet present.
    ///
    /// Returns the number of vertices that were actually added.
    pub fn add_vertices<I>(&mut self, vertices: I) -> usize
    where
        I: IntoIterator<Item = Arc<V>>,
    {
        let mut added = 0;
        for vertex in vertices {
            let registered = self.add_or_get_vertex(Arc::clone(&vertex));
            if Arc::ptr_eq(&registered, &vertex) {
                added += 1;
            }
        }
        added
    }

    /// Gets a vertex by id.
    #[must_use]
    pub fn get_vertex(&self, id: &str) -> Option<&Arc<V>> {
        self.vertices.get(id).map(|entry| &entry.vertex)
    }

    /// Returns true if a vertex with the given id is registered.
    #[must_use]
    pub fn contains_vertex(&self, id: &str) -> bool {
        self.vertices.contains_key(id)
    }

    /// Iterates all registered vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &Arc<V>> + '_ {
        self.vertices.values().map(|entry| &entry.vertex)
    }

    /// Returns the total number of vertices.
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    // ── Edges ──────────────────────────────────────────────────────────

    /// Files `edge` under its origin vertex unless an edge to the same
    /// destination is already there.
    ///
    /// Missing endpoints are registered first; an endpoint whose id is already
    /// taken keeps the existing registration. Returns the edge of the origin
    /// that leads to the destination: `edge` itself if it was filed, or the
    /// existing duplicate.
    ///
    /// If `edge.from()` is not the registered instance but `edge.to()` is, the
    /// edge cannot be filed without breaking invariant 2: it is left out of
    /// the graph and handed back unchanged.
    ///
    /// # Errors
    ///
    /// Returns `Error::InconsistentVertex` if both endpoints are instances other
    /// than the vertices registered under their ids.
    pub fn add_or_get_edge(&mut self, edge: Arc<E>) -> Result<Arc<E>> {
        let from_index = self.register(edge.from());
        let to_index = self.register(edge.to());
        let from_registered = Arc::ptr_eq(&self.vertices[from_index].vertex, edge.from());
        let to_registered = Arc::ptr_eq(&self.vertices[to_index].vertex, edge.to());

        if !from_registered {
            if !to_registered {
                return Err(Error::InconsistentVertex {
                    from: edge.from().id().to_string(),
                    to: edge.to().id().to_string(),
                });
            }
            tracing::warn!(
                from = edge.from().id(),
                to = edge.to().id(),
                "Edge origin is a duplicate of a registered vertex; edge not filed"
            );
            return Ok(edge);
        }

        let edges = &mut self.vertices[from_index].edges;
        if let Some(existing) = edges.get(edge.to().id()) {
            return Ok(Arc::clone(existing));
        }
        edges.insert(edge.to().id().to_string(), Arc::clone(&edge));
        Ok(edge)
    }

    /// Files every edge not yet present.
    ///
    /// Returns the number of edges that were filed as passed in (not replaced
    /// by an existing duplicate). Stops at the first inconsistent edge.
    pub fn add_edges<I>(&mut self, edges: I) -> Result<usize>
    where
        I: IntoIterator<Item = Arc<E>>,
    {
        let mut added = 0;
        for edge in edges {
            let filed = self.add_or_get_edge(Arc::clone(&edge))?;
            if Arc::ptr_eq(&filed, &edge) {
                added += 1;
            }
        }
        Ok(added)
    }

    /// Iterates the outgoing edges of a vertex in insertion order.
    ///
    /// Yields nothing if the vertex is not registered.
    pub fn outgoing_edges(&self, id: &str) -> OutgoingEdges<'_, E> {
        self.vertices
            .get(id)
            .map(|entry| entry.edges.values())
            .into_iter()
            .flatten()
    }

    /// Gets the edge from `from_id` to `to_id`, if filed.
    #[must_use]
    pub fn edge_between(&self, from_id: &str, to_id: &str) -> Option<&Arc<E>> {
        self.vertices.get(from_id)?.edges.get(to_id)
    }

    /// Returns the out-degree of a vertex.
    #[must_use]
    pub fn out_degree(&self, id: &str) -> usize {
        self.vertices.get(id).map_or(0, |entry| entry.edges.len())
    }

    /// Returns the total number of edges.
    #[must_use]
    pub fn num_edges(&self) -> usize {
        self.vertices.values().map(|entry| entry.edges.len()).sum()
    }

    // ── Maintenance ────────────────────────────────────────────────────

    /// Removes vertices that have neither outgoing nor incoming edges.
    ///
    /// A vertex without outgoing edges is kept as long as some edge leads to it.
    /// Returns the number of vertices removed.
    pub fn remove_unconnected_vertices(&mut self) -> usize {
        let destinations: FxHashSet<String> = self
            .vertices
            .values()
            .flat_map(|entry| entry.edges.keys().cloned())
            .collect();

        let before = self.vertices.len();
        self.vertices
            .retain(|id, entry| !entry.edges.is_empty() || destinations.contains(id));
        let removed = before - self.vertices.len();

        tracing::debug!(
            removed,
            remaining = self.vertices.len(),
            "Removed unconnected vertices"
        );
        removed
    }

    /// Returns the index of the entry registered under `vertex`'s id,
    /// registering `vertex` if the id is new.
    fn register(&mut self, vertex: &Arc<V>) -> usize {
        match self.vertices.get_index_of(vertex.id()) {
            Some(index) => index,
            None => {
                let (index, _) = self
                    .vertices
                    .insert_full(vertex.id().to_string(), VertexEntry::new(Arc::clone(vertex)));
                index
            }
        }
    }
}

impl<V: Vertex + fmt::Display, E> fmt::Display for DirectedGraph<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ ")?;
        for (i, entry) in self.vertices.values().enumerate() {
            if i > 0 {
                write!(f, ",\n  ")?;
            }
            write!(f, "{}", entry.vertex)?;
        }
        write!(f, "\n}}")
    }
}
