//! Search results: the route found between two vertices.

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use super::types::{Edge, Vertex};

/// A route discovered by one of the path searches.
///
/// The edges form a contiguous chain: the first edge leaves [`start`](Self::start)
/// and every following edge leaves the vertex the previous one arrived at. An
/// empty chain means the route begins and ends at `start`.
///
/// `total_weight` is the summed edge weight for Dijkstra and A*, and `0.0`
/// for depth-first and breadth-first searches (use [`hop_count`](Self::hop_count)).
/// The visited set records every vertex the search touched, which is always a
/// superset of the vertices on the route.
#[derive(Debug, Clone)]
pub struct GraphPath<V, E> {
    start: Arc<V>,
    edges: Vec<Arc<E>>,
    total_weight: f64,
    visited: IndexMap<String, Arc<V>, FxBuildHasher>,
}

impl<V: Vertex, E: Edge<Vertex = V>> GraphPath<V, E> {
    /// Starts an empty route at `start`, which counts as visited.
    pub(crate) fn starting_at(start: &Arc<V>) -> Self {
        let mut path = Self {
            start: Arc::clone(start),
            edges: Vec::new(),
            total_weight: 0.0,
            visited: IndexMap::default(),
        };
        path.visit(start);
        path
    }

    /// Records a vertex as touched by the search.
    pub(crate) fn visit(&mut self, vertex: &Arc<V>) {
        if !self.visited.contains_key(vertex.id()) {
            self.visited
                .insert(vertex.id().to_string(), Arc::clone(vertex));
        }
    }

    pub(crate) fn with_edges(mut self, edges: Vec<Arc<E>>) -> Self {
        self.edges = edges;
        self
    }

    pub(crate) fn with_total_weight(mut self, total_weight: f64) -> Self {
        self.total_weight = total_weight;
        self
    }

    /// Returns the vertex the route begins at.
    #[must_use]
    pub fn start(&self) -> &Arc<V> {
        &self.start
    }

    /// Returns the vertex the route ends at.
    #[must_use]
    pub fn end(&self) -> &Arc<V> {
        self.edges.last().map_or(&self.start, |edge| edge.to())
    }

    /// Returns the edges of the route in travel order.
    #[must_use]
    pub fn edges(&self) -> &[Arc<E>] {
        &self.edges
    }

    /// Returns the accumulated weight of the route.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Returns the number of edges on the route.
    #[must_use]
    pub fn hop_count(&self) -> usize {
        self.edges.len()
    }

    /// Iterates the vertices on the route, `start` first.
    pub fn vertices(&self) -> impl Iterator<Item = &Arc<V>> + '_ {
        std::iter::once(&self.start).chain(self.edges.iter().map(|edge| edge.to()))
    }

    /// Iterates every vertex touched by the search, in the order first touched.
    pub fn visited(&self) -> impl Iterator<Item = &Arc<V>> + '_ {
        self.visited.values()
    }

    /// Returns the number of vertices touched by the search.
    #[must_use]
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Returns true if the search touched the vertex with the given id.
    #[must_use]
    pub fn has_visited(&self, id: &str) -> bool {
        self.visited.contains_key(id)
    }

    /// Returns a serializable summary for reporting.
    #[must_use]
    pub fn summary(&self) -> PathSummary {
        PathSummary {
            vertices: self.vertices().map(|v| v.id().to_string()).collect(),
            total_weight: self.total_weight,
            hops: self.edges.len(),
            visited: self.visited.len(),
        }
    }
}

impl<V: Vertex, E: Edge<Vertex = V>> fmt::Display for GraphPath<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Weight={:.6} Length={} Visited={} ({}",
            self.total_weight,
            self.edges.len() + 1,
            self.visited.len(),
            self.start.id()
        )?;
        for edge in &self.edges {
            write!(f, ", {}", edge.to().id())?;
        }
        write!(f, ")")
    }
}

/// Flat, serializable description of a [`GraphPath`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathSummary {
    /// Ids of the vertices on the route, start first.
    pub vertices: Vec<String>,
    /// Accumulated weight of the route.
    pub total_weight: f64,
    /// Number of edges on the route.
    pub hops: usize,
    /// Number of vertices touched by the search.
    pub visited: usize,
}

/// Walks inbound edges backwards from `target_id` and returns them in travel order.
///
/// `inbound` yields the edge a vertex was reached by; the walk stops at the
/// first vertex without one, which is the search origin.
pub(crate) fn rebuild_chain<'g, E, F>(target_id: &'g str, inbound: F) -> Vec<Arc<E>>
where
    E: Edge + 'g,
    E::Vertex: 'g,
    F: Fn(&str) -> Option<&'g Arc<E>>,
{
    let mut chain = Vec::new();
    let mut current = target_id;
    while let Some(edge) = inbound(current) {
        chain.push(Arc::clone(edge));
        current = edge.from().id();
    }
    chain.reverse();
    chain
}
