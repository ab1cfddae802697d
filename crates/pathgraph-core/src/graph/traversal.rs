//! Unweighted path search (DFS/BFS) over any graph implementing [`GraphTraversal`].
//!
//! Both searches take plain vertex ids and return `None` when either id is
//! unknown or the target cannot be reached from the start. The two cases are
//! not distinguished in the return value; the reason is logged at `debug`.

use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;
use std::sync::Arc;

use crate::config::SearchConfig;

use super::directed_graph::{DirectedGraph, OutgoingEdges};
use super::path::{rebuild_chain, GraphPath};
use super::types::{Edge, Vertex};

/// Read-only view of a graph that the searches run over.
///
/// Searches only read through this trait; they never mutate the graph.
pub trait GraphTraversal {
    /// Vertex type of the graph.
    type Vertex: Vertex;
    /// Edge type of the graph.
    type Edge: Edge<Vertex = Self::Vertex>;
    /// Borrowing iterator over the outgoing edges of one vertex.
    type Outgoing<'a>: Iterator<Item = &'a Arc<Self::Edge>>
    where
        Self: 'a;

    /// Returns the registered vertex with the given id.
    fn vertex(&self, id: &str) -> Option<&Arc<Self::Vertex>>;

    /// Iterates the outgoing edges of a vertex in their stored order.
    ///
    /// Yields nothing for an unknown id.
    fn outgoing_edges(&self, vertex_id: &str) -> Self::Outgoing<'_>;

    /// Returns the settings the weighted searches run with.
    fn search_config(&self) -> SearchConfig {
        SearchConfig::default()
    }
}

/// Implement `GraphTraversal` for `DirectedGraph`.
impl<V: Vertex, E: Edge<Vertex = V>> GraphTraversal for DirectedGraph<V, E> {
    type Vertex = V;
    type Edge = E;
    type Outgoing<'a>
        = OutgoingEdges<'a, E>
    where
        Self: 'a;

    fn vertex(&self, id: &str) -> Option<&Arc<V>> {
        self.get_vertex(id)
    }

    fn outgoing_edges(&self, vertex_id: &str) -> OutgoingEdges<'_, E> {
        DirectedGraph::outgoing_edges(self, vertex_id)
    }

    fn search_config(&self) -> SearchConfig {
        DirectedGraph::search_config(self)
    }
}

/// Path type produced by searches over `G`.
pub type PathOf<G> = GraphPath<<G as GraphTraversal>::Vertex, <G as GraphTraversal>::Edge>;

/// Resolves both search endpoints, logging which one is missing.
pub(crate) fn resolve_endpoints<'g, G: GraphTraversal>(
    graph: &'g G,
    start_id: &str,
    target_id: &str,
) -> Option<(&'g Arc<G::Vertex>, &'g Arc<G::Vertex>)> {
    match (graph.vertex(start_id), graph.vertex(target_id)) {
        (Some(start), Some(target)) => Some((start, target)),
        (start, target) => {
            tracing::debug!(
                start_id,
                target_id,
                start_found = start.is_some(),
                target_found = target.is_some(),
                "Search endpoint not in graph"
            );
            None
        }
    }
}

/// Depth-first search for a path from `start_id` to `target_id`.
///
/// Outgoing edges are explored in their stored order and the first descent
/// that reaches the target wins, so the result is *a* path, not necessarily
/// the shortest one. Only edges on the successful descent end up in the
/// result. Every vertex entered is recorded as visited. The total weight is
/// left at `0.0`; the hop count is `path.edges().len()`.
///
/// The descent keeps its own stack, so path length is not limited by the
/// call stack.
#[must_use]
pub fn depth_first_search<G: GraphTraversal>(
    graph: &G,
    start_id: &str,
    target_id: &str,
) -> Option<PathOf<G>> {
    let (start, target) = resolve_endpoints(graph, start_id, target_id)?;
    let mut path = GraphPath::starting_at(start);
    if start.id() == target.id() {
        return Some(path);
    }

    // Each stack level holds the untried edges of one vertex on the descent.
    // Invariant: `stack.len() == chain.len() + 1`; chain[i] leads into stack[i + 1].
    let mut stack = vec![graph.outgoing_edges(start.id())];
    let mut chain: Vec<Arc<G::Edge>> = Vec::new();

    while let Some(untried) = stack.last_mut() {
        let Some(edge) = untried.next() else {
            stack.pop();
            chain.pop();
            continue;
        };

        let next_id = edge.to().id();
        if path.has_visited(next_id) {
            continue;
        }
        let Some(next) = graph.vertex(next_id) else {
            continue;
        };

        path.visit(next);
        chain.push(Arc::clone(edge));
        if next_id == target.id() {
            tracing::debug!(
                start_id,
                target_id,
                hops = chain.len(),
                visited = path.visited_count(),
                "Depth-first search reached target"
            );
            return Some(path.with_edges(chain));
        }
        stack.push(graph.outgoing_edges(next_id));
    }

    tracing::debug!(
        start_id,
        target_id,
        visited = path.visited_count(),
        "Depth-first search found no path"
    );
    None
}

/// Breadth-first search for a path from `start_id` to `target_id`.
///
/// Returns a path with the fewest edges among all paths from start to target.
/// Each vertex remembers the edge that first discovered it; the route is
/// rebuilt from those edges once the target is discovered. Every neighbour seen
/// before or at reaching the target is recorded as visited, including vertices
/// not on the route. The total weight is left at `0.0`.
#[must_use]
pub fn breadth_first_search<G: GraphTraversal>(
    graph: &G,
    start_id: &str,
    target_id: &str,
) -> Option<PathOf<G>> {
    let (start, target) = resolve_endpoints(graph, start_id, target_id)?;
    let mut path = GraphPath::starting_at(start);
    if start.id() == target.id() {
        return Some(path);
    }

    let mut queue = VecDeque::from([start]);
    let mut discovered: FxHashSet<&str> = FxHashSet::default();
    let mut inbound: FxHashMap<&str, &Arc<G::Edge>> = FxHashMap::default();
    discovered.insert(start.id());

    while let Some(current) = queue.pop_front() {
        for edge in graph.outgoing_edges(current.id()) {
            let next_id = edge.to().id();
            let Some(next) = graph.vertex(next_id) else {
                continue;
            };
            path.visit(next);

            if !discovered.insert(next_id) {
                continue;
            }
            inbound.insert(next_id, edge);

            if next_id == target.id() {
                let edges = rebuild_chain(next_id, |id| inbound.get(id).copied());
                tracing::debug!(
                    start_id,
                    target_id,
                    hops = edges.len(),
                    visited = path.visited_count(),
                    "Breadth-first search reached target"
                );
                return Some(path.with_edges(edges));
            }
            queue.push_back(next);
        }
    }

    tracing::debug!(
        start_id,
        target_id,
        visited = path.visited_count(),
        "Breadth-first search found no path"
    );
    None
}
