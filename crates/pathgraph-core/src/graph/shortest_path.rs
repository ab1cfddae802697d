//! Weighted shortest-path search: A* and Dijkstra.
//!
//! Dijkstra is A* with a heuristic that is always zero; both run on the same
//! engine. Per vertex the engine tracks the cumulative weight of the best
//! route found so far, the edge that route arrives by, and whether the vertex
//! is settled. Each round settles the unsettled vertex with the smallest
//! estimated total (cumulative weight plus heuristic) and relaxes its
//! outgoing edges. The search ends when the target is settled or the frontier
//! runs dry.
//!
//! Dijkstra never relaxes a settled vertex again. A* reopens a settled vertex
//! when a strictly cheaper route into it turns up, which an admissible but
//! inconsistent heuristic can cause; the cumulative weight then still matches
//! Dijkstra's.
//!
//! # Preconditions
//!
//! Edge weights must be non-negative and the heuristic must never overestimate
//! the remaining weight (admissible). Neither is checked; violating them gives
//! routes that are not the cheapest rather than an error.

use crate::config::FrontierStrategy;

use super::frontier::{Frontier, SearchNode, SearchStates};
use super::path::{rebuild_chain, GraphPath};
use super::traversal::{resolve_endpoints, GraphTraversal, PathOf};
use super::types::{Edge, Vertex};

/// Dijkstra's shortest path from `start_id` to `target_id`.
///
/// `weight_of` gives the weight of an edge and must never be negative. The
/// returned path's total weight is the minimum cumulative edge weight over
/// all routes. Every vertex reached by an examined edge is recorded as
/// visited, including those whose tentative route was later superseded.
///
/// # Example
///
/// ```rust
/// use pathgraph_core::graph::{dijkstra_shortest_path, DirectedGraph, Link, Node};
/// use std::sync::Arc;
///
/// let a = Arc::new(Node::new("A", "Junction"));
/// let b = Arc::new(Node::new("B", "Junction"));
/// let c = Arc::new(Node::new("C", "Junction"));
///
/// let mut graph: DirectedGraph<Node, Link> = DirectedGraph::new();
/// graph.add_edges([
///     Arc::new(Link::new(&a, &c, 5.0)),
///     Arc::new(Link::new(&a, &b, 1.0)),
///     Arc::new(Link::new(&b, &c, 1.0)),
/// ]).unwrap();
///
/// let path = dijkstra_shortest_path(&graph, "A", "C", Link::weight).unwrap();
/// assert_eq!(path.hop_count(), 2);
/// assert!((path.total_weight() - 2.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn dijkstra_shortest_path<G, W>(
    graph: &G,
    start_id: &str,
    target_id: &str,
    weight_of: W,
) -> Option<PathOf<G>>
where
    G: GraphTraversal,
    W: Fn(&G::Edge) -> f64,
{
    let strategy = graph.search_config().frontier;
    let zero = |_: &G::Vertex, _: &G::Vertex| 0.0;
    weighted_search(
        graph,
        start_id,
        target_id,
        &weight_of,
        &zero,
        Reopen::Never,
        strategy,
    )
}

/// A* shortest path from `start_id` to `target_id`.
///
/// `heuristic(vertex, target)` estimates the remaining weight from `vertex`
/// to the target; it is evaluated once per discovered vertex. With an
/// admissible heuristic the total weight equals Dijkstra's, usually with
/// fewer vertices visited. Settled vertices are reopened when a cheaper route
/// into them is found, so the heuristic need not be consistent. The frontier
/// strategy comes from [`GraphTraversal::search_config`].
#[must_use]
pub fn a_star_shortest_path<G, W, H>(
    graph: &G,
    start_id: &str,
    target_id: &str,
    weight_of: W,
    heuristic: H,
) -> Option<PathOf<G>>
where
    G: GraphTraversal,
    W: Fn(&G::Edge) -> f64,
    H: Fn(&G::Vertex, &G::Vertex) -> f64,
{
    let strategy = graph.search_config().frontier;
    weighted_search(
        graph,
        start_id,
        target_id,
        &weight_of,
        &heuristic,
        Reopen::WhenCheaper,
        strategy,
    )
}

/// Whether a settled vertex may be put back on the frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reopen {
    Never,
    WhenCheaper,
}

fn weighted_search<G, W, H>(
    graph: &G,
    start_id: &str,
    target_id: &str,
    weight_of: &W,
    heuristic: &H,
    reopen: Reopen,
    strategy: FrontierStrategy,
) -> Option<PathOf<G>>
where
    G: GraphTraversal,
    W: Fn(&G::Edge) -> f64,
    H: Fn(&G::Vertex, &G::Vertex) -> f64,
{
    let (start, target) = resolve_endpoints(graph, start_id, target_id)?;
    let mut path = GraphPath::starting_at(start);
    if start.id() == target.id() {
        return Some(path);
    }

    let mut states: SearchStates<'_, G::Vertex, G::Edge> = SearchStates::default();
    let mut frontier = Frontier::new(strategy);

    let start_remaining = heuristic(start, target);
    let (start_index, _) = states.insert_full(
        start.id(),
        SearchNode::new(start, None, 0.0, start_remaining),
    );
    frontier.offer(start_index, start_remaining);

    while let Some(current) = frontier.select(&states) {
        let node = &mut states[current];
        node.settled = true;
        let (vertex, weight_sum) = (node.vertex, node.weight_sum);
        if vertex.id() == target.id() {
            break;
        }
        tracing::trace!(vertex = vertex.id(), weight_sum, "Settled vertex");

        for edge in graph.outgoing_edges(vertex.id()) {
            let next_id = edge.to().id();
            let Some(next) = graph.vertex(next_id) else {
                continue;
            };
            path.visit(next);

            let candidate = weight_sum + weight_of(edge);
            match states.get_index_of(next_id) {
                Some(index) => {
                    let known = &mut states[index];
                    if candidate >= known.weight_sum {
                        continue;
                    }
                    if known.settled {
                        if reopen == Reopen::Never {
                            continue;
                        }
                        tracing::trace!(
                            vertex = next_id,
                            weight_sum = candidate,
                            "Reopened settled vertex"
                        );
                        known.settled = false;
                    }
                    known.relax(edge, candidate);
                    frontier.offer(index, known.estimated_total());
                }
                None => {
                    let remaining = heuristic(next, target);
                    let (index, _) = states.insert_full(
                        next_id,
                        SearchNode::new(next, Some(edge), candidate, remaining),
                    );
                    frontier.offer(index, candidate + remaining);
                }
            }
        }
    }

    let Some(reached) = states.get(target.id()).filter(|node| node.settled) else {
        tracing::debug!(
            start_id,
            target_id,
            visited = path.visited_count(),
            "Weighted search found no path"
        );
        return None;
    };
    let total_weight = reached.weight_sum;
    let edges = rebuild_chain(target.id(), |id| states.get(id).and_then(|node| node.inbound));

    tracing::debug!(
        start_id,
        target_id,
        total_weight,
        hops = edges.len(),
        visited = path.visited_count(),
        "Weighted search reached target"
    );
    Some(path.with_edges(edges).with_total_weight(total_weight))
}
