//! Per-vertex search state and frontier selection for the weighted searches.

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::sync::Arc;

use crate::config::FrontierStrategy;

/// Search state of one discovered vertex.
///
/// A vertex with an entry is either on the frontier (`settled == false`) or
/// settled; vertices without an entry are still unvisited.
#[derive(Debug)]
pub(crate) struct SearchNode<'g, V, E> {
    pub(crate) vertex: &'g Arc<V>,
    /// Edge of the current best route into this vertex; `None` for the origin.
    pub(crate) inbound: Option<&'g Arc<E>>,
    /// Cumulative weight of the current best route.
    pub(crate) weight_sum: f64,
    /// Heuristic estimate of the remaining weight to the target.
    pub(crate) remaining: f64,
    pub(crate) settled: bool,
}

impl<'g, V, E> SearchNode<'g, V, E> {
    pub(crate) fn new(
        vertex: &'g Arc<V>,
        inbound: Option<&'g Arc<E>>,
        weight_sum: f64,
        remaining: f64,
    ) -> Self {
        Self {
            vertex,
            inbound,
            weight_sum,
            remaining,
            settled: false,
        }
    }

    /// Estimated weight of the cheapest route through this vertex.
    pub(crate) fn estimated_total(&self) -> f64 {
        self.weight_sum + self.remaining
    }

    /// Records a cheaper route into this vertex.
    pub(crate) fn relax(&mut self, inbound: &'g Arc<E>, weight_sum: f64) {
        self.inbound = Some(inbound);
        self.weight_sum = weight_sum;
    }
}

/// Discovered vertices by id. Entries are never removed, so indices are stable.
pub(crate) type SearchStates<'g, V, E> = IndexMap<&'g str, SearchNode<'g, V, E>, FxBuildHasher>;

/// Heap entry: a state index and the estimate it was pushed with.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Candidate {
    estimate: f64,
    index: usize,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.estimate
            .total_cmp(&other.estimate)
            .then_with(|| self.index.cmp(&other.index))
    }
}

/// Picks the next unsettled vertex with the smallest estimated total.
pub(crate) enum Frontier {
    /// Min-heap; entries superseded by a later relaxation are skipped on pop.
    Heap(BinaryHeap<Reverse<Candidate>>),
    /// Linear scan over all states; the first minimum wins.
    Scan,
}

impl Frontier {
    pub(crate) fn new(strategy: FrontierStrategy) -> Self {
        match strategy {
            FrontierStrategy::BinaryHeap => Frontier::Heap(BinaryHeap::new()),
            FrontierStrategy::LinearScan => Frontier::Scan,
        }
    }

    /// Announces that the state at `index` now has estimate `estimate`.
    pub(crate) fn offer(&mut self, index: usize, estimate: f64) {
        if let Frontier::Heap(heap) = self {
            heap.push(Reverse(Candidate { estimate, index }));
        }
    }

    /// Returns the index of the next vertex to settle, or `None` if the frontier is empty.
    pub(crate) fn select<V, E>(&mut self, states: &SearchStates<'_, V, E>) -> Option<usize> {
        match self {
            Frontier::Heap(heap) => {
                while let Some(Reverse(candidate)) = heap.pop() {
                    let Some((_, node)) = states.get_index(candidate.index) else {
                        continue;
                    };
                    if node.settled || candidate.estimate > node.estimated_total() {
                        continue;
                    }
                    return Some(candidate.index);
                }
                None
            }
            Frontier::Scan => states
                .values()
                .enumerate()
                .filter(|(_, node)| !node.settled)
                .min_by(|(_, a), (_, b)| a.estimated_total().total_cmp(&b.estimated_total()))
                .map(|(index, _)| index),
        }
    }
}
