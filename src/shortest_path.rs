//! Single-source, single-sink shortest paths with Dijkstra's algorithm.
//!
//! The search only uses the [`Graph`] query surface, so it runs unchanged on
//! every representation.  Instead of a decrease-key operation, every
//! successful relaxation pushes a fresh queue entry and stale entries are
//! skipped when popped.  Entries with equal distances are popped in the
//! order they were pushed, which makes the result deterministic.

use std::{cmp::Ordering, collections::BinaryHeap};

use bitvec::vec::BitVec;
use derivative::Derivative;
use tracing::{debug, debug_span};

use crate::{
    Graph, NodeId,
    weight::{Distance, UNREACHABLE, as_distance},
};

/// A priority queue record.  Two entries are equal when they refer to the
/// same node; they are ordered by distance and then by push order, reversed
/// so that [`BinaryHeap`] pops the smallest.
#[derive(Derivative, Debug, Clone, Copy)]
#[derivative(PartialEq, Eq)]
struct QueueEntry {
    node: NodeId,
    #[derivative(PartialEq = "ignore")]
    distance: Distance,
    #[derivative(PartialEq = "ignore")]
    order: u64,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| other.order.cmp(&self.order))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

struct Search<'g, G: ?Sized> {
    graph: &'g G,
    source: NodeId,
    distance: Vec<Option<Distance>>,
    predecessor: Vec<Option<NodeId>>,
    finalized: BitVec,
    queue: BinaryHeap<QueueEntry>,
    next_order: u64,
}

impl<'g, G> Search<'g, G>
where
    G: Graph + ?Sized,
{
    fn new(graph: &'g G, source: NodeId) -> Self {
        let num_nodes = graph.num_nodes();
        let mut finalized = BitVec::with_capacity(num_nodes);
        finalized.resize(num_nodes, false);
        let mut search = Self {
            graph,
            source,
            distance: vec![None; num_nodes],
            predecessor: vec![None; num_nodes],
            finalized,
            queue: BinaryHeap::new(),
            next_order: 0,
        };
        search.distance[source] = Some(0);
        search.push(source, 0);
        search
    }

    fn push(&mut self, node: NodeId, distance: Distance) {
        self.queue.push(QueueEntry {
            node,
            distance,
            order: self.next_order,
        });
        self.next_order += 1;
    }

    /// Pops the closest node that is not yet finalized and finalizes it.
    fn pop(&mut self) -> Option<QueueEntry> {
        while let Some(entry) = self.queue.pop() {
            if !self.finalized[entry.node] {
                self.finalized.set(entry.node, true);
                return Some(entry);
            }
        }
        None
    }

    /// Relaxes every edge leaving the just-finalized `entry`.  Edges back
    /// into the source are passed to `on_return` instead, since the source
    /// itself is never relaxed.
    fn relax_from(&mut self, entry: QueueEntry, mut on_return: impl FnMut(Distance)) {
        let from = entry.node;
        for to in self.graph.neighbors(from) {
            let weight = self.graph.edge_weight(from, to);
            if weight <= 0 {
                continue;
            }
            let candidate = entry.distance + as_distance(weight);
            if candidate >= UNREACHABLE {
                continue;
            }
            if to == self.source {
                on_return(candidate);
                continue;
            }
            if self.distance[to].is_none_or(|current| candidate < current) {
                self.distance[to] = Some(candidate);
                self.predecessor[to] = Some(from);
                self.push(to, candidate);
            }
        }
    }

    /// Walks predecessors back from `node` to the source.
    fn path_to(&self, node: NodeId) -> Vec<NodeId> {
        let mut path: Vec<_> =
            std::iter::successors(Some(node), |&current| self.predecessor[current]).collect();
        path.reverse();
        path
    }

    fn run_to(mut self, dest: NodeId) -> Option<(Vec<NodeId>, Distance)> {
        while let Some(entry) = self.pop() {
            if entry.node == dest {
                return Some((self.path_to(dest), entry.distance));
            }
            self.relax_from(entry, |_| {});
        }
        None
    }

    /// Finds the cheapest cycle through the source.  The cheapest edge
    /// `last -> source` seen so far closes the best cycle; the search stops
    /// once no queued node is closer than that cycle's cost.
    fn run_cycle(mut self) -> Option<(Vec<NodeId>, Distance)> {
        let mut best: Option<(Distance, NodeId)> = None;
        while let Some(entry) = self.pop() {
            if best.is_some_and(|(cost, _)| entry.distance >= cost) {
                break;
            }
            self.relax_from(entry, |cost| {
                if best.is_none_or(|(best_cost, _)| cost < best_cost) {
                    best = Some((cost, entry.node));
                }
            });
        }
        best.map(|(cost, last)| {
            let mut path = self.path_to(last);
            path.push(self.source);
            (path, cost)
        })
    }
}

/// Finds a cheapest path from `source` to `dest` and its total weight.
/// Returns `None` if `dest` is unreachable or either node is not in the
/// graph.  When `source == dest`, only cycles of positive weight count.
pub fn shortest_path_with_cost<G>(
    graph: &G,
    source: NodeId,
    dest: NodeId,
) -> Option<(Vec<NodeId>, Distance)>
where
    G: Graph + ?Sized,
{
    if !graph.contains_node(source) || !graph.contains_node(dest) {
        debug!(source, dest, "shortest_path: endpoint not in graph");
        return None;
    }
    let _span = debug_span!("shortest_path", source, dest).entered();
    let search = Search::new(graph, source);
    let result = if source == dest {
        search.run_cycle()
    } else {
        search.run_to(dest)
    };
    match &result {
        Some((path, cost)) => debug!(cost, hops = path.len() - 1, "found path"),
        None => debug!("destination unreachable"),
    }
    result
}

/// Finds a cheapest path from `source` to `dest`, or an empty path if there
/// is none.  See [`shortest_path_with_cost`].
pub fn shortest_path<G>(graph: &G, source: NodeId, dest: NodeId) -> Vec<NodeId>
where
    G: Graph + ?Sized,
{
    shortest_path_with_cost(graph, source, dest)
        .map(|(path, _)| path)
        .unwrap_or_default()
}
