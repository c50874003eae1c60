use std::{
    collections::{BTreeSet, VecDeque},
    fmt::Debug,
};

use tracing::trace;

use crate::{
    Edge, Graph, GraphMut, NodeId, Weight,
    debug::format_debug,
    error::Result,
    graph::{EdgeInsert, check_edge_insert},
};

/// A graph stored as a coordinate list of `(source, dest, weight)` entries
/// plus a node count.
///
/// Space is O(E) and adding a node is O(1), but every edge query scans the
/// whole list.  New edges are inserted at the front of the list; at most one
/// entry exists per `(source, dest)` pair.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SparseAdjacencyMatrix {
    entries: VecDeque<Edge>,
    node_count: usize,
}

impl SparseAdjacencyMatrix {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph with `num_nodes` nodes and no edges.
    pub fn with_nodes(num_nodes: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            node_count: num_nodes,
        }
    }

    /// Iterates over the stored entries in list order.
    pub fn entries(&self) -> impl ExactSizeIterator<Item = &Edge> + '_ {
        self.entries.iter()
    }

    fn find(&self, source: NodeId, dest: NodeId) -> Option<&Edge> {
        self.entries
            .iter()
            .find(|edge| edge.source == source && edge.dest == dest)
    }

    /// Appends a new entry at the back of the list without checking for an
    /// existing one.  The caller guarantees the edge is new and both nodes
    /// are in the graph.
    pub(crate) fn push_back_new(&mut self, edge: Edge) {
        debug_assert!(edge.weight > 0);
        debug_assert!(edge.source < self.node_count && edge.dest < self.node_count);
        debug_assert!(self.find(edge.source, edge.dest).is_none());
        self.entries.push_back(edge);
    }
}

impl Graph for SparseAdjacencyMatrix {
    fn num_nodes(&self) -> usize {
        self.node_count
    }

    fn num_edges(&self) -> usize {
        self.entries.len()
    }

    fn edge_between(&self, source: NodeId, dest: NodeId) -> bool {
        self.find(source, dest).is_some()
    }

    fn edge_weight(&self, source: NodeId, dest: NodeId) -> Weight {
        self.find(source, dest).map_or(0, |edge| edge.weight)
    }

    fn neighbors(&self, node: NodeId) -> BTreeSet<NodeId> {
        self.entries
            .iter()
            .filter(|edge| edge.source == node && edge.weight > 0)
            .map(|edge| edge.dest)
            .collect()
    }

    fn edges(&self) -> Vec<Edge> {
        let mut edges: Vec<_> = self.entries.iter().copied().collect();
        edges.sort_unstable();
        edges
    }
}

impl GraphMut for SparseAdjacencyMatrix {
    fn new() -> Self {
        Self::default()
    }

    fn add_node(&mut self) -> NodeId {
        let node = self.node_count;
        self.node_count += 1;
        trace!(node, "add_node");
        node
    }

    fn add_edge(&mut self, source: NodeId, dest: NodeId, weight: Weight) -> Result<Option<Weight>> {
        let weight = match check_edge_insert(self, source, dest, weight)? {
            EdgeInsert::Delete => return Ok(self.delete_edge(source, dest)),
            EdgeInsert::Store(weight) => weight,
        };
        trace!(source, dest, weight, "add_edge");
        let existing = self
            .entries
            .iter_mut()
            .find(|edge| edge.source == source && edge.dest == dest);
        match existing {
            Some(edge) => Ok(Some(std::mem::replace(&mut edge.weight, weight))),
            None => {
                self.entries.push_front(Edge::new(source, dest, weight));
                Ok(None)
            }
        }
    }

    fn delete_edge(&mut self, source: NodeId, dest: NodeId) -> Option<Weight> {
        let mut removed = None;
        self.entries.retain(|edge| {
            let matches = edge.source == source && edge.dest == dest;
            if matches {
                removed = Some(edge.weight);
            }
            !matches
        });
        if removed.is_some() {
            trace!(source, dest, "delete_edge");
        }
        removed
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.node_count = 0;
    }
}

impl Debug for SparseAdjacencyMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format_debug(self, f, "SparseAdjacencyMatrix")
    }
}
