use std::{collections::BTreeSet, fmt::Debug};

use tracing::trace;

use crate::{
    Graph, GraphMut, NodeId, Weight,
    debug::format_debug,
    error::Result,
    graph::{EdgeInsert, check_edge_insert},
    neighbor_list::NeighborList,
};

/// A graph stored as one [`NeighborList`] of outgoing edges per node.
///
/// New edges are linked in at the front of the source's list, so insertion
/// is O(1) plus the O(deg) duplicate check; lookups are O(deg).  Adding an
/// existing edge updates its weight in place.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AdjacencyList {
    lists: Vec<NeighborList>,
    edge_count: usize,
}

impl AdjacencyList {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph with `num_nodes` nodes and no edges.
    pub fn with_nodes(num_nodes: usize) -> Self {
        Self {
            lists: vec![NeighborList::new(); num_nodes],
            edge_count: 0,
        }
    }

    /// Gets the outgoing edges of `node`, or `None` if `node` is not in the
    /// graph.
    pub fn neighbor_list(&self, node: NodeId) -> Option<&NeighborList> {
        self.lists.get(node)
    }

    /// Links a new edge at the back of `source`'s list without checking for
    /// an existing entry.  The caller guarantees the edge is new and both
    /// nodes are in the graph.
    pub(crate) fn push_back_new(&mut self, source: NodeId, dest: NodeId, weight: Weight) {
        debug_assert!(weight > 0 && dest < self.lists.len());
        debug_assert!(!self.lists[source].contains(dest));
        self.lists[source].add_back(dest, weight);
        self.edge_count += 1;
    }
}

impl Graph for AdjacencyList {
    fn num_nodes(&self) -> usize {
        self.lists.len()
    }

    fn num_edges(&self) -> usize {
        self.edge_count
    }

    fn edge_between(&self, source: NodeId, dest: NodeId) -> bool {
        self.lists
            .get(source)
            .is_some_and(|list| list.contains(dest))
    }

    fn edge_weight(&self, source: NodeId, dest: NodeId) -> Weight {
        self.lists
            .get(source)
            .map_or(0, |list| list.weight_of(dest))
    }

    fn neighbors(&self, node: NodeId) -> BTreeSet<NodeId> {
        self.lists
            .get(node)
            .into_iter()
            .flat_map(|list| list.iter().map(|neighbor| neighbor.node))
            .collect()
    }
}

impl GraphMut for AdjacencyList {
    fn new() -> Self {
        Self::default()
    }

    fn add_node(&mut self) -> NodeId {
        let node = self.lists.len();
        self.lists.push(NeighborList::new());
        trace!(node, "add_node");
        node
    }

    fn add_edge(&mut self, source: NodeId, dest: NodeId, weight: Weight) -> Result<Option<Weight>> {
        let weight = match check_edge_insert(self, source, dest, weight)? {
            EdgeInsert::Delete => return Ok(self.delete_edge(source, dest)),
            EdgeInsert::Store(weight) => weight,
        };
        trace!(source, dest, weight, "add_edge");
        let list = &mut self.lists[source];
        let old = list.weight_of(dest);
        if old > 0 {
            list.set_weight(dest, weight);
            Ok(Some(old))
        } else {
            list.add_front(dest, weight);
            self.edge_count += 1;
            Ok(None)
        }
    }

    fn delete_edge(&mut self, source: NodeId, dest: NodeId) -> Option<Weight> {
        let removed = self.lists.get_mut(source)?.remove(dest);
        if removed.is_some() {
            trace!(source, dest, "delete_edge");
            self.edge_count -= 1;
        }
        removed
    }

    fn clear(&mut self) {
        self.lists.clear();
        self.edge_count = 0;
    }
}

impl Debug for AdjacencyList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format_debug(self, f, "AdjacencyList")
    }
}
