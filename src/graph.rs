use std::{collections::BTreeSet, ops::Range};

use crate::{
    Distance, Weight,
    error::{GraphError, Result},
    shortest_path,
    weight::{as_distance, check_weight},
};

/// Nodes are identified by their insertion index.
pub type NodeId = usize;

/// A weighted, directed edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    pub source: NodeId,
    pub dest: NodeId,
    pub weight: Weight,
}

impl Edge {
    pub fn new(source: NodeId, dest: NodeId, weight: Weight) -> Self {
        Self {
            source,
            dest,
            weight,
        }
    }
}

/// Read access to a directed graph with non-negative integer weights.
///
/// Nodes are the dense range `0..num_nodes()`.  An edge exists exactly when
/// its weight is positive.  Queries never panic on out-of-range node IDs;
/// they report the absence of an edge instead.
pub trait Graph {
    /// Gets the number of nodes in the graph.
    fn num_nodes(&self) -> usize;

    /// Gets the number of edges in the graph.
    fn num_edges(&self) -> usize;

    /// Returns true if the graph has no nodes.
    fn is_empty(&self) -> bool {
        self.num_nodes() == 0
    }

    /// Returns true if `node` is a node of this graph.
    fn contains_node(&self, node: NodeId) -> bool {
        node < self.num_nodes()
    }

    /// Fails with [`GraphError::InvalidEndpoint`] if `node` is not a node of
    /// this graph.
    fn check_node(&self, node: NodeId) -> Result<()> {
        if self.contains_node(node) {
            Ok(())
        } else {
            Err(GraphError::InvalidEndpoint {
                node,
                num_nodes: self.num_nodes(),
            })
        }
    }

    /// Checks if there is an edge from `source` to `dest`.
    fn edge_between(&self, source: NodeId, dest: NodeId) -> bool;

    /// Gets the weight of the edge from `source` to `dest`, or 0 if there is
    /// no such edge.
    fn edge_weight(&self, source: NodeId, dest: NodeId) -> Weight;

    /// Gets the nodes reachable from `node` by a single outgoing edge.
    /// Empty if `node` has no outgoing edges or is not in the graph.
    fn neighbors(&self, node: NodeId) -> BTreeSet<NodeId>;

    /// Gets every edge, ordered by source and then by destination.
    fn edges(&self) -> Vec<Edge> {
        (0..self.num_nodes())
            .flat_map(|source| {
                self.neighbors(source)
                    .into_iter()
                    .map(move |dest| Edge::new(source, dest, self.edge_weight(source, dest)))
            })
            .collect()
    }

    /// Sums the weights along `path`.  Returns `None` if some consecutive
    /// pair of nodes is not joined by an edge, and `Some(0)` for paths with
    /// fewer than two nodes.
    fn path_weight(&self, path: &[NodeId]) -> Option<Distance> {
        path.windows(2).try_fold(0, |total, pair| {
            let weight = self.edge_weight(pair[0], pair[1]);
            (weight > 0).then(|| total + as_distance(weight))
        })
    }

    /// Finds a cheapest path from `source` to `dest` using Dijkstra's
    /// algorithm.  The path starts with `source` and ends with `dest`; it is
    /// empty if `dest` is unreachable.  When `source == dest`, the path is a
    /// cycle of positive weight, or empty if there is none.
    fn shortest_path(&self, source: NodeId, dest: NodeId) -> Vec<NodeId> {
        shortest_path::shortest_path(self, source, dest)
    }

    /// Like [`Self::shortest_path`], but also returns the total weight, and
    /// `None` instead of an empty path.
    fn shortest_path_with_cost(
        &self,
        source: NodeId,
        dest: NodeId,
    ) -> Option<(Vec<NodeId>, Distance)> {
        shortest_path::shortest_path_with_cost(self, source, dest)
    }
}

/// A trait for graphs that support mutation.  Nodes can be added but never
/// removed, since removal would renumber the remaining nodes.
pub trait GraphMut: Graph {
    /// Creates a new, empty graph.
    fn new() -> Self
    where
        Self: Sized;

    /// Adds a node, returning its ID, which is the previous node count.
    fn add_node(&mut self) -> NodeId;

    /// Adds `count` nodes, returning their IDs.
    fn add_nodes(&mut self, count: usize) -> Range<NodeId> {
        let start = self.num_nodes();
        for _ in 0..count {
            self.add_node();
        }
        start..self.num_nodes()
    }

    /// Adds an edge from `source` to `dest`, or updates its weight if it
    /// already exists, returning the replaced weight.  A weight of 0 deletes
    /// the edge instead.
    ///
    /// Fails with [`GraphError::InvalidWeight`] for a negative weight and
    /// with [`GraphError::InvalidEndpoint`] if either node is not in the
    /// graph.  A failed call leaves the graph unchanged.
    fn add_edge(
        &mut self,
        source: NodeId,
        dest: NodeId,
        weight: Weight,
    ) -> Result<Option<Weight>>;

    /// Removes the edge from `source` to `dest`, returning its weight.  Does
    /// nothing if there is no such edge or either node is not in the graph.
    fn delete_edge(&mut self, source: NodeId, dest: NodeId) -> Option<Weight>;

    /// Removes all nodes and edges from the graph.
    fn clear(&mut self);
}

/// What [`GraphMut::add_edge`] should do after validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EdgeInsert {
    /// Store the edge with the given positive weight.
    Store(Weight),
    /// The weight was zero: delete the edge instead.
    Delete,
}

/// Validates the arguments of [`GraphMut::add_edge`].  The weight is checked
/// first, so a zero weight with bad endpoints is a silent no-op delete.
pub(crate) fn check_edge_insert<G>(
    graph: &G,
    source: NodeId,
    dest: NodeId,
    weight: Weight,
) -> Result<EdgeInsert>
where
    G: Graph + ?Sized,
{
    check_weight(weight)?;
    if weight == 0 {
        return Ok(EdgeInsert::Delete);
    }
    graph.check_node(source)?;
    graph.check_node(dest)?;
    Ok(EdgeInsert::Store(weight))
}
