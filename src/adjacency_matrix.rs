use std::{collections::BTreeSet, fmt::Debug};

use tracing::trace;

use crate::{
    Edge, Graph, GraphMut, NodeId, Weight,
    debug::format_debug,
    error::Result,
    graph::{EdgeInsert, check_edge_insert},
};

/// A graph stored as a dense `V x V` matrix of weights, where a zero entry
/// means "no edge".
///
/// Edge queries are O(1) and listing neighbors is O(V), but adding a node
/// reallocates the whole matrix, which is O(V²).
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    /// Row-major storage: the weight of `row -> col` is at `row * size + col`.
    weights: Vec<Weight>,
    size: usize,
    edge_count: usize,
}

impl AdjacencyMatrix {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph with `num_nodes` nodes and no edges.
    pub fn with_nodes(num_nodes: usize) -> Self {
        Self {
            weights: vec![0; num_nodes * num_nodes],
            size: num_nodes,
            edge_count: 0,
        }
    }

    /// Gets the linear storage index for `row -> col`, if within bounds.
    fn index(&self, row: NodeId, col: NodeId) -> Option<usize> {
        (row < self.size && col < self.size).then(|| row * self.size + col)
    }

    /// Gets the weights of the edges leaving `node`, indexed by
    /// destination, or `None` if `node` is not in the graph.
    pub fn row(&self, node: NodeId) -> Option<&[Weight]> {
        (node < self.size).then(|| &self.weights[node * self.size..(node + 1) * self.size])
    }

    /// Iterates over the edges in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Edge> + '_ {
        self.weights
            .iter()
            .enumerate()
            .filter(|&(_, &weight)| weight > 0)
            .map(|(index, &weight)| Edge::new(index / self.size, index % self.size, weight))
    }

    /// Stores `weight` at `row -> col` and keeps the edge count in step.
    /// Both nodes must be in the graph.
    pub(crate) fn set(&mut self, row: NodeId, col: NodeId, weight: Weight) -> Option<Weight> {
        let index = row * self.size + col;
        let old = std::mem::replace(&mut self.weights[index], weight);
        match (old > 0, weight > 0) {
            (false, true) => self.edge_count += 1,
            (true, false) => self.edge_count -= 1,
            _ => {}
        }
        (old > 0).then_some(old)
    }
}

impl Graph for AdjacencyMatrix {
    fn num_nodes(&self) -> usize {
        self.size
    }

    fn num_edges(&self) -> usize {
        self.edge_count
    }

    fn edge_between(&self, source: NodeId, dest: NodeId) -> bool {
        self.edge_weight(source, dest) > 0
    }

    fn edge_weight(&self, source: NodeId, dest: NodeId) -> Weight {
        self.index(source, dest)
            .map_or(0, |index| self.weights[index])
    }

    fn neighbors(&self, node: NodeId) -> BTreeSet<NodeId> {
        self.row(node)
            .into_iter()
            .flatten()
            .enumerate()
            .filter(|&(_, &weight)| weight > 0)
            .map(|(dest, _)| dest)
            .collect()
    }

    fn edges(&self) -> Vec<Edge> {
        self.iter().collect()
    }
}

impl GraphMut for AdjacencyMatrix {
    fn new() -> Self {
        Self::default()
    }

    fn add_node(&mut self) -> NodeId {
        let old_size = self.size;
        let new_size = old_size + 1;
        let mut weights = vec![0; new_size * new_size];
        for (old_row, new_row) in self
            .weights
            .chunks_exact(old_size.max(1))
            .zip(weights.chunks_exact_mut(new_size))
        {
            new_row[..old_size].copy_from_slice(old_row);
        }
        self.weights = weights;
        self.size = new_size;
        trace!(node = old_size, "add_node");
        old_size
    }

    fn add_edge(&mut self, source: NodeId, dest: NodeId, weight: Weight) -> Result<Option<Weight>> {
        match check_edge_insert(self, source, dest, weight)? {
            EdgeInsert::Delete => Ok(self.delete_edge(source, dest)),
            EdgeInsert::Store(weight) => {
                trace!(source, dest, weight, "add_edge");
                Ok(self.set(source, dest, weight))
            }
        }
    }

    fn delete_edge(&mut self, source: NodeId, dest: NodeId) -> Option<Weight> {
        self.index(source, dest)?;
        let removed = self.set(source, dest, 0);
        if removed.is_some() {
            trace!(source, dest, "delete_edge");
        }
        removed
    }

    fn clear(&mut self) {
        self.weights.clear();
        self.size = 0;
        self.edge_count = 0;
    }
}

impl Debug for AdjacencyMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format_debug(self, f, "AdjacencyMatrix")
    }
}
