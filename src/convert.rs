//! Conversions between the three graph representations.
//!
//! Every conversion seeds the target with the source's nodes and then
//! copies edges straight out of the source's storage; none of them goes
//! through the third representation.  Each runs in O(V + E) on top of the
//! target's own node allocation cost (O(V²) for [`AdjacencyMatrix`]), except
//! that reading an [`AdjacencyMatrix`] always scans all V² entries.

use tracing::debug_span;

use crate::{AdjacencyList, AdjacencyMatrix, Edge, Graph, SparseAdjacencyMatrix};

impl AdjacencyMatrix {
    /// Converts to an [`AdjacencyList`].  Each list holds its destinations
    /// in ascending order.
    pub fn to_adjacency_list(&self) -> AdjacencyList {
        let _span = debug_span!("to_adjacency_list", num_nodes = self.num_nodes()).entered();
        let mut target = AdjacencyList::with_nodes(self.num_nodes());
        for edge in self.iter() {
            target.push_back_new(edge.source, edge.dest, edge.weight);
        }
        target
    }

    /// Converts to a [`SparseAdjacencyMatrix`] whose entries are in
    /// row-major order.
    pub fn to_sparse_adjacency_matrix(&self) -> SparseAdjacencyMatrix {
        let _span =
            debug_span!("to_sparse_adjacency_matrix", num_nodes = self.num_nodes()).entered();
        let mut target = SparseAdjacencyMatrix::with_nodes(self.num_nodes());
        for edge in self.iter() {
            target.push_back_new(edge);
        }
        target
    }
}

impl AdjacencyList {
    /// Converts to an [`AdjacencyMatrix`].
    pub fn to_adjacency_matrix(&self) -> AdjacencyMatrix {
        let _span = debug_span!("to_adjacency_matrix", num_nodes = self.num_nodes()).entered();
        let mut target = AdjacencyMatrix::with_nodes(self.num_nodes());
        for source in 0..self.num_nodes() {
            for neighbor in self.neighbor_list(source).into_iter().flatten() {
                target.set(source, neighbor.node, neighbor.weight);
            }
        }
        target
    }

    /// Converts to a [`SparseAdjacencyMatrix`].  Entries are grouped by
    /// source in ascending order, each group in list order.
    pub fn to_sparse_adjacency_matrix(&self) -> SparseAdjacencyMatrix {
        let _span =
            debug_span!("to_sparse_adjacency_matrix", num_nodes = self.num_nodes()).entered();
        let mut target = SparseAdjacencyMatrix::with_nodes(self.num_nodes());
        for source in 0..self.num_nodes() {
            for neighbor in self.neighbor_list(source).into_iter().flatten() {
                target.push_back_new(Edge::new(source, neighbor.node, neighbor.weight));
            }
        }
        target
    }
}

impl SparseAdjacencyMatrix {
    /// Converts to an [`AdjacencyMatrix`].
    pub fn to_adjacency_matrix(&self) -> AdjacencyMatrix {
        let _span = debug_span!("to_adjacency_matrix", num_nodes = self.num_nodes()).entered();
        let mut target = AdjacencyMatrix::with_nodes(self.num_nodes());
        for edge in self.entries() {
            target.set(edge.source, edge.dest, edge.weight);
        }
        target
    }

    /// Converts to an [`AdjacencyList`].  Each list holds its destinations
    /// in the order they appear among the entries.
    pub fn to_adjacency_list(&self) -> AdjacencyList {
        let _span = debug_span!("to_adjacency_list", num_nodes = self.num_nodes()).entered();
        let mut target = AdjacencyList::with_nodes(self.num_nodes());
        for edge in self.entries() {
            target.push_back_new(edge.source, edge.dest, edge.weight);
        }
        target
    }
}

macro_rules! impl_from {
    ($source:ty => $target:ty, $method:ident) => {
        impl From<&$source> for $target {
            fn from(source: &$source) -> Self {
                source.$method()
            }
        }
    };
}

impl_from!(AdjacencyMatrix => AdjacencyList, to_adjacency_list);
impl_from!(AdjacencyMatrix => SparseAdjacencyMatrix, to_sparse_adjacency_matrix);
impl_from!(AdjacencyList => AdjacencyMatrix, to_adjacency_matrix);
impl_from!(AdjacencyList => SparseAdjacencyMatrix, to_sparse_adjacency_matrix);
impl_from!(SparseAdjacencyMatrix => AdjacencyMatrix, to_adjacency_matrix);
impl_from!(SparseAdjacencyMatrix => AdjacencyList, to_adjacency_list);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GraphMut, NodeId, Weight};

    fn sample<G: GraphMut>() -> G {
        let mut graph = G::new();
        graph.add_nodes(4);
        graph.add_edge(3, 0, 1).unwrap();
        graph.add_edge(0, 2, 2).unwrap();
        graph.add_edge(0, 1, 3).unwrap();
        graph.add_edge(2, 2, 4).unwrap();
        graph
    }

    fn list_order(graph: &AdjacencyList, node: NodeId) -> Vec<(NodeId, Weight)> {
        graph
            .neighbor_list(node)
            .into_iter()
            .flatten()
            .map(|n| (n.node, n.weight))
            .collect()
    }

    #[test]
    fn test_matrix_to_sparse_is_row_major() {
        let sparse = sample::<AdjacencyMatrix>().to_sparse_adjacency_matrix();
        assert_eq!(
            sparse.entries().copied().collect::<Vec<_>>(),
            vec![
                Edge::new(0, 1, 3),
                Edge::new(0, 2, 2),
                Edge::new(2, 2, 4),
                Edge::new(3, 0, 1),
            ]
        );
    }

    #[test]
    fn test_matrix_to_list_is_ascending() {
        let list = sample::<AdjacencyMatrix>().to_adjacency_list();
        assert_eq!(list_order(&list, 0), vec![(1, 3), (2, 2)]);
        assert_eq!(list.num_edges(), 4);
    }

    #[test]
    fn test_list_to_sparse_groups_by_source() {
        let sparse = sample::<AdjacencyList>().to_sparse_adjacency_matrix();
        assert_eq!(
            sparse.entries().copied().collect::<Vec<_>>(),
            vec![
                Edge::new(0, 1, 3),
                Edge::new(0, 2, 2),
                Edge::new(2, 2, 4),
                Edge::new(3, 0, 1),
            ]
        );
    }

    #[test]
    fn test_sparse_to_list_keeps_entry_order() {
        let list = sample::<SparseAdjacencyMatrix>().to_adjacency_list();
        assert_eq!(list_order(&list, 0), vec![(1, 3), (2, 2)]);
    }

    #[test]
    fn test_conversions_keep_nodes_without_edges() {
        let mut matrix = AdjacencyMatrix::new();
        matrix.add_nodes(5);
        assert_eq!(matrix.to_adjacency_list().num_nodes(), 5);
        assert_eq!(matrix.to_sparse_adjacency_matrix().num_nodes(), 5);
        let list = AdjacencyList::with_nodes(3);
        assert_eq!(list.to_adjacency_matrix().num_nodes(), 3);
        assert_eq!(list.to_sparse_adjacency_matrix().num_nodes(), 3);
        let sparse = SparseAdjacencyMatrix::with_nodes(2);
        assert_eq!(sparse.to_adjacency_matrix().num_nodes(), 2);
        assert_eq!(sparse.to_adjacency_list().num_nodes(), 2);
    }

    #[test]
    fn test_source_is_untouched() {
        let list = sample::<AdjacencyList>();
        let before = list.clone();
        let _ = list.to_adjacency_matrix();
        let _ = list.to_sparse_adjacency_matrix();
        assert_eq!(list, before);
    }

    #[test]
    fn test_from_impls() {
        let matrix = sample::<AdjacencyMatrix>();
        let list = AdjacencyList::from(&matrix);
        let sparse = SparseAdjacencyMatrix::from(&list);
        let back = AdjacencyMatrix::from(&sparse);
        assert_eq!(back, matrix);
        assert_eq!(AdjacencyMatrix::from(&list), matrix);
        assert_eq!(AdjacencyList::from(&sparse).edges(), matrix.edges());
        assert_eq!(SparseAdjacencyMatrix::from(&matrix).edges(), matrix.edges());
    }
}
