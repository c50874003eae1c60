use crate::{NodeId, Weight};

/// Errors reported by graph mutations and fail-fast cursors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// An edge weight outside `0..=INFINITY` was supplied.
    #[error("invalid edge weight: {weight}")]
    InvalidWeight { weight: Weight },
    /// A node ID outside `0..num_nodes` was supplied.
    #[error("invalid endpoint: node {node} not in graph of {num_nodes} nodes")]
    InvalidEndpoint { node: NodeId, num_nodes: usize },
    /// A [`NeighborList`](crate::NeighborList) was structurally modified
    /// after the cursor reading it was created.
    #[error("neighbor list was modified during traversal")]
    ConcurrentModification,
}

pub type Result<T> = std::result::Result<T, GraphError>;
