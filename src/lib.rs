pub mod adjacency_list;
pub mod adjacency_matrix;
pub mod error;
pub mod graph;
pub mod neighbor_list;
pub mod shortest_path;
pub mod sparse_matrix;
pub mod tracing_support;
pub mod weight;

#[doc(hidden)]
pub mod generate_large_graph;
#[doc(hidden)]
pub mod graph_test_support;

mod convert;
mod debug;

pub use adjacency_list::AdjacencyList;
pub use adjacency_matrix::AdjacencyMatrix;
pub use error::{GraphError, Result};
pub use graph::{Edge, Graph, GraphMut, NodeId};
pub use neighbor_list::{Cursor, Neighbor, NeighborList};
pub use sparse_matrix::SparseAdjacencyMatrix;
pub use weight::{Distance, INFINITY, UNREACHABLE, Weight};
