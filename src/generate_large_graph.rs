use crate::{GraphMut, NodeId, Weight, error::Result};

/// Number of nodes created by [`generate_large_graph`].
pub const LARGE_GRAPH_NODES: usize = 50 + 80 + 150 + 20 + 100 + 10;

/// Generates a large graph with an irregular structure, taking edge weights
/// from `new_weight`.  The output depends only on `new_weight`, so every
/// representation receives exactly the same sequence of operations.
///
/// The graph structure includes:
/// - Cluster 1: Dense cluster (50 nodes, ~60% connectivity)
/// - Cluster 2: Medium cluster (80 nodes, ~30% connectivity)
/// - Cluster 3: Large sparse cluster (150 nodes, ~8% connectivity)
/// - Hub nodes (20 nodes with many outgoing edges)
/// - Scattered nodes (100 nodes with few outgoing edges)
/// - Bridge nodes connecting clusters (10 nodes)
/// - Long-range edges between arbitrary nodes, some in both directions
/// - Self loops
///
/// Repeated `(source, dest)` pairs update the existing edge, so the final
/// edge count is a little below the number of insertions.  Fails only if
/// `new_weight` returns a negative weight.
///
/// # Arguments
///
/// * `new_weight` - A closure that takes an insertion index and returns the
///   weight for that insertion
pub fn generate_large_graph<G, F>(graph: &mut G, mut new_weight: F) -> Result<()>
where
    G: GraphMut,
    F: FnMut(usize) -> Weight,
{
    let mut edge_counter = 0;
    let mut add_edge = |graph: &mut G, source: NodeId, dest: NodeId| -> Result<()> {
        graph.add_edge(source, dest, new_weight(edge_counter))?;
        edge_counter += 1;
        Ok(())
    };

    // Cluster 1: dense, edges run from lower to higher IDs.
    let cluster1 = graph.add_nodes(50);
    for i in cluster1.clone() {
        for j in (i + 1)..cluster1.end {
            if (i * 7 + j * 11) % 10 < 6 {
                add_edge(graph, i, j)?;
            }
        }
    }

    // Cluster 2: moderately connected, edges run both ways.
    let cluster2 = graph.add_nodes(80);
    for i in cluster2.clone() {
        for j in (i + 1)..cluster2.end {
            if (i * 13 + j * 17) % 10 < 3 {
                add_edge(graph, i, j)?;
            }
            if (i * 3 + j * 5) % 10 == 0 {
                add_edge(graph, j, i)?;
            }
        }
    }

    // Cluster 3: sparse.
    let cluster3 = graph.add_nodes(150);
    for i in cluster3.clone() {
        for j in (i + 1)..cluster3.end {
            if (i * 19 + j * 23) % 100 < 8 {
                add_edge(graph, i, j)?;
            }
        }
    }

    // Hubs: each points at a fixed share of the nodes created before it.
    for _ in 0..20 {
        let hub = graph.add_node();
        for i in 0..hub {
            if (hub * 29 + i * 31) % 7 < 4 {
                add_edge(graph, hub, i)?;
            }
        }
    }

    // Scattered nodes with one to three outgoing edges each.
    let scattered_start = graph.num_nodes();
    for _ in 0..100 {
        let node = graph.add_node();
        let num_nodes = graph.num_nodes();
        let num_connections = ((scattered_start + num_nodes) % 3) + 1;
        for c in 0..num_connections {
            let target = (scattered_start * 37 + num_nodes * 41 + c * 43) % (num_nodes - 1);
            add_edge(graph, node, target)?;
        }
    }

    // Bridges into each cluster, and back out of the first one.
    for i in 0..10 {
        let bridge = graph.add_node();
        let first = (i * 47) % cluster1.len() + cluster1.start;
        let second = (i * 53) % cluster2.len() + cluster2.start;
        let third = (i * 59) % cluster3.len() + cluster3.start;
        add_edge(graph, bridge, first)?;
        add_edge(graph, bridge, second)?;
        add_edge(graph, bridge, third)?;
        add_edge(graph, third, bridge)?;
    }

    let num_nodes = graph.num_nodes();

    // Long-range edges.
    for i in 0..200 {
        let source = (i * 61) % num_nodes;
        let dest = (i * 67 + 100) % num_nodes;
        if source != dest {
            add_edge(graph, source, dest)?;
        }
    }

    // Reciprocal pairs.
    for i in 0..50 {
        let first = (i * 73 + 7) % num_nodes;
        let second = (i * 79 + 11) % num_nodes;
        if first == second {
            continue;
        }
        add_edge(graph, first, second)?;
        add_edge(graph, second, first)?;
    }

    // Self loops.
    for i in 0..50 {
        let node = (i * 71) % num_nodes;
        add_edge(graph, node, node)?;
    }

    Ok(())
}
