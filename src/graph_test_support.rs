use std::collections::BTreeSet;
use std::fmt::Debug;

use quickcheck::{Arbitrary, Gen};
use tracing::debug_span;

use crate::{Edge, Graph, GraphMut, INFINITY, NodeId, Weight, tracing_support::init_tracing};

/// Picks an edge weight, favoring small values but also producing zero
/// (which deletes) and the largest admissible weight.
pub fn arbitrary_weight(g: &mut Gen) -> Weight {
    match u8::arbitrary(g) % 10 {
        0 => 0,
        1 => INFINITY,
        _ => Weight::from(u8::arbitrary(g) % 20) + 1,
    }
}

/// A random graph built through the public [`GraphMut`] interface: nodes
/// are added, edges are added, updated, zeroed and deleted, and more nodes
/// may be added between edge operations.
#[derive(Debug, Clone)]
pub struct ArbGraph<G> {
    pub graph: G,
}

impl<G> Arbitrary for ArbGraph<G>
where
    G: GraphMut + Clone + Debug + 'static,
{
    fn arbitrary(g: &mut Gen) -> Self {
        let num_nodes = usize::arbitrary(g) % 12; // Limit size for testing
        let num_ops = usize::arbitrary(g) % 60;

        let mut graph = G::new();
        graph.add_nodes(num_nodes);

        for _ in 0..num_ops {
            if graph.is_empty() || usize::arbitrary(g) % 20 == 0 {
                graph.add_node();
                continue;
            }
            let n = graph.num_nodes();
            let source = usize::arbitrary(g) % n;
            let dest = usize::arbitrary(g) % n;
            if usize::arbitrary(g) % 8 == 0 {
                graph.delete_edge(source, dest);
            } else if let Err(err) = graph.add_edge(source, dest, arbitrary_weight(g)) {
                unreachable!("valid insertion rejected: {err}");
            }
        }

        ArbGraph { graph }
    }
}

/// An edge operation whose endpoints may lie outside the graph it is applied
/// to.
#[derive(Debug, Clone, Copy)]
pub struct ArbEdge {
    pub source: NodeId,
    pub dest: NodeId,
    pub weight: Weight,
}

impl Arbitrary for ArbEdge {
    fn arbitrary(g: &mut Gen) -> Self {
        ArbEdge {
            source: usize::arbitrary(g) % 16,
            dest: usize::arbitrary(g) % 16,
            weight: arbitrary_weight(g),
        }
    }
}

/// Checks that the queries of a graph agree with one another.
///
/// Runs in time proportional to `num_nodes()` calls of `neighbors()` plus
/// one query per edge, so it is usable on large graphs.
pub fn check_graph_consistency<G: Graph + ?Sized>(graph: &G) {
    init_tracing();
    let _span = debug_span!("check_graph_consistency").entered();

    let edges = graph.edges();
    assert_eq!(edges.len(), graph.num_edges());
    assert!(
        edges.windows(2).all(|pair| pair[0] < pair[1]),
        "edges must be sorted and unique"
    );

    for &Edge {
        source,
        dest,
        weight,
    } in &edges
    {
        assert!(weight > 0, "stored edge {source} -> {dest} has weight {weight}");
        assert!(graph.contains_node(source) && graph.contains_node(dest));
        assert!(graph.edge_between(source, dest));
        assert_eq!(graph.edge_weight(source, dest), weight);
    }

    for node in 0..graph.num_nodes() {
        let expected: BTreeSet<_> = edges
            .iter()
            .filter(|edge| edge.source == node)
            .map(|edge| edge.dest)
            .collect();
        assert_eq!(graph.neighbors(node), expected, "neighbors of {node}");
    }

    // Out-of-range queries answer with safe defaults.
    let outside = graph.num_nodes();
    assert!(graph.neighbors(outside).is_empty());
    assert!(!graph.edge_between(outside, 0));
    assert_eq!(graph.edge_weight(0, outside), 0);
    assert_eq!(graph.is_empty(), graph.num_nodes() == 0);
    assert!(graph.num_nodes() > 0 || graph.num_edges() == 0);
}

/// Lists the answer to every pairwise query, for comparing two graphs
/// observationally.
pub fn all_weights<G: Graph + ?Sized>(graph: &G) -> Vec<Weight> {
    let n = graph.num_nodes();
    (0..n)
        .flat_map(|source| (0..n).map(move |dest| graph.edge_weight(source, dest)))
        .collect()
}
