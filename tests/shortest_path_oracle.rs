//! Compares the cost of every path found against the `pathfinding` crate's
//! Dijkstra implementation on random graphs.

use pathfinding::prelude::dijkstra;
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use weighted_graphs::{
    AdjacencyList, AdjacencyMatrix, Distance, Graph, GraphMut, NodeId, SparseAdjacencyMatrix,
    UNREACHABLE,
    graph_test_support::{ArbEdge, ArbGraph},
};

fn successors<G: Graph>(graph: &G, node: NodeId) -> Vec<(NodeId, Distance)> {
    graph
        .neighbors(node)
        .into_iter()
        .map(|dest| {
            let weight = graph.edge_weight(node, dest);
            (dest, Distance::from(weight.unsigned_abs()))
        })
        .collect()
}

fn distance<G: Graph>(graph: &G, source: NodeId, dest: NodeId) -> Option<Distance> {
    dijkstra(
        &source,
        |&node| successors(graph, node),
        |&node| node == dest,
    )
    .map(|(_, cost)| cost)
}

/// The cheapest cost from `source` to `dest`, where a path from a node to
/// itself must use at least one edge.
fn expected_cost<G: Graph>(graph: &G, source: NodeId, dest: NodeId) -> Option<Distance> {
    let cost = if source != dest {
        distance(graph, source, dest)
    } else {
        (0..graph.num_nodes())
            .filter(|&last| graph.edge_between(last, source))
            .filter_map(|last| {
                let back = Distance::from(graph.edge_weight(last, source).unsigned_abs());
                distance(graph, source, last).map(|cost| cost + back)
            })
            .min()
    };
    cost.filter(|&cost| cost < UNREACHABLE)
}

fn check_against_oracle<G: Graph>(graph: &G, edge: ArbEdge) -> TestResult {
    if graph.is_empty() {
        return TestResult::discard();
    }
    let n = graph.num_nodes();
    let (source, dest) = (edge.source % n, edge.dest % n);
    let found = graph.shortest_path_with_cost(source, dest);
    TestResult::from_bool(found.map(|(_, cost)| cost) == expected_cost(graph, source, dest))
}

#[quickcheck]
fn prop_matrix_costs_are_optimal(
    ArbGraph { graph }: ArbGraph<AdjacencyMatrix>,
    edge: ArbEdge,
) -> TestResult {
    check_against_oracle(&graph, edge)
}

#[quickcheck]
fn prop_list_costs_are_optimal(
    ArbGraph { graph }: ArbGraph<AdjacencyList>,
    edge: ArbEdge,
) -> TestResult {
    check_against_oracle(&graph, edge)
}

#[quickcheck]
fn prop_sparse_costs_are_optimal(
    ArbGraph { graph }: ArbGraph<SparseAdjacencyMatrix>,
    edge: ArbEdge,
) -> TestResult {
    check_against_oracle(&graph, edge)
}

#[test]
fn test_every_pair_of_a_dense_graph() {
    let mut graph = AdjacencyMatrix::with_nodes(6);
    for source in 0..6 {
        for dest in 0..6 {
            let weight = ((source * 7 + dest * 3) % 5) as i32;
            graph.add_edge(source, dest, weight).unwrap();
        }
    }
    for source in 0..6 {
        for dest in 0..6 {
            assert_eq!(
                graph.shortest_path_with_cost(source, dest).map(|(_, cost)| cost),
                expected_cost(&graph, source, dest),
                "{source} -> {dest}"
            );
        }
    }
}
