//! Example that builds a weighted graph and prints a shortest path.
//!
//! This example demonstrates how to:
//! - Build either the seven-node sample graph or the large generated graph
//! - Pick the representation to build it in, and optionally convert it
//! - Find a cheapest path (or cycle, when source and destination coincide)
//! - Parse command-line arguments with clap
//! - Control log output with the `WEIGHTED_GRAPHS_LOG` environment variable

use clap::{Parser, ValueEnum};
use weighted_graphs::{
    AdjacencyList, AdjacencyMatrix, Graph, GraphMut, NodeId, SparseAdjacencyMatrix, Weight,
    generate_large_graph::generate_large_graph, graph_tests::sample_graph,
    tracing_support::init_tracing,
};

/// Graph representation selector for CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Representation {
    /// Dense V x V weight matrix
    Matrix,
    /// One linked list of neighbors per node
    List,
    /// Coordinate list of (source, dest, weight) entries
    Sparse,
}

/// Which graph to build
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Input {
    /// The seven-node sample graph
    Sample,
    /// The generated graph of several hundred nodes
    Large,
}

/// Find a shortest path in a weighted directed graph
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Source node
    source: NodeId,

    /// Destination node
    dest: NodeId,

    /// Graph to build
    #[arg(long, value_enum, default_value = "sample")]
    input: Input,

    /// Representation to build the graph in
    #[arg(long, value_enum, default_value = "matrix")]
    build_as: Representation,

    /// Representation to convert to before searching
    #[arg(long, value_enum)]
    convert_to: Option<Representation>,

    /// Largest edge weight used for the generated graph
    #[arg(long, default_value_t = 20)]
    max_weight: Weight,
}

fn build<G: GraphMut>(args: &Args) -> Result<G, Box<dyn std::error::Error>> {
    match args.input {
        Input::Sample => Ok(sample_graph()),
        Input::Large => {
            let mut graph = G::new();
            let max_weight = usize::try_from(args.max_weight.max(1))?;
            generate_large_graph(&mut graph, |i| (i % max_weight + 1) as Weight)?;
            Ok(graph)
        }
    }
}

enum AnyGraph {
    Matrix(AdjacencyMatrix),
    List(AdjacencyList),
    Sparse(SparseAdjacencyMatrix),
}

impl AnyGraph {
    fn build(args: &Args) -> Result<Self, Box<dyn std::error::Error>> {
        Ok(match args.build_as {
            Representation::Matrix => AnyGraph::Matrix(build(args)?),
            Representation::List => AnyGraph::List(build(args)?),
            Representation::Sparse => AnyGraph::Sparse(build(args)?),
        })
    }

    fn convert(self, target: Representation) -> Self {
        match (self, target) {
            (AnyGraph::Matrix(g), Representation::List) => {
                AnyGraph::List(g.to_adjacency_list())
            }
            (AnyGraph::Matrix(g), Representation::Sparse) => {
                AnyGraph::Sparse(g.to_sparse_adjacency_matrix())
            }
            (AnyGraph::List(g), Representation::Matrix) => {
                AnyGraph::Matrix(g.to_adjacency_matrix())
            }
            (AnyGraph::List(g), Representation::Sparse) => {
                AnyGraph::Sparse(g.to_sparse_adjacency_matrix())
            }
            (AnyGraph::Sparse(g), Representation::Matrix) => {
                AnyGraph::Matrix(g.to_adjacency_matrix())
            }
            (AnyGraph::Sparse(g), Representation::List) => {
                AnyGraph::List(g.to_adjacency_list())
            }
            (same, _) => same,
        }
    }

    fn as_graph(&self) -> &dyn Graph {
        match self {
            AnyGraph::Matrix(g) => g,
            AnyGraph::List(g) => g,
            AnyGraph::Sparse(g) => g,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let args = Args::parse();

    let mut graph = AnyGraph::build(&args)?;
    if let Some(target) = args.convert_to {
        graph = graph.convert(target);
    }
    let graph = graph.as_graph();

    eprintln!("Graph built:");
    eprintln!("  Nodes: {}", graph.num_nodes());
    eprintln!("  Edges: {}", graph.num_edges());

    graph.check_node(args.source)?;
    graph.check_node(args.dest)?;
    match graph.shortest_path_with_cost(args.source, args.dest) {
        Some((path, cost)) => {
            let hops: Vec<_> = path.iter().map(ToString::to_string).collect();
            println!("{} (cost {})", hops.join(" -> "), cost);
        }
        None => println!("no path from {} to {}", args.source, args.dest),
    }

    Ok(())
}
