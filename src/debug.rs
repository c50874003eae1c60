use std::fmt::{Debug, Formatter};

use crate::{Graph, NodeId};

struct EdgeTag(NodeId, NodeId);

impl Debug for EdgeTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.0, self.1)
    }
}

struct EdgeDebug<'a, G: ?Sized>(&'a G);

impl<G> Debug for EdgeDebug<'_, G>
where
    G: Graph + ?Sized,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(
                self.0
                    .edges()
                    .into_iter()
                    .map(|edge| (EdgeTag(edge.source, edge.dest), edge.weight)),
            )
            .finish()
    }
}

/// Formats a graph as its node count and a map of `source -> dest` to
/// weight, in row-major order.  The output is the same for every
/// representation of the same graph apart from `name`.
pub(crate) fn format_debug<G>(graph: &G, fmt: &mut Formatter<'_>, name: &str) -> std::fmt::Result
where
    G: Graph + ?Sized,
{
    fmt.debug_struct(name)
        .field("num_nodes", &graph.num_nodes())
        .field("edges", &EdgeDebug(graph))
        .finish()
}
