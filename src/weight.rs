//! Edge weights and path distances.

use crate::error::{GraphError, Result};

/// The weight of a single edge.  A weight of zero means "no edge".
pub type Weight = i32;

/// The largest admissible edge weight.  No value of [`Weight`] can exceed
/// it, so only negative weights need to be rejected at runtime.
pub const INFINITY: Weight = Weight::MAX;

/// The accumulated weight of a path.  Wide enough that summing any number
/// of admissible weights along a simple path cannot overflow before the
/// [`UNREACHABLE`] ceiling is hit.
pub type Distance = u64;

/// A tentative distance at or above this value means unreachable.
pub const UNREACHABLE: Distance = INFINITY as Distance;

/// Checks that `weight` may be stored in a graph.  Zero is accepted, since
/// inserting it means deleting the edge.
pub fn check_weight(weight: Weight) -> Result<()> {
    if weight < 0 {
        Err(GraphError::InvalidWeight { weight })
    } else {
        Ok(())
    }
}

/// Widens a stored (positive) weight into a [`Distance`].
pub(crate) fn as_distance(weight: Weight) -> Distance {
    Distance::from(weight.unsigned_abs())
}
