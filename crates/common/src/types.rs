/// Cost of travelling along a single directed edge or path.
pub type Weight = f64;

/// Type alias for a single weighted edge: (from, to, weight)
pub type Edge = (usize, usize, Weight);

/// Sentinel cost for an unreachable vertex pair.
pub const UNREACHABLE: Weight = f64::INFINITY;

/// Cost of staying on the same vertex.
pub const SELF_LOOP: Weight = 0.0;
