use super::types::Weight;

/// Adds two path costs, refusing to combine anything that is not finite.
///
/// Returns `None` when either leg is unreachable (`+inf`) or otherwise
/// non-finite, so a sum like `inf + inf` or `inf + (-5.0)` can never be
/// mistaken for a real candidate during relaxation.
#[inline]
pub fn path_sum(first_leg: Weight, second_leg: Weight) -> Option<Weight> {
    if first_leg.is_finite() && second_leg.is_finite() {
        Some(first_leg + second_leg)
    } else {
        None
    }
}

/// Single relaxation step: returns the cheaper of `current` and the path
/// through an intermediate vertex (`via_first + via_second`).
///
/// `current` is kept unless the candidate is strictly smaller.
#[inline]
pub fn relax(current: Weight, via_first: Weight, via_second: Weight) -> Weight {
    match path_sum(via_first, via_second) {
        Some(candidate) if candidate < current => candidate,
        _ => current,
    }
}
