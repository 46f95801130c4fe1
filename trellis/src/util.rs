use crate::concepts::neighbour::Neighbour;

/// Returns the entries of `a` whose node identity also appears in `b`.
///
/// Matching is by identity alone; the two lists usually carry different
/// link-quality measurements for the same node, and the caller decides which
/// side's record to keep.
pub fn intersect_neighbours<'a>(a: &'a [Neighbour], b: &[Neighbour]) -> Vec<&'a Neighbour> {
    a.iter()
        .filter(|n| b.iter().any(|m| m.node == n.node))
        .collect()
}
