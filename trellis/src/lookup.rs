use crate::concepts::identity::NodeId;
use crate::concepts::neighbour::Lqi;
use crate::framework::Topology;

/// Looks up the observed link quality between two nodes.
///
/// Measurement sharing between the two ends of a link is incomplete in real
/// deployments, so both directions are searched: first `a`'s neighbour list
/// for `b`, then `b`'s list for `a`. The first record found wins. `None`
/// means no information, not an error.
pub fn link_quality<T: Topology + ?Sized>(topo: &T, a: NodeId, b: NodeId) -> Option<Lqi> {
    if let Some(found) = topo.neighbours_of(a).iter().find(|n| n.node == b) {
        return Some(found.lqi);
    }
    topo.neighbours_of(b)
        .iter()
        .find(|n| n.node == a)
        .map(|n| n.lqi)
}

/// Whether any link-quality record exists between the two nodes, in either
/// direction.
pub fn are_neighbours<T: Topology + ?Sized>(topo: &T, a: NodeId, b: NodeId) -> bool {
    link_quality(topo, a, b).is_some()
}
