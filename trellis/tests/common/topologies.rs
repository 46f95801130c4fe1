use crate::common::directory::StaticTopology;

/// Coordinator 1, destination 2, single relay 3, no direct link.
pub fn single_relay() -> StaticTopology {
    let mut topo = StaticTopology::new(1);
    topo.record(1, 3, 200);
    topo.record(3, 2, 180);
    topo.record(2, 3, 180);
    topo
}

/// Direct link well above the reliability threshold, plus bridges that a
/// short-circuiting search must never consult.
pub fn strong_direct() -> StaticTopology {
    let mut topo = StaticTopology::new(1);
    topo.record(1, 2, 250);
    topo.link(1, 3, 240);
    topo.link(2, 3, 240);
    topo
}

/// No direct link; two shared bridges with complementary strengths.
/// Bridge 3 is strong towards the coordinator but weak towards the
/// destination, bridge 4 is decent both ways.
pub fn two_bridges() -> StaticTopology {
    let mut topo = StaticTopology::new(1);
    topo.record(1, 3, 220);
    topo.record(2, 3, 90);
    topo.record(1, 4, 150);
    topo.record(2, 4, 210);
    topo
}

/// A weak direct link, a poor shared bridge 3, and a strong chain
/// 1 -> 4 -> 5 -> 2 that only a pair sweep can find.
pub fn two_hop_chain() -> StaticTopology {
    let mut topo = StaticTopology::new(1);
    topo.record(1, 2, 40);
    topo.record(1, 3, 120);
    topo.record(2, 3, 90);
    topo.record(1, 4, 210);
    topo.record(2, 5, 205);
    topo.link(4, 5, 220);
    topo
}

/// A shared bridge with excellent links on both sides, plus a bridge pair
/// that only the two-hop sweep would reach.
pub fn strong_shared_bridge() -> StaticTopology {
    let mut topo = StaticTopology::new(1);
    topo.record(1, 3, 250);
    topo.record(2, 3, 250);
    topo.record(1, 4, 240);
    topo.record(2, 5, 240);
    topo.link(4, 5, 240);
    topo
}
