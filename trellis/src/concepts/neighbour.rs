#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::concepts::identity::{NodeId, Nwk};

/// Link quality measured for one observed direction of a radio link.
/// Higher is better. There is no symmetry guarantee: a node may hold a
/// measurement for a link while the node on the other end holds none.
pub type Lqi = u8;

/// The best measurable link quality.
pub const LQI_MAX: Lqi = 255;

/// One entry of a node's observed-neighbour list.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Neighbour {
    /// the stable identity of the neighbouring node
    pub node: NodeId,
    /// the transient network address of the neighbouring node
    pub nwk: Nwk,
    /// the link quality observed towards this neighbour
    pub lqi: Lqi,
}
