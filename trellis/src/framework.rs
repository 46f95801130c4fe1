use crate::concepts::identity::NodeId;
use crate::concepts::neighbour::{Lqi, Neighbour, LQI_MAX};
use crate::feedback::ParamsError;

/// Read-only view of the coordinator's topology knowledge, implemented by
/// the neighbour directory. The directory is owned and refreshed by an
/// external scanning process; this engine only ever reads it.
pub trait Topology {
    /// Returns the neighbours a node has been observed to have, with their
    /// link-quality measurements. The list is a snapshot taken at call time;
    /// an unknown node yields an empty list, never an error.
    fn neighbours_of(&self, node: NodeId) -> Vec<Neighbour>;
}

/// Exposes the identity of the local node, i.e. the coordinator a route
/// search starts from.
pub trait LocalIdentity {
    fn node_id(&self) -> NodeId;
}

/// Published by a neighbour directory when its record for a node changes.
///
/// Route lookups are one-shot and never subscribe; a caching layer that
/// keeps builders alive across lookups subscribes and discards builders for
/// the nodes it is notified about.
pub trait TopologyListener {
    fn topology_changed(&mut self, node: NodeId);
}

/// Penalty charged for a link at the reliability floor; the logarithmic
/// curve saturates here for every measurement below the floor.
pub const SATURATION_PENALTY: f64 = 255.0;

/// Shape of the per-link penalty curve. Both variants are monotonic in link
/// quality: a stronger link never rates worse.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum PenaltyCurve {
    /// Saturates below the reliability floor, then falls off on a log scale
    /// towards zero at [`LQI_MAX`]. The curve flattens near the top of the
    /// range, so a fixed improvement is worth less on an already strong link
    /// than on one close to the floor.
    Logarithmic,
    /// The historical squared-deficit model: per-link `(255 - lqi)^2`,
    /// folded with a square root. Kept for compatibility with rating values
    /// produced by older coordinator firmware.
    SquaredDeficit,
}

/// Tunable constants of the rating function and the search pruning rules.
#[derive(Copy, Clone, Debug)]
pub struct RatingParams {
    /// link quality at or above which a direct link is trusted without
    /// searching for bridges; also the saturation floor of the penalty curve
    pub reliable_lqi: Lqi,
    /// rating at or below which a found route is good enough to stop the
    /// search before the two-hop sweep
    pub acceptable_rating: f64,
    /// penalty charged for a link with no recorded measurement; must exceed
    /// [`SATURATION_PENALTY`] so unmeasured links never beat measured ones
    pub unknown_link_penalty: f64,
    /// flat rating overhead added per intermediate hop
    pub hop_overhead: f64,
    /// shape of the per-link penalty curve
    pub curve: PenaltyCurve,
}

impl Default for RatingParams {
    fn default() -> Self {
        Self {
            reliable_lqi: 100,
            acceptable_rating: 80.0,
            unknown_link_penalty: 1024.0,
            hop_overhead: 40.0,
            curve: PenaltyCurve::Logarithmic,
        }
    }
}

impl RatingParams {
    /// Checks the invariants the rating function relies on.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.unknown_link_penalty <= SATURATION_PENALTY {
            return Err(ParamsError::UnknownPenaltyTooLow(self.unknown_link_penalty));
        }
        if self.hop_overhead < 0.0 {
            return Err(ParamsError::NegativeHopOverhead(self.hop_overhead));
        }
        if self.acceptable_rating < 0.0 {
            return Err(ParamsError::NegativeAcceptableRating(self.acceptable_rating));
        }
        Ok(())
    }

    /// Penalty contributed by one link of a path, `None` meaning the link
    /// has no recorded measurement.
    pub fn link_penalty(&self, lqi: Option<Lqi>) -> f64 {
        let Some(lqi) = lqi else {
            return match self.curve {
                PenaltyCurve::Logarithmic => self.unknown_link_penalty,
                // squared, so the fold's square root lands back on the
                // configured value for a path with a single unknown link
                PenaltyCurve::SquaredDeficit => {
                    self.unknown_link_penalty * self.unknown_link_penalty
                }
            };
        };
        match self.curve {
            PenaltyCurve::Logarithmic => {
                if lqi < self.reliable_lqi {
                    SATURATION_PENALTY
                } else if lqi == LQI_MAX {
                    0.0
                } else {
                    let span = (LQI_MAX - self.reliable_lqi) as f64 + 1.0;
                    let above = (lqi - self.reliable_lqi) as f64;
                    SATURATION_PENALTY * (1.0 - (1.0 + above).ln() / span.ln())
                }
            }
            PenaltyCurve::SquaredDeficit => {
                let deficit = (LQI_MAX - lqi) as f64;
                deficit * deficit
            }
        }
    }

    /// Folds the summed per-link penalties into the final rating.
    pub fn total_rating(&self, penalty_sum: f64, hop_count: usize) -> f64 {
        let base = match self.curve {
            PenaltyCurve::Logarithmic => penalty_sum,
            PenaltyCurve::SquaredDeficit => penalty_sum.sqrt(),
        };
        base + hop_count as f64 * self.hop_overhead
    }
}
