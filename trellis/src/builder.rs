use educe::Educe;
use log::{debug, trace};

use crate::concepts::identity::NodeId;
use crate::concepts::neighbour::Neighbour;
use crate::concepts::route::RouteCandidate;
use crate::feedback::ParamsError;
use crate::framework::{LocalIdentity, RatingParams, Topology};
use crate::lookup;
use crate::util::intersect_neighbours;

/// Finds and rates routes from the coordinator to one destination.
///
/// A builder performs at most one search pass over the topology view it was
/// given, caching the sorted candidate list; freshness after a topology
/// change requires a new builder. The search is breadth-bounded: the direct
/// link first, then bridges shared by both neighbour lists, then pairs of
/// bridges, with two pruning short-circuits so known-good cases never pay
/// for the wider sweeps.
#[derive(Educe)]
#[educe(Debug(bound()))]
pub struct RouteBuilder<'a, T: Topology + ?Sized> {
    #[educe(Debug(ignore))]
    topo: &'a T,
    coordinator: NodeId,
    destination: NodeId,
    params: RatingParams,
    routes: Option<Vec<RouteCandidate<'a, T>>>,
}

impl<'a, T: Topology + ?Sized> RouteBuilder<'a, T> {
    pub fn new<I>(topo: &'a T, local: &I, destination: NodeId) -> Self
    where
        I: LocalIdentity + ?Sized,
    {
        Self {
            topo,
            coordinator: local.node_id(),
            destination,
            params: RatingParams::default(),
            routes: None,
        }
    }

    /// Like [`new`](Self::new), with injected rating parameters.
    pub fn with_params<I>(
        topo: &'a T,
        local: &I,
        destination: NodeId,
        params: RatingParams,
    ) -> Result<Self, ParamsError>
    where
        I: LocalIdentity + ?Sized,
    {
        params.validate()?;
        Ok(Self {
            topo,
            coordinator: local.node_id(),
            destination,
            params,
            routes: None,
        })
    }

    /// Runs the search pass if it has not run yet. Calling it again is a
    /// no-op; the candidate set is fixed once built.
    pub fn build(&mut self) {
        if self.routes.is_none() {
            self.routes = Some(self.search());
        }
    }

    /// The lowest-rated candidate, or `None` if the destination is
    /// unreachable within two hops given current topology knowledge.
    /// Triggers the search pass on first call.
    pub fn best_route(&mut self) -> Option<&RouteCandidate<'a, T>> {
        self.build();
        self.routes.as_ref().and_then(|routes| routes.first())
    }

    /// All candidates found, best first. Triggers the search pass on first
    /// call.
    pub fn routes(&mut self) -> &[RouteCandidate<'a, T>] {
        self.build();
        self.routes.as_deref().unwrap_or(&[])
    }

    fn search(&self) -> Vec<RouteCandidate<'a, T>> {
        trace!(
            "searching routes from {} to {}",
            self.coordinator,
            self.destination
        );
        let direct_lqi = lookup::link_quality(self.topo, self.coordinator, self.destination);

        let mut routes = Vec::new();
        if direct_lqi.is_some() {
            routes.push(self.candidate(Vec::new()));
        }
        if let Some(lqi) = direct_lqi {
            if lqi >= self.params.reliable_lqi {
                debug!(
                    "direct link to {} is reliable (lqi {}), skipping bridge search",
                    self.destination, lqi
                );
                return routes;
            }
        }

        let coordinator_nbrs = self.topo.neighbours_of(self.coordinator);
        let destination_nbrs = self.topo.neighbours_of(self.destination);
        // a bridge is only worth considering if its link to the coordinator
        // beats the direct link, or there is no direct link at all
        let better_than_direct = |n: &Neighbour| direct_lqi.map_or(true, |lqi| n.lqi > lqi);
        let is_endpoint = |n: &Neighbour| n.node == self.coordinator || n.node == self.destination;

        for bridge in intersect_neighbours(&coordinator_nbrs, &destination_nbrs) {
            if better_than_direct(bridge) && !is_endpoint(bridge) {
                routes.push(self.candidate(vec![bridge.clone()]));
            }
        }
        Self::sort_candidates(&mut routes);
        if let Some(best) = routes.first() {
            if best.rating() <= self.params.acceptable_rating {
                debug!(
                    "settling for a one-hop route to {} (rating {:.1})",
                    self.destination,
                    best.rating()
                );
                return routes;
            }
        }

        trace!(
            "one-hop routes to {} insufficient, trying bridge pairs",
            self.destination
        );
        for first in coordinator_nbrs
            .iter()
            .filter(|n| better_than_direct(n) && !is_endpoint(n))
        {
            for second in destination_nbrs
                .iter()
                .filter(|n| better_than_direct(n) && !is_endpoint(n))
            {
                if first.node == second.node {
                    continue;
                }
                if lookup::are_neighbours(self.topo, first.node, second.node) {
                    routes.push(self.candidate(vec![first.clone(), second.clone()]));
                }
            }
        }
        Self::sort_candidates(&mut routes);

        if routes.is_empty() {
            debug!("no route to {} within two hops", self.destination);
        } else {
            trace!("{} candidate routes to {}", routes.len(), self.destination);
        }
        routes
    }

    fn candidate(&self, hops: Vec<Neighbour>) -> RouteCandidate<'a, T> {
        RouteCandidate::new(
            self.topo,
            self.coordinator,
            self.destination,
            hops,
            self.params,
        )
    }

    /// Ascending by rating; ties go to the shorter path, then to insertion
    /// order, keeping the result deterministic.
    fn sort_candidates(routes: &mut [RouteCandidate<'a, T>]) {
        routes.sort_by(|a, b| {
            a.rating()
                .total_cmp(&b.rating())
                .then(a.hop_count().cmp(&b.hop_count()))
        });
    }
}
