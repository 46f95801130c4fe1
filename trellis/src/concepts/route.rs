use std::cell::OnceCell;

use educe::Educe;

use crate::concepts::identity::{NodeId, Nwk};
use crate::concepts::neighbour::Neighbour;
use crate::framework::{RatingParams, Topology};
use crate::lookup;

/// One possible path to a destination: the bridge nodes strictly between the
/// coordinator and the destination, in traversal order. Zero hops means a
/// direct route.
///
/// The rating is computed lazily on first access and cached for the lifetime
/// of the candidate; a candidate never observes topology changes that happen
/// after that point. [`RouteBuilder`](crate::builder::RouteBuilder) is the
/// normal way to obtain candidates, and the only one that guarantees they
/// are structurally valid; direct construction does not check the hops.
#[derive(Educe)]
#[educe(Clone(bound()), Debug(bound()))]
pub struct RouteCandidate<'a, T: Topology + ?Sized> {
    #[educe(Debug(ignore))]
    topo: &'a T,
    coordinator: NodeId,
    destination: NodeId,
    hops: Vec<Neighbour>,
    params: RatingParams,
    rating: OnceCell<f64>,
}

impl<'a, T: Topology + ?Sized> RouteCandidate<'a, T> {
    pub fn new(
        topo: &'a T,
        coordinator: NodeId,
        destination: NodeId,
        hops: Vec<Neighbour>,
        params: RatingParams,
    ) -> Self {
        Self {
            topo,
            coordinator,
            destination,
            hops,
            params,
            rating: OnceCell::new(),
        }
    }

    /// The desirability of this path, lower is better. Computed once, then
    /// served from the cache.
    pub fn rating(&self) -> f64 {
        *self.rating.get_or_init(|| self.compute_rating())
    }

    /// Walks coordinator -> hops.. -> destination, summing the per-link
    /// penalties. A link with no record in either direction is charged the
    /// unknown-link penalty.
    fn compute_rating(&self) -> f64 {
        let mut sum = 0.0;
        let mut prev = self.coordinator;
        for hop in &self.hops {
            sum += self
                .params
                .link_penalty(lookup::link_quality(self.topo, prev, hop.node));
            prev = hop.node;
        }
        sum += self
            .params
            .link_penalty(lookup::link_quality(self.topo, prev, self.destination));
        self.params.total_rating(sum, self.hops.len())
    }

    /// Network addresses of the bridge nodes in path order, ready to embed
    /// in a source-route header. Empty for a direct route. Side-effect-free.
    pub fn hop_nwks(&self) -> Vec<Nwk> {
        self.hops.iter().map(|hop| hop.nwk).collect()
    }

    pub fn hops(&self) -> &[Neighbour] {
        &self.hops
    }

    pub fn hop_count(&self) -> usize {
        self.hops.len()
    }

    pub fn destination(&self) -> NodeId {
        self.destination
    }
}
