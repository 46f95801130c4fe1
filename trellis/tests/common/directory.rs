use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use trellis::concepts::identity::{NodeId, Nwk};
use trellis::concepts::neighbour::{Lqi, Neighbour};
use trellis::framework::{LocalIdentity, Topology, TopologyListener};

/// In-memory neighbour directory driving the route engine in tests. The
/// real directory lives in the coordinator application and is refreshed by
/// topology scans; this one is filled by hand.
#[serde_as]
#[derive(Serialize, Deserialize)]
pub struct StaticTopology {
    pub coordinator: NodeId,
    #[serde_as(as = "Vec<(_, _)>")]
    pub neighbours: HashMap<NodeId, Vec<Neighbour>>,
    #[serde(skip)]
    listeners: Vec<Box<dyn TopologyListener>>,
}

impl StaticTopology {
    pub fn new(coordinator: u64) -> Self {
        StaticTopology {
            coordinator: NodeId(coordinator),
            neighbours: HashMap::new(),
            listeners: Vec::new(),
        }
    }

    /// Records `to` in `from`'s neighbour list, one direction only. The
    /// network address is derived from the identity so assertions can
    /// predict it.
    pub fn record(&mut self, from: u64, to: u64, lqi: Lqi) {
        self.neighbours
            .entry(NodeId(from))
            .or_default()
            .push(Neighbour {
                node: NodeId(to),
                nwk: Nwk(to as u16),
                lqi,
            });
    }

    /// Records the link in both directions with the same measurement.
    pub fn link(&mut self, a: u64, b: u64, lqi: Lqi) {
        self.record(a, b, lqi);
        self.record(b, a, lqi);
    }

    pub fn subscribe(&mut self, listener: Box<dyn TopologyListener>) {
        self.listeners.push(listener);
    }

    /// Replaces every record `from` holds for `to` with a new measurement,
    /// then publishes the change.
    pub fn update_link(&mut self, from: u64, to: u64, lqi: Lqi) {
        if let Some(list) = self.neighbours.get_mut(&NodeId(from)) {
            for entry in list.iter_mut().filter(|n| n.node == NodeId(to)) {
                entry.lqi = lqi;
            }
        }
        for listener in &mut self.listeners {
            listener.topology_changed(NodeId(from));
        }
    }

    pub fn freeze(&self) -> String {
        serde_json::to_string(self).unwrap()
    }

    pub fn restore(state: &str) -> StaticTopology {
        serde_json::from_str(state).unwrap()
    }
}

impl Topology for StaticTopology {
    fn neighbours_of(&self, node: NodeId) -> Vec<Neighbour> {
        self.neighbours.get(&node).cloned().unwrap_or_default()
    }
}

impl LocalIdentity for StaticTopology {
    fn node_id(&self) -> NodeId {
        self.coordinator
    }
}

/// Wraps a directory and records which nodes the engine asks about, so
/// tests can verify the search short-circuits by the absence of queries.
pub struct Probe<'a> {
    inner: &'a StaticTopology,
    queried: RefCell<Vec<NodeId>>,
}

impl<'a> Probe<'a> {
    pub fn new(inner: &'a StaticTopology) -> Self {
        Probe {
            inner,
            queried: RefCell::new(Vec::new()),
        }
    }

    pub fn queried(&self) -> Vec<NodeId> {
        self.queried.borrow().clone()
    }
}

impl Topology for Probe<'_> {
    fn neighbours_of(&self, node: NodeId) -> Vec<Neighbour> {
        self.queried.borrow_mut().push(node);
        self.inner.neighbours_of(node)
    }
}

impl LocalIdentity for Probe<'_> {
    fn node_id(&self) -> NodeId {
        self.inner.node_id()
    }
}

/// Counts change notifications, standing in for a route-cache layer.
pub struct CountingListener(pub Rc<Cell<usize>>);

impl TopologyListener for CountingListener {
    fn topology_changed(&mut self, _node: NodeId) {
        self.0.set(self.0.get() + 1);
    }
}
