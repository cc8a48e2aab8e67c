//! Per-search distance and predecessor table.

use crate::graph::{Graph, NodeId};

/// Tentative travel times and predecessors for one shortest-path search.
///
/// Kept outside the graph so the graph stays immutable while searching.
/// One slot per node; every slot starts at +infinity with no predecessor.
#[derive(Debug, Clone)]
pub struct RunState {
    travel_time: Vec<f64>,
    previous: Vec<Option<NodeId>>,
}

impl RunState {
    /// Create a state with every node of `graph` reset.
    pub fn new(graph: &Graph) -> Self {
        Self {
            travel_time: vec![f64::INFINITY; graph.len()],
            previous: vec![None; graph.len()],
        }
    }

    /// Reset a single node to infinity with no predecessor.
    pub fn reset(&mut self, node: NodeId) {
        self.travel_time[node.0] = f64::INFINITY;
        self.previous[node.0] = None;
    }

    /// Reset every node, resizing to fit `graph`.
    ///
    /// Must run before each search that reuses this state: within one search
    /// travel times only ever decrease.
    pub fn reset_all(&mut self, graph: &Graph) {
        self.travel_time.clear();
        self.travel_time.resize(graph.len(), f64::INFINITY);
        self.previous.clear();
        self.previous.resize(graph.len(), None);
    }

    /// Current best known travel time to `node`.
    pub fn travel_time(&self, node: NodeId) -> f64 {
        self.travel_time[node.0]
    }

    /// Predecessor of `node` on the best known path.
    pub fn previous(&self, node: NodeId) -> Option<NodeId> {
        self.previous[node.0]
    }

    pub(crate) fn set_source(&mut self, node: NodeId) {
        self.travel_time[node.0] = 0.0;
        self.previous[node.0] = None;
    }

    pub(crate) fn improve(&mut self, node: NodeId, travel_time: f64, previous: NodeId) {
        self.travel_time[node.0] = travel_time;
        self.previous[node.0] = Some(previous);
    }
}
