//! Shortest-path results.

use super::node::NodeId;
use super::registry::Graph;

/// An ordered sequence of nodes from a source to a destination, inclusive,
/// with the total travel time along it.
///
/// When the destination is unreachable the path holds only the destination
/// and the travel time is infinite.
#[derive(Debug, Clone, PartialEq)]
pub struct NodePath {
    nodes: Vec<NodeId>,
    travel_time: f64,
}

impl NodePath {
    pub fn new(nodes: Vec<NodeId>, travel_time: f64) -> Self {
        Self { nodes, travel_time }
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn travel_time(&self) -> f64 {
        self.travel_time
    }

    /// Whether the destination could be reached at all.
    pub fn is_reachable(&self) -> bool {
        self.travel_time.is_finite()
    }

    pub fn first(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    pub fn last(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    /// Node names along the path, resolved against `graph`.
    pub fn names<'g>(&self, graph: &'g Graph) -> Vec<&'g str> {
        self.nodes.iter().map(|&id| graph.name(id)).collect()
    }
}
