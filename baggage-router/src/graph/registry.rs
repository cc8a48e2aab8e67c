//! Node registry for a conveyor network.

use std::collections::HashMap;

use tracing::trace;

use super::node::{Edge, Node, NodeId, NodeKind};

/// A conveyor network: nodes addressed by [`NodeId`] and looked up by name.
///
/// Names are unique. Each parse session builds a fresh graph; nodes are
/// never merged across graphs.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    by_name: HashMap<String, NodeId>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a node id by name.
    pub fn lookup(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }

    /// Look up a node by name.
    pub fn get(&self, name: &str) -> Option<&Node> {
        self.lookup(name).map(|id| self.node(id))
    }

    /// Returns the node for `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this graph.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Shorthand for the name of node `id`.
    pub fn name(&self, id: NodeId) -> &str {
        self.node(id).name()
    }

    /// Shorthand for the kind of node `id`.
    pub fn kind(&self, id: NodeId) -> NodeKind {
        self.node(id).kind()
    }

    /// Iterate over all nodes with their ids, in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(idx, node)| (NodeId(idx), node))
    }

    /// Return the id of the node called `name`, creating it if needed.
    ///
    /// An existing node is always reused, so repeated mentions of a name
    /// converge on one node.
    pub fn get_or_insert(&mut self, name: &str) -> NodeId {
        if let Some(id) = self.lookup(name) {
            return id;
        }

        let id = NodeId(self.nodes.len());
        let node = Node::new(name);
        trace!(node = name, kind = %node.kind(), "registered node");
        self.nodes.push(node);
        self.by_name.insert(name.to_string(), id);
        id
    }

    /// Append `edge` to the outgoing edges of `from`.
    pub fn add_edge(&mut self, from: NodeId, edge: Edge) {
        self.nodes[from.0].add_edge(edge);
    }

    /// Link two named nodes with a bidirectional conveyor.
    ///
    /// Both nodes are created if missing. Two edges are added, one each way,
    /// with the same travel time. Returns the ids of `a` and `b`.
    pub fn connect(&mut self, a: &str, b: &str, travel_time: f64) -> (NodeId, NodeId) {
        let a_id = self.get_or_insert(a);
        let b_id = self.get_or_insert(b);
        self.add_edge(a_id, Edge::new(b_id, travel_time));
        self.add_edge(b_id, Edge::new(a_id, travel_time));
        (a_id, b_id)
    }
}
