//! Conveyor network nodes and edges.

use std::fmt;

/// Index of a node within a [`Graph`](super::Graph).
///
/// Ids are dense and only meaningful for the graph that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// The role a node plays in the conveyor network.
///
/// The variant is derived from the node's name by [`NodeKind::classify`]
/// and never changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A departure gate or any other point bags can be routed to.
    PlainTerminal,
    /// Where bags enter the network (checkin or ticketing desks).
    CheckinCounter,
    /// The terminal arriving bags are routed to.
    BaggageClaim,
}

impl NodeKind {
    /// Derive a node's kind from its name.
    ///
    /// Matching is case-insensitive. Names containing "ticketing" or
    /// "checkin" are checkin counters; otherwise names containing "baggage"
    /// are baggage claims; everything else is a plain terminal.
    ///
    /// # Examples
    ///
    /// ```
    /// use baggage_router::graph::NodeKind;
    ///
    /// assert_eq!(NodeKind::classify("A1"), NodeKind::PlainTerminal);
    /// assert_eq!(NodeKind::classify("Concourse_A_Ticketing"), NodeKind::CheckinCounter);
    /// assert_eq!(NodeKind::classify("BaggageClaim"), NodeKind::BaggageClaim);
    /// ```
    pub fn classify(name: &str) -> Self {
        let lower = name.to_lowercase();
        if lower.contains("ticketing") || lower.contains("checkin") {
            NodeKind::CheckinCounter
        } else if lower.contains("baggage") {
            NodeKind::BaggageClaim
        } else {
            NodeKind::PlainTerminal
        }
    }

    /// Whether nodes of this kind belong to the terminal family.
    ///
    /// Departures can only leave from terminals; a bare checkin counter is
    /// not one.
    pub fn is_terminal(self) -> bool {
        matches!(self, NodeKind::PlainTerminal | NodeKind::BaggageClaim)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::PlainTerminal => "terminal",
            NodeKind::CheckinCounter => "checkin counter",
            NodeKind::BaggageClaim => "baggage claim",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A directed conveyor arc to `target` taking `travel_time` to traverse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    target: NodeId,
    travel_time: f64,
}

impl Edge {
    /// Create a new edge.
    ///
    /// Travel times must be non-negative; shortest-path search relies on it.
    pub fn new(target: NodeId, travel_time: f64) -> Self {
        debug_assert!(travel_time >= 0.0, "negative travel time {travel_time}");
        Self {
            target,
            travel_time,
        }
    }

    pub fn target(&self) -> NodeId {
        self.target
    }

    pub fn travel_time(&self) -> f64 {
        self.travel_time
    }
}

/// A point in the conveyor network.
///
/// Nodes are identified by name. Outgoing edges are kept in insertion order
/// and are never deduplicated.
#[derive(Debug, Clone)]
pub struct Node {
    name: String,
    kind: NodeKind,
    edges: Vec<Edge>,
}

impl Node {
    /// Create a node with no edges, classifying it by name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let kind = NodeKind::classify(&name);
        Self {
            name,
            kind,
            edges: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Outgoing edges, in the order they were added.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Append an outgoing edge. Touches no other node.
    pub fn add_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Node {}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
