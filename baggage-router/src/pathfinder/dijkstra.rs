//! Dijkstra's shortest-path search over the conveyor graph.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::{debug, trace};

use super::state::RunState;
use crate::graph::{Graph, NodeId, NodePath};

/// Priority queue entry.
///
/// `BinaryHeap` is a max-heap, so the ordering is inverted: the smallest
/// travel time pops first, and among equal travel times the entry inserted
/// first pops first.
#[derive(Debug, Clone, Copy)]
struct QueueEntry {
    travel_time: f64,
    seq: u64,
    node: NodeId,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .travel_time
            .total_cmp(&self.travel_time)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

/// Single-source shortest-path search with its own [`RunState`].
///
/// The graph is borrowed immutably; all mutable search state lives in the
/// pathfinder, so separate pathfinders over one graph never interfere.
pub struct ShortestPathfinder<'g> {
    graph: &'g Graph,
    state: RunState,
}

impl<'g> ShortestPathfinder<'g> {
    /// Create a pathfinder with all nodes reset.
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            state: RunState::new(graph),
        }
    }

    /// Distances and predecessors left by the last search.
    pub fn state(&self) -> &RunState {
        &self.state
    }

    /// Reset every node to infinity with no predecessor.
    pub fn reset_all(&mut self) {
        self.state.reset_all(self.graph);
    }

    /// Compute the shortest travel time from `source` to every node.
    ///
    /// Does not reset first: callers reusing the pathfinder must call
    /// [`reset_all`](Self::reset_all) beforehand, or distances from the
    /// previous search leak into this one. Unreachable nodes keep an
    /// infinite travel time and no predecessor.
    ///
    /// A node's predecessor is only replaced by a strictly shorter path, so
    /// of several equally short paths the first one found is kept. Returns
    /// the number of nodes settled.
    pub fn compute_from_source(&mut self, source: NodeId) -> usize {
        let mut queue = BinaryHeap::new();
        let mut seq = 0u64;
        let mut settled = 0usize;

        self.state.set_source(source);
        queue.push(QueueEntry {
            travel_time: 0.0,
            seq,
            node: source,
        });

        while let Some(QueueEntry {
            travel_time, node, ..
        }) = queue.pop()
        {
            // Superseded by a later, shorter entry for the same node.
            if travel_time > self.state.travel_time(node) {
                continue;
            }
            settled += 1;

            for edge in self.graph.node(node).edges() {
                let target = edge.target();
                let candidate = travel_time + edge.travel_time();

                if candidate < self.state.travel_time(target) {
                    trace!(
                        from = self.graph.name(node),
                        to = self.graph.name(target),
                        travel_time = candidate,
                        "relaxed edge"
                    );
                    self.state.improve(target, candidate, node);
                    seq += 1;
                    queue.push(QueueEntry {
                        travel_time: candidate,
                        seq,
                        node: target,
                    });
                }
            }
        }

        debug!(
            source = self.graph.name(source),
            settled, "shortest-path search complete"
        );
        settled
    }

    /// Reset, search from `source`, and extract the path to `destination`.
    pub fn shortest_path(&mut self, source: NodeId, destination: NodeId) -> NodePath {
        self.reset_all();
        self.compute_from_source(source);
        self.path_to(destination)
    }

    /// Extract the path to `destination` from the current state.
    ///
    /// Follows predecessors back from `destination`. If the destination was
    /// not reached the result is `[destination]` with infinite travel time.
    pub fn path_to(&self, destination: NodeId) -> NodePath {
        let mut nodes = vec![destination];
        let mut current = destination;

        // Predecessor chains are acyclic after a clean search; the bound
        // only guards against reading a state that was never reset.
        while let Some(previous) = self.state.previous(current) {
            if nodes.len() > self.graph.len() {
                break;
            }
            nodes.push(previous);
            current = previous;
        }

        nodes.reverse();
        NodePath::new(nodes, self.state.travel_time(destination))
    }
}
