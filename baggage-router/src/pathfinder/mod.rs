//! Shortest travel-time search.
//!
//! [`ShortestPathfinder`] runs Dijkstra's algorithm from a source node over
//! an immutable [`Graph`](crate::graph::Graph), keeping tentative travel
//! times and predecessors in a [`RunState`] it owns.
//!
//! Ties between equal travel times are broken by queue insertion order, so
//! among several equally short paths the first one discovered is returned.

mod dijkstra;
mod state;

pub use dijkstra::ShortestPathfinder;
pub use state::RunState;
