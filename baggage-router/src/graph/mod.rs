//! Weighted graph model of the conveyor network.
//!
//! Nodes are stored in a [`Graph`] and addressed by [`NodeId`]. The graph
//! itself holds no search state; per-search distances live in
//! [`RunState`](crate::pathfinder::RunState).

mod node;
mod path;
mod registry;

pub use node::{Edge, Node, NodeId, NodeKind};
pub use path::NodePath;
pub use registry::Graph;
