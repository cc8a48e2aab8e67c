//! Airport baggage router.
//!
//! Given a conveyor topology, a departure schedule and a list of bags,
//! finds the quickest conveyor route for each bag to its departure gate or,
//! for arriving bags, to baggage claim.

pub mod config;
pub mod domain;
pub mod error;
pub mod graph;
pub mod input;
pub mod parse;
pub mod pathfinder;
pub mod router;
pub mod web;

pub use error::RouterError;
pub use router::{BagRoute, compute_all_paths, compute_all_paths_with, plan_routes};
