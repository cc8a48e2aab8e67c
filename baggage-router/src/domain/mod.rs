//! Domain types for baggage routing.
//!
//! Departures and bags refer to graph nodes by [`NodeId`](crate::graph::NodeId)
//! and are only constructed once those nodes have been validated, so code
//! receiving them can trust that the references resolve.

mod bag;
mod departure;
mod error;
mod time;

pub use bag::{Bag, FlightRef};
pub use departure::Departure;
pub use error::InvalidInput;
pub use time::{DepartureTime, TimeError};
