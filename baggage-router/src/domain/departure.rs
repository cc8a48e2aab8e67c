//! Scheduled departures.

use super::DepartureTime;
use crate::graph::NodeId;

/// A scheduled flight leaving from a terminal.
#[derive(Debug, Clone, PartialEq)]
pub struct Departure {
    flight_id: String,
    terminal: NodeId,
    destination: String,
    departure_time: DepartureTime,
}

impl Departure {
    /// Create a departure.
    ///
    /// `terminal` must be a node of the terminal family; the model builder
    /// checks this before constructing one.
    pub fn new(
        flight_id: impl Into<String>,
        terminal: NodeId,
        destination: impl Into<String>,
        departure_time: DepartureTime,
    ) -> Self {
        Self {
            flight_id: flight_id.into(),
            terminal,
            destination: destination.into(),
            departure_time,
        }
    }

    pub fn flight_id(&self) -> &str {
        &self.flight_id
    }

    /// The gate bags for this flight are routed to.
    pub fn terminal(&self) -> NodeId {
        self.terminal
    }

    /// Where the flight is going (e.g. "LAX"). Not used for routing.
    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn departure_time(&self) -> DepartureTime {
        self.departure_time
    }
}
