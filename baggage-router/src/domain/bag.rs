//! Bags to be routed.

use std::fmt;

use crate::graph::NodeId;

/// Which flight a bag belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FlightRef {
    /// The bag arrived and goes to baggage claim.
    Arrival,
    /// The bag leaves on the departure with this flight id.
    Departure(String),
}

impl FlightRef {
    /// Interpret a flight id token, given the configured arrival marker.
    ///
    /// ```
    /// use baggage_router::domain::FlightRef;
    ///
    /// assert_eq!(FlightRef::from_token("ARRIVAL", "ARRIVAL"), FlightRef::Arrival);
    /// assert_eq!(
    ///     FlightRef::from_token("UA10", "ARRIVAL"),
    ///     FlightRef::Departure("UA10".to_string())
    /// );
    /// ```
    pub fn from_token(token: &str, arrival_marker: &str) -> Self {
        if token == arrival_marker {
            FlightRef::Arrival
        } else {
            FlightRef::Departure(token.to_string())
        }
    }

    pub fn is_arrival(&self) -> bool {
        matches!(self, FlightRef::Arrival)
    }
}

impl fmt::Display for FlightRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlightRef::Arrival => f.write_str("arrival"),
            FlightRef::Departure(id) => f.write_str(id),
        }
    }
}

/// A bag entering the conveyor network at `source`, bound for
/// `destination`.
///
/// Both ends are resolved against the graph when the bag is built, so a
/// `Bag` always refers to existing nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Bag {
    id: String,
    source: NodeId,
    destination: NodeId,
    flight: FlightRef,
}

impl Bag {
    pub fn new(
        id: impl Into<String>,
        source: NodeId,
        destination: NodeId,
        flight: FlightRef,
    ) -> Self {
        Self {
            id: id.into(),
            source,
            destination,
            flight,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn source(&self) -> NodeId {
        self.source
    }

    /// The terminal the bag must reach.
    pub fn destination(&self) -> NodeId {
        self.destination
    }

    pub fn flight(&self) -> &FlightRef {
        &self.flight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrival_marker_is_exact() {
        assert_eq!(FlightRef::from_token("ARRIVAL", "ARRIVAL"), FlightRef::Arrival);
        assert!(!FlightRef::from_token("arrival", "ARRIVAL").is_arrival());
        assert!(FlightRef::from_token("LANDED", "LANDED").is_arrival());
    }

    #[test]
    fn flight_display() {
        assert_eq!(FlightRef::Arrival.to_string(), "arrival");
        assert_eq!(FlightRef::Departure("UA12".into()).to_string(), "UA12");
    }

    #[test]
    fn bag_accessors() {
        let bag = Bag::new("0001", NodeId(0), NodeId(3), FlightRef::Arrival);
        assert_eq!(bag.id(), "0001");
        assert_eq!(bag.source(), NodeId(0));
        assert_eq!(bag.destination(), NodeId(3));
        assert!(bag.flight().is_arrival());
    }
}
