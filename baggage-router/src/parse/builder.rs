//! Construction of the routing model from input sections.
//!
//! Each handler validates one line at a time and commits it only if the
//! whole line is valid. The first invalid line aborts its section; lines
//! processed before it stay applied to the builder.

use std::collections::HashMap;

use tracing::{debug, warn};

use super::sections::{SourceLine, split_sections};
use crate::config::RouterConfig;
use crate::domain::{Bag, Departure, DepartureTime, FlightRef, InvalidInput};
use crate::graph::{Graph, NodeId, NodeKind};

/// Everything needed to route bags: the conveyor graph, the departure
/// schedule and the bags in input order.
#[derive(Debug, Clone)]
pub struct Model {
    graph: Graph,
    departures: HashMap<String, Departure>,
    bags: Vec<Bag>,
}

impl Model {
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Departures keyed by flight id.
    pub fn departures(&self) -> &HashMap<String, Departure> {
        &self.departures
    }

    pub fn departure(&self, flight_id: &str) -> Option<&Departure> {
        self.departures.get(flight_id)
    }

    /// Bags in input order.
    pub fn bags(&self) -> &[Bag] {
        &self.bags
    }
}

/// Parse `input` into a [`Model`].
///
/// Section markers are checked before any data line is parsed; then the
/// conveyor, departure and bag sections are handled in that order.
pub fn build_model(input: &str, config: &RouterConfig) -> Result<Model, InvalidInput> {
    let sections = split_sections(input)?;

    let mut builder = ModelBuilder::new(config);
    builder.handle_conveyor(&sections.conveyor)?;
    builder.handle_departures(&sections.departures)?;
    builder.handle_bags(&sections.bags)?;

    let model = builder.build();
    debug!(
        nodes = model.graph.len(),
        departures = model.departures.len(),
        bags = model.bags.len(),
        "built routing model"
    );
    Ok(model)
}

/// Incrementally builds a [`Model`], validating as it goes.
///
/// Conveyor lines must be added before the departures that refer to their
/// terminals, and departures before the bags that refer to their flights.
pub struct ModelBuilder<'c> {
    config: &'c RouterConfig,
    graph: Graph,
    departures: HashMap<String, Departure>,
    bags: Vec<Bag>,
}

impl<'c> ModelBuilder<'c> {
    pub fn new(config: &'c RouterConfig) -> Self {
        Self {
            config,
            graph: Graph::new(),
            departures: HashMap::new(),
            bags: Vec::new(),
        }
    }

    /// The graph built so far.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn handle_conveyor(&mut self, lines: &[SourceLine<'_>]) -> Result<(), InvalidInput> {
        lines.iter().try_for_each(|line| self.add_conveyor(line))
    }

    pub fn handle_departures(&mut self, lines: &[SourceLine<'_>]) -> Result<(), InvalidInput> {
        lines.iter().try_for_each(|line| self.add_departure(line))
    }

    pub fn handle_bags(&mut self, lines: &[SourceLine<'_>]) -> Result<(), InvalidInput> {
        lines.iter().try_for_each(|line| self.add_bag(line))
    }

    /// Add a `<nodeA> <nodeB> <travelTime>` conveyor line.
    ///
    /// Nodes are created on first mention and reused afterwards. The travel
    /// time must be a finite, non-negative number.
    pub fn add_conveyor(&mut self, line: &SourceLine<'_>) -> Result<(), InvalidInput> {
        let fields = expect_fields(line, 3, "<nodeA> <nodeB> <travelTime>")?;
        let raw = fields[2];

        let travel_time: f64 = raw.parse().map_err(|_| {
            InvalidInput::at_line(line.number, format!("travel time '{raw}' is not a number"))
        })?;
        if !travel_time.is_finite() {
            return Err(InvalidInput::at_line(
                line.number,
                format!("travel time '{raw}' must be finite"),
            ));
        }
        if travel_time < 0.0 {
            return Err(InvalidInput::at_line(
                line.number,
                format!("travel time '{raw}' must not be negative"),
            ));
        }

        self.graph.connect(fields[0], fields[1], travel_time);
        Ok(())
    }

    /// Add a `<flightId> <terminal> <destination> <HH:MM>` departure line.
    ///
    /// The terminal must already exist and be a terminal, not a checkin
    /// counter. A repeated flight id replaces the earlier departure.
    pub fn add_departure(&mut self, line: &SourceLine<'_>) -> Result<(), InvalidInput> {
        let fields = expect_fields(line, 4, "<flightId> <terminal> <destination> <HH:MM>")?;
        let (flight_id, terminal_name, destination, raw_time) =
            (fields[0], fields[1], fields[2], fields[3]);

        let terminal = self.graph.lookup(terminal_name).ok_or_else(|| {
            InvalidInput::at_line(
                line.number,
                format!("terminal '{terminal_name}' doesn't exist"),
            )
        })?;
        let kind = self.graph.kind(terminal);
        if !kind.is_terminal() {
            return Err(InvalidInput::at_line(
                line.number,
                format!("'{terminal_name}' is a {kind}, not a terminal"),
            ));
        }

        let departure_time = DepartureTime::parse_hhmm(raw_time, self.config.service_date)
            .map_err(|e| {
                InvalidInput::at_line(
                    line.number,
                    format!("bad departure time '{raw_time}' ({e})"),
                )
            })?;

        let departure = Departure::new(flight_id, terminal, destination, departure_time);
        if self
            .departures
            .insert(departure.flight_id().to_string(), departure)
            .is_some()
        {
            warn!(
                flight = flight_id,
                line = line.number,
                "duplicate flight id replaces earlier departure"
            );
        }
        Ok(())
    }

    /// Add a `<bagId> <node> <flightId>` bag line.
    ///
    /// The source node may be of any kind. An arriving bag goes to the
    /// baggage claim terminal; any other bag goes to its departure's
    /// terminal.
    pub fn add_bag(&mut self, line: &SourceLine<'_>) -> Result<(), InvalidInput> {
        let fields = expect_fields(line, 3, "<bagId> <node> <flightId>")?;
        let (bag_id, node_name) = (fields[0], fields[1]);

        let source = self.graph.lookup(node_name).ok_or_else(|| {
            InvalidInput::at_line(
                line.number,
                format!("terminal/checkin/baggage claim '{node_name}' doesn't exist"),
            )
        })?;

        let flight = FlightRef::from_token(fields[2], &self.config.arrival_marker);
        let destination = match &flight {
            FlightRef::Arrival => self.baggage_claim().ok_or_else(|| {
                InvalidInput::at_line(
                    line.number,
                    format!(
                        "bag '{bag_id}' is arriving but no baggage claim terminal '{}' exists",
                        self.config.baggage_claim
                    ),
                )
            })?,
            FlightRef::Departure(flight_id) => self
                .departures
                .get(flight_id)
                .map(Departure::terminal)
                .ok_or_else(|| {
                    InvalidInput::at_line(
                        line.number,
                        format!("departure with flight id '{flight_id}' doesn't exist"),
                    )
                })?,
        };

        self.bags
            .push(Bag::new(bag_id, source, destination, flight));
        Ok(())
    }

    /// The node registered under the reserved baggage claim name, if it is
    /// actually a baggage claim.
    fn baggage_claim(&self) -> Option<NodeId> {
        self.graph
            .lookup(&self.config.baggage_claim)
            .filter(|&id| self.graph.kind(id) == NodeKind::BaggageClaim)
    }

    pub fn build(self) -> Model {
        Model {
            graph: self.graph,
            departures: self.departures,
            bags: self.bags,
        }
    }
}

/// Split a line into fields, requiring at least `min` of them. Extra
/// trailing fields are ignored.
fn expect_fields<'a>(
    line: &SourceLine<'a>,
    min: usize,
    shape: &str,
) -> Result<Vec<&'a str>, InvalidInput> {
    let fields = line.fields();
    if fields.len() < min {
        return Err(InvalidInput::at_line(
            line.number,
            format!("expected '{shape}', found {} field(s)", fields.len()),
        ));
    }
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Edge;
    use chrono::NaiveDate;

    fn config() -> RouterConfig {
        RouterConfig::default().with_service_date(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap())
    }

    fn line(number: usize, text: &str) -> SourceLine<'_> {
        SourceLine { number, text }
    }

    fn input(conveyor: &str, departures: &str, bags: &str) -> String {
        format!(
            "# Section: Conveyor System\n{conveyor}\n# Section: Departures\n{departures}\n# Section: Bags\n{bags}\n"
        )
    }

    const CONVEYOR: &str = "\
Concourse_A_Ticketing A5 5
A5 BaggageClaim 5
A5 A10 4
A5 A1 6
A1 A2 1";

    #[test]
    fn builds_full_model() {
        let text = input(
            CONVEYOR,
            "UA10 A1 MIA 08:00\nUA11 A10 LAX 09:00",
            "0001 Concourse_A_Ticketing UA10\n0002 A5 UA11\n0003 A2 ARRIVAL",
        );
        let model = build_model(&text, &config()).unwrap();
        let graph = model.graph();

        assert_eq!(graph.len(), 6);
        assert_eq!(model.departures().len(), 2);

        let departure = model.departure("UA10").unwrap();
        assert_eq!(graph.name(departure.terminal()), "A1");
        assert_eq!(departure.destination(), "MIA");
        assert_eq!(departure.departure_time().to_string(), "08:00");
        assert_eq!(
            departure.departure_time().date(),
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
        );

        let bags = model.bags();
        let ids: Vec<_> = bags.iter().map(Bag::id).collect();
        assert_eq!(ids, vec!["0001", "0002", "0003"]);
        assert_eq!(graph.name(bags[0].source()), "Concourse_A_Ticketing");
        assert_eq!(graph.name(bags[0].destination()), "A1");
        assert_eq!(graph.name(bags[1].destination()), "A10");
        assert_eq!(graph.name(bags[2].destination()), "BaggageClaim");
        assert!(bags[2].flight().is_arrival());
    }

    #[test]
    fn conveyor_line_adds_both_directions() {
        let config = config();
        let mut builder = ModelBuilder::new(&config);
        builder.add_conveyor(&line(1, "A B 2.5")).unwrap();

        let graph = builder.graph();
        let a = graph.lookup("A").unwrap();
        let b = graph.lookup("B").unwrap();
        assert_eq!(graph.node(a).edges(), &[Edge::new(b, 2.5)]);
        assert_eq!(graph.node(b).edges(), &[Edge::new(a, 2.5)]);
    }

    #[test]
    fn conveyor_classifies_nodes() {
        let model = build_model(&input(CONVEYOR, "", ""), &config()).unwrap();
        let graph = model.graph();

        let kind = |name: &str| graph.kind(graph.lookup(name).unwrap());
        assert_eq!(kind("Concourse_A_Ticketing"), NodeKind::CheckinCounter);
        assert_eq!(kind("BaggageClaim"), NodeKind::BaggageClaim);
        assert_eq!(kind("A5"), NodeKind::PlainTerminal);
    }

    #[test]
    fn conveyor_extra_fields_ignored() {
        let config = config();
        let mut builder = ModelBuilder::new(&config);
        builder.add_conveyor(&line(1, "A B 3 fast belt")).unwrap();
        assert_eq!(builder.graph().len(), 2);
    }

    #[test]
    fn conveyor_too_few_fields() {
        let config = config();
        let mut builder = ModelBuilder::new(&config);
        let err = builder.add_conveyor(&line(2, "A1 A2")).unwrap_err();

        assert_eq!(
            err.to_string(),
            "invalid input at line 2: expected '<nodeA> <nodeB> <travelTime>', found 2 field(s)"
        );
        assert!(builder.graph().is_empty());
    }

    #[test]
    fn conveyor_non_numeric_weight_commits_nothing() {
        let config = config();
        let mut builder = ModelBuilder::new(&config);
        builder.add_conveyor(&line(1, "A0 A1 1")).unwrap();

        let err = builder.add_conveyor(&line(2, "A1 A2 xyz")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid input at line 2: travel time 'xyz' is not a number"
        );

        let graph = builder.graph();
        assert!(graph.lookup("A2").is_none());
        assert_eq!(graph.get("A1").unwrap().edges().len(), 1);
    }

    #[test]
    fn conveyor_rejects_negative_and_non_finite() {
        let config = config();
        let mut builder = ModelBuilder::new(&config);

        let err = builder.add_conveyor(&line(1, "A B -1")).unwrap_err();
        assert!(err.reason().contains("must not be negative"));

        for raw in ["inf", "NaN", "-inf"] {
            let text = format!("A B {raw}");
            assert!(builder.add_conveyor(&line(1, &text)).is_err(), "{raw}");
        }
        assert!(builder.graph().is_empty());
    }

    #[test]
    fn conveyor_accepts_decimal_and_zero() {
        let config = config();
        let mut builder = ModelBuilder::new(&config);
        builder.add_conveyor(&line(1, "A B 0")).unwrap();
        builder.add_conveyor(&line(2, "B C 2.75")).unwrap();

        let graph = builder.graph();
        assert_eq!(graph.get("C").unwrap().edges()[0].travel_time(), 2.75);
    }

    #[test]
    fn departure_too_few_fields() {
        let text = input(CONVEYOR, "UA10 A1 MIA", "");
        let err = build_model(&text, &config()).unwrap_err();
        assert!(err.reason().starts_with("expected '<flightId>"));
        assert_eq!(err.line(), Some(8));
    }

    #[test]
    fn departure_unknown_terminal() {
        let text = input(CONVEYOR, "UA10 Z9 MIA 08:00", "");
        let err = build_model(&text, &config()).unwrap_err();
        assert_eq!(err.reason(), "terminal 'Z9' doesn't exist");
    }

    #[test]
    fn departure_from_checkin_counter_rejected() {
        let text = input(CONVEYOR, "UA10 Concourse_A_Ticketing MIA 08:00", "");
        let err = build_model(&text, &config()).unwrap_err();
        assert_eq!(
            err.reason(),
            "'Concourse_A_Ticketing' is a checkin counter, not a terminal"
        );
    }

    #[test]
    fn departure_from_baggage_claim_allowed() {
        let text = input(CONVEYOR, "UA10 BaggageClaim MIA 08:00", "");
        let model = build_model(&text, &config()).unwrap();
        assert!(model.departure("UA10").is_some());
    }

    #[test]
    fn departure_bad_time() {
        let text = input(CONVEYOR, "UA10 A1 MIA 8am", "");
        let err = build_model(&text, &config()).unwrap_err();
        assert_eq!(
            err.reason(),
            "bad departure time '8am' (invalid time: expected HH:MM format)"
        );
    }

    #[test]
    fn departure_duplicate_flight_replaces() {
        let text = input(CONVEYOR, "UA10 A1 MIA 08:00\nUA10 A2 JFK 10:30", "");
        let model = build_model(&text, &config()).unwrap();

        assert_eq!(model.departures().len(), 1);
        let departure = model.departure("UA10").unwrap();
        assert_eq!(departure.flight_id(), "UA10");
        assert_eq!(model.graph().name(departure.terminal()), "A2");
        assert_eq!(departure.destination(), "JFK");
    }

    #[test]
    fn bag_too_few_fields() {
        let text = input(CONVEYOR, "", "0001 A1");
        let err = build_model(&text, &config()).unwrap_err();
        assert!(err.reason().starts_with("expected '<bagId>"));
    }

    #[test]
    fn bag_unknown_source() {
        let text = input(CONVEYOR, "UA10 A1 MIA 08:00", "0001 Nowhere UA10");
        let err = build_model(&text, &config()).unwrap_err();
        assert_eq!(
            err.reason(),
            "terminal/checkin/baggage claim 'Nowhere' doesn't exist"
        );
    }

    #[test]
    fn bag_unknown_flight() {
        let text = input(CONVEYOR, "UA10 A1 MIA 08:00", "0001 A5 UA99");
        let err = build_model(&text, &config()).unwrap_err();
        assert_eq!(err.reason(), "departure with flight id 'UA99' doesn't exist");
    }

    #[test]
    fn arrival_without_baggage_claim() {
        let text = input("checkin_1 A1 2", "", "0001 checkin_1 ARRIVAL");
        let err = build_model(&text, &config()).unwrap_err();
        assert_eq!(
            err.reason(),
            "bag '0001' is arriving but no baggage claim terminal 'BaggageClaim' exists"
        );
    }

    #[test]
    fn arrival_with_misnamed_baggage_claim() {
        // A baggage claim node exists, but not under the reserved name.
        let text = input("checkin_1 Baggage_South 2", "", "0001 checkin_1 ARRIVAL");
        assert!(build_model(&text, &config()).is_err());
    }

    #[test]
    fn reserved_name_must_be_baggage_claim() {
        let mut config = config();
        config.baggage_claim = "Carousel".to_string();
        let text = input("checkin_1 Carousel 2", "", "0001 checkin_1 ARRIVAL");

        let err = build_model(&text, &config).unwrap_err();
        assert!(err.reason().contains("'Carousel'"));
    }

    #[test]
    fn custom_arrival_marker() {
        let mut config = config();
        config.arrival_marker = "LANDED".to_string();
        let text = input("checkin_1 BaggageClaim 2", "", "0001 checkin_1 LANDED");

        let model = build_model(&text, &config).unwrap();
        assert!(model.bags()[0].flight().is_arrival());
    }

    #[test]
    fn failure_keeps_earlier_lines_in_builder() {
        let config = config();
        let mut builder = ModelBuilder::new(&config);
        let lines = [line(1, "A B 1"), line(2, "B C oops"), line(3, "C D 1")];

        let err = builder.handle_conveyor(&lines).unwrap_err();
        assert_eq!(err.line(), Some(2));

        let graph = builder.graph();
        assert!(graph.lookup("B").is_some());
        assert!(graph.lookup("C").is_none());
        assert!(graph.lookup("D").is_none());
    }
}
