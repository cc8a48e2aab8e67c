//! Routing every bag through the conveyor network.
//!
//! This is the crate's main entry point: [`compute_all_paths`] takes the raw
//! input text and returns the report, one line per bag in input order.

use std::fmt;

use tracing::{debug, warn};

use crate::config::RouterConfig;
use crate::domain::InvalidInput;
use crate::parse::{Model, build_model};
use crate::pathfinder::ShortestPathfinder;

/// The quickest route found for one bag.
#[derive(Debug, Clone, PartialEq)]
pub struct BagRoute {
    pub bag_id: String,

    /// Node names from the bag's source to its destination, inclusive.
    /// Holds only the destination when it cannot be reached.
    pub path: Vec<String>,

    /// Total travel time; infinite when the destination is unreachable.
    pub travel_time: f64,
}

impl BagRoute {
    pub fn is_reachable(&self) -> bool {
        self.travel_time.is_finite()
    }
}

/// Formats as a report line: `<bagId> <node1> ... <nodeN> : <travelTime>`.
///
/// Travel times always show a fractional part (`9.0`); infinity shows as
/// `inf`.
impl fmt::Display for BagRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.bag_id)?;
        for node in &self.path {
            write!(f, " {node}")?;
        }
        write!(f, " : {:?}", self.travel_time)
    }
}

/// Find the quickest route for every bag in `model`, in input order.
pub fn route_bags(model: &Model) -> Vec<BagRoute> {
    let graph = model.graph();
    let mut finder = ShortestPathfinder::new(graph);

    model
        .bags()
        .iter()
        .map(|bag| {
            let path = finder.shortest_path(bag.source(), bag.destination());
            if !path.is_reachable() {
                warn!(
                    bag = bag.id(),
                    from = graph.name(bag.source()),
                    to = graph.name(bag.destination()),
                    "destination unreachable"
                );
            }
            BagRoute {
                bag_id: bag.id().to_string(),
                path: path.names(graph).into_iter().map(str::to_string).collect(),
                travel_time: path.travel_time(),
            }
        })
        .collect()
}

/// Render routes as report text, one newline-terminated line per route.
pub fn format_report(routes: &[BagRoute]) -> String {
    routes.iter().map(|route| format!("{route}\n")).collect()
}

/// Parse `input` and route every bag, using `config`.
pub fn plan_routes(input: &str, config: &RouterConfig) -> Result<Vec<BagRoute>, InvalidInput> {
    let model = build_model(input, config)?;
    let routes = route_bags(&model);
    debug!(routes = routes.len(), "routed bags");
    Ok(routes)
}

/// Compute the report for `input` with the default configuration.
///
/// Fails as a whole on the first invalid line; no partial report is
/// returned.
///
/// # Examples
///
/// ```
/// use baggage_router::compute_all_paths;
///
/// let input = concat!(
///     "# Section: Conveyor System\n",
///     "A1 A2 4\nA2 A5 3\nA5 A6 2\n",
///     "# Section: Departures\n",
///     "UA10 A6 LAX 08:00\n",
///     "# Section: Bags\n",
///     "001 A1 UA10\n",
/// );
/// assert_eq!(compute_all_paths(input).unwrap(), "001 A1 A2 A5 A6 : 9.0\n");
/// ```
pub fn compute_all_paths(input: &str) -> Result<String, InvalidInput> {
    compute_all_paths_with(input, &RouterConfig::default())
}

/// Compute the report for `input` using `config`.
pub fn compute_all_paths_with(input: &str, config: &RouterConfig) -> Result<String, InvalidInput> {
    plan_routes(input, config).map(|routes| format_report(&routes))
}
