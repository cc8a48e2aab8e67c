//! Data transfer objects for web responses.

use serde::Serialize;

use crate::router::BagRoute;

/// Routes for every bag in the request, in input order.
#[derive(Debug, Serialize)]
pub struct RoutesResponse {
    pub routes: Vec<RouteResult>,
}

/// The route found for one bag.
#[derive(Debug, Serialize)]
pub struct RouteResult {
    /// Bag identifier from the input
    pub bag_id: String,

    /// Node names from source to destination
    pub path: Vec<String>,

    /// Total travel time, or null if the destination is unreachable
    pub travel_time: Option<f64>,

    /// Whether the destination can be reached
    pub reachable: bool,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

impl From<BagRoute> for RouteResult {
    fn from(route: BagRoute) -> Self {
        let reachable = route.is_reachable();
        Self {
            bag_id: route.bag_id,
            path: route.path,
            travel_time: reachable.then_some(route.travel_time),
            reachable,
        }
    }
}

impl From<Vec<BagRoute>> for RoutesResponse {
    fn from(routes: Vec<BagRoute>) -> Self {
        Self {
            routes: routes.into_iter().map(RouteResult::from).collect(),
        }
    }
}
