//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};

use crate::domain::InvalidInput;
use crate::router::{format_report, plan_routes};

use super::dto::{ErrorResponse, RoutesResponse};
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/routes", post(route_text))
        .route("/routes/json", post(route_json))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Route every bag in the body and answer with the text report.
async fn route_text(State(state): State<AppState>, body: String) -> Result<String, AppError> {
    let routes = plan_routes(&body, &state.request_config())?;
    info!(bags = routes.len(), "routed request");
    Ok(format_report(&routes))
}

/// Route every bag in the body and answer with JSON.
async fn route_json(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<RoutesResponse>, AppError> {
    let routes = plan_routes(&body, &state.request_config())?;
    info!(bags = routes.len(), "routed request");
    Ok(Json(routes.into()))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
}

impl From<InvalidInput> for AppError {
    fn from(e: InvalidInput) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
        };

        warn!(%status, error = %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
