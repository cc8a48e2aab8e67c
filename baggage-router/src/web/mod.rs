//! HTTP layer for the baggage router.
//!
//! Accepts routing input as a request body and answers with the report,
//! either as plain text or as JSON.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
