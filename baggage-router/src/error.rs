//! Top-level error type for the boundary functions.

use crate::domain::InvalidInput;

/// Errors from reading input and computing routes.
#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    /// Reading the input failed
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// The input was read but is not valid routing input
    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),
}
