//! Input validation errors.
//!
//! Every problem with the routing input, structural or line-level, is
//! reported as a single [`InvalidInput`] kind carrying a readable reason.

/// The routing input could not be turned into a valid model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInput {
    /// A problem with the input as a whole, such as a missing section.
    #[error("invalid input: {reason}")]
    Input { reason: String },

    /// A problem with one input line (1-based).
    #[error("invalid input at line {line}: {reason}")]
    Line { line: usize, reason: String },
}

impl InvalidInput {
    /// An error about the input as a whole.
    pub fn new(reason: impl Into<String>) -> Self {
        InvalidInput::Input {
            reason: reason.into(),
        }
    }

    /// An error about one input line.
    pub fn at_line(line: usize, reason: impl Into<String>) -> Self {
        InvalidInput::Line {
            line,
            reason: reason.into(),
        }
    }

    pub fn line(&self) -> Option<usize> {
        match self {
            InvalidInput::Input { .. } => None,
            InvalidInput::Line { line, .. } => Some(*line),
        }
    }

    pub fn reason(&self) -> &str {
        match self {
            InvalidInput::Input { reason } | InvalidInput::Line { reason, .. } => reason,
        }
    }
}
