//! Error types for simulation entry points.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::validation::ValidationError;

/// Errors returned before or during a simulation run.
///
/// Every variant is a precondition failure; a valid input always runs to
/// completion, so nothing here is retryable.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "error_type", content = "details")]
pub enum ScheduleError {
    /// The process set, process count or quantum violates a precondition.
    #[error("Invalid argument: {}", join_messages(.0))]
    InvalidArgument(Vec<ValidationError>),

    /// The ready queue is full.
    #[error("Ready queue capacity exceeded: {capacity}")]
    CapacityExceeded { capacity: usize },
}

impl ScheduleError {
    /// Validation errors carried by an `InvalidArgument`, empty otherwise.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::InvalidArgument(errors) => errors,
            Self::CapacityExceeded { .. } => &[],
        }
    }
}

impl From<Vec<ValidationError>> for ScheduleError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::InvalidArgument(errors)
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
