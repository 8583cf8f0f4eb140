//! Input validation for simulation runs.
//!
//! Checks the process set, process count and quantum before any clock
//! moves. Detects:
//! - Empty or out-of-range process counts
//! - Counts above the configured capacity
//! - Duplicate IDs
//! - Non-positive burst times
//! - Negative arrival times
//! - Non-positive round-robin quanta
//! - Process sets whose clock would overflow `i64`
//!
//! All violations are collected; validation does not stop at the first one.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use crate::models::Process;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// `n` is zero.
    EmptyProcessSet,
    /// `n` exceeds the number of supplied processes.
    CountOutOfRange,
    /// `n` exceeds the capacity bound.
    CapacityExceeded,
    /// Two processes share the same ID.
    DuplicateId,
    /// A process has `burst_time <= 0`.
    NonPositiveBurst,
    /// A process has `arrival_time < 0`.
    NegativeArrival,
    /// Round-robin quantum is `<= 0`.
    NonPositiveQuantum,
    /// The latest arrival plus the total burst does not fit in `i64`.
    TimeOverflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the first `n` processes of a process set.
///
/// Checks:
/// 1. `n > 0`
/// 2. `n <= processes.len()`
/// 3. `n <= capacity`
/// 4. No duplicate process IDs
/// 5. Every burst time is positive
/// 6. Every arrival time is non-negative
/// 7. `max(arrival) + sum(burst)` fits in `i64`; no clock value of any
///    discipline exceeds it
///
/// Per-process checks only look at the first `min(n, processes.len())`
/// entries.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process], n: usize, capacity: usize) -> ValidationResult {
    let mut errors = Vec::new();

    if n == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyProcessSet,
            "Process count must be positive",
        ));
    }

    if n > processes.len() {
        errors.push(ValidationError::new(
            ValidationErrorKind::CountOutOfRange,
            format!(
                "Process count {n} exceeds the {} supplied processes",
                processes.len()
            ),
        ));
    }

    if n > capacity {
        errors.push(ValidationError::new(
            ValidationErrorKind::CapacityExceeded,
            format!("Process count {n} exceeds capacity {capacity}"),
        ));
    }

    let mut ids = HashSet::new();
    for p in processes.iter().take(n) {
        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process {} has non-positive burst time {}", p.id, p.burst_time),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Process {} has negative arrival time {}",
                    p.id, p.arrival_time
                ),
            ));
        }
    }

    if schedule_horizon(processes, n).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Latest arrival plus total burst time overflows the clock",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Latest arrival plus the sum of positive bursts over the first `n`
/// processes, or `None` on overflow.
fn schedule_horizon(processes: &[Process], n: usize) -> Option<i64> {
    let prefix = &processes[..n.min(processes.len())];
    let latest = prefix.iter().map(|p| p.arrival_time).max().unwrap_or(0).max(0);
    prefix
        .iter()
        .filter(|p| p.burst_time > 0)
        .try_fold(latest, |acc, p| acc.checked_add(p.burst_time))
}

/// Validates a round-robin time quantum.
pub fn validate_quantum(quantum: i64) -> ValidationResult {
    if quantum <= 0 {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::NonPositiveQuantum,
            format!("Quantum must be positive, got {quantum}"),
        )]);
    }
    Ok(())
}
