//! Process model.
//!
//! A process is the unit of work competing for the single simulated
//! processor. Callers supply the static part (id, arrival, burst); the
//! schedulers fill in the dynamic part on their own private copies.
//!
//! # Time Representation
//! All times are integer ticks relative to the simulation epoch (t=0).

use serde::{Deserialize, Serialize};

/// Process identifier. Unique within a process set.
pub type Pid = u32;

/// A process to be scheduled.
///
/// `start_time` and `completion_time` stay `None` until a scheduler has
/// dispatched and finished the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: Pid,
    /// Time the process becomes ready (ticks, >= 0).
    pub arrival_time: i64,
    /// Total CPU time required (ticks, > 0).
    pub burst_time: i64,
    /// CPU time still owed. Only advanced by preemptive schedulers.
    pub remaining_time: i64,
    /// Time of first dispatch.
    pub start_time: Option<i64>,
    /// Time the last unit of work finished.
    pub completion_time: Option<i64>,
}

impl Process {
    /// Creates a process that has not run yet.
    pub fn new(id: Pid, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            remaining_time: burst_time,
            start_time: None,
            completion_time: None,
        }
    }

    /// Whether the process has ever been dispatched.
    #[inline]
    pub fn has_started(&self) -> bool {
        self.start_time.is_some()
    }

    /// Whether the process has run to completion.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.completion_time.is_some()
    }

    /// Turnaround time: completion - arrival.
    pub fn turnaround_time(&self) -> Option<i64> {
        self.completion_time.map(|c| c - self.arrival_time)
    }

    /// Waiting time: turnaround - burst.
    pub fn waiting_time(&self) -> Option<i64> {
        self.turnaround_time().map(|tat| tat - self.burst_time)
    }

    /// Response time: first dispatch - arrival.
    pub fn response_time(&self) -> Option<i64> {
        self.start_time.map(|s| s - self.arrival_time)
    }

    /// Clears all simulation state, keeping id, arrival and burst.
    pub fn reset(&mut self) {
        self.remaining_time = self.burst_time;
        self.start_time = None;
        self.completion_time = None;
    }
}
