//! Per-process outcomes and aggregate performance metrics.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - burst |
//! | Response | first dispatch - arrival |
//!
//! For non-preemptive disciplines waiting and response coincide
//! (`start - arrival`).
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

use crate::models::{Pid, Process};

/// Timing outcome of a single finished process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessOutcome {
    /// Process identifier.
    pub id: Pid,
    /// completion - arrival.
    pub turnaround_time: i64,
    /// turnaround - burst.
    pub waiting_time: i64,
    /// first dispatch - arrival.
    pub response_time: i64,
}

impl ProcessOutcome {
    /// Derives the outcome of a finished process.
    ///
    /// Returns `None` if the process never started or never finished.
    pub fn from_process(process: &Process) -> Option<Self> {
        Some(Self {
            id: process.id,
            turnaround_time: process.turnaround_time()?,
            waiting_time: process.waiting_time()?,
            response_time: process.response_time()?,
        })
    }
}

/// Averages over exactly `n` processes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean response time.
    pub avg_response_time: f64,
    /// Per-process outcomes, in the order of the completed copies (sorted
    /// by arrival for FCFS, input order otherwise).
    pub outcomes: Vec<ProcessOutcome>,
}

impl Metrics {
    /// Computes metrics from finished processes.
    ///
    /// Processes without start or completion time are skipped. An empty
    /// input yields all-zero averages.
    pub fn calculate<'a, I>(processes: I) -> Self
    where
        I: IntoIterator<Item = &'a Process>,
    {
        let outcomes: Vec<ProcessOutcome> = processes
            .into_iter()
            .filter_map(ProcessOutcome::from_process)
            .collect();
        Self::from_outcomes(outcomes)
    }

    /// Averages a list of outcomes.
    pub fn from_outcomes(outcomes: Vec<ProcessOutcome>) -> Self {
        if outcomes.is_empty() {
            return Self::default();
        }

        let n = outcomes.len() as f64;
        // Each time fits in i64; their sum may not.
        let mut sum_tat: i128 = 0;
        let mut sum_wt: i128 = 0;
        let mut sum_rt: i128 = 0;
        for o in &outcomes {
            sum_tat += i128::from(o.turnaround_time);
            sum_wt += i128::from(o.waiting_time);
            sum_rt += i128::from(o.response_time);
        }

        Self {
            avg_turnaround_time: sum_tat as f64 / n,
            avg_waiting_time: sum_wt as f64 / n,
            avg_response_time: sum_rt as f64 / n,
            outcomes,
        }
    }

    /// Number of processes averaged.
    pub fn process_count(&self) -> usize {
        self.outcomes.len()
    }

    /// Outcome for a given process.
    pub fn outcome_for(&self, id: Pid) -> Option<&ProcessOutcome> {
        self.outcomes.iter().find(|o| o.id == id)
    }
}
