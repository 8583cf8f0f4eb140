//! Single-processor scheduling disciplines and their shared plumbing.
//!
//! Every scheduler validates its input, works on a private copy of the
//! first `n` processes, advances a logical clock, and returns a
//! [`Simulation`] holding the completed copies, the execution trace and the
//! aggregate [`Metrics`]. The caller's slice is never modified.
//!
//! # Disciplines
//!
//! | Algorithm | Preemptive | Selection |
//! |-----------|------------|-----------|
//! | FCFS | no | arrival, then id |
//! | SJF | no | burst, then arrival, then id |
//! | RR | yes (fixed quantum) | FIFO ready queue |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

mod fcfs;
mod metrics;
mod ready_queue;
mod round_robin;
mod sjf;

pub use fcfs::FcfsScheduler;
pub use metrics::{Metrics, ProcessOutcome};
pub use ready_queue::ReadyQueue;
pub use round_robin::RoundRobinScheduler;
pub use sjf::SjfScheduler;

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};
use tracing::{debug, warn};

use crate::config::SimulationConfig;
use crate::error::ScheduleError;
use crate::models::{Pid, Process, Trace};
use crate::validation::{validate_processes, validate_quantum};

/// Scheduling discipline selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Algorithm {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Job-First, non-preemptive.
    Sjf,
    /// Round-robin with a fixed time quantum.
    RoundRobin { quantum: i64 },
}

impl Algorithm {
    /// Short name ("FCFS", "SJF", "RR").
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sjf => "SJF",
            Self::RoundRobin { .. } => "RR",
        }
    }

    /// Builds the scheduler for this algorithm.
    pub fn scheduler(&self, config: SimulationConfig) -> Box<dyn CpuScheduler> {
        match *self {
            Self::Fcfs => Box::new(FcfsScheduler::new().with_config(config)),
            Self::Sjf => Box::new(SjfScheduler::new().with_config(config)),
            Self::RoundRobin { quantum } => {
                Box::new(RoundRobinScheduler::new(quantum).with_config(config))
            }
        }
    }
}

impl fmt::Display for Algorithm {
    /// Human-readable label, e.g. `RR (q=2)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoundRobin { quantum } => write!(f, "RR (q={quantum})"),
            other => f.write_str(other.name()),
        }
    }
}

/// A scheduling discipline that can simulate a process set.
pub trait CpuScheduler: Send + Sync + Debug {
    /// The discipline this scheduler implements.
    fn algorithm(&self) -> Algorithm;

    /// Simulates the first `n` processes.
    ///
    /// # Errors
    /// `ScheduleError::InvalidArgument` if `n` is zero, exceeds the slice
    /// length or the configured capacity, or any process (or the quantum)
    /// violates its bounds.
    fn run(&self, processes: &[Process], n: usize) -> Result<Simulation, ScheduleError>;
}

/// Result of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Simulation {
    /// Discipline that produced this run.
    pub algorithm: Algorithm,
    /// Completed private copies of the simulated processes.
    pub processes: Vec<Process>,
    /// Processor occupancy in dispatch order.
    pub trace: Trace,
    /// Aggregate timing metrics.
    pub metrics: Metrics,
}

impl Simulation {
    pub(crate) fn new(algorithm: Algorithm, processes: Vec<Process>, trace: Trace) -> Self {
        let metrics = Metrics::calculate(&processes);
        debug!(
            algorithm = %algorithm,
            processes = processes.len(),
            segments = trace.len(),
            utilization = trace.utilization().unwrap_or(0.0),
            avg_turnaround = metrics.avg_turnaround_time,
            avg_waiting = metrics.avg_waiting_time,
            avg_response = metrics.avg_response_time,
            "simulation finished"
        );
        Self {
            algorithm,
            processes,
            trace,
            metrics,
        }
    }

    /// Gantt chart text: a `<label> Gantt:` header and the rendered trace.
    pub fn gantt(&self) -> String {
        format!("{} Gantt:\n{}", self.algorithm, self.trace)
    }

    /// Completed copy of a process.
    pub fn process(&self, id: Pid) -> Option<&Process> {
        self.processes.iter().find(|p| p.id == id)
    }
}

/// Validates the input and returns a reset private copy of the first `n`
/// processes.
pub(crate) fn private_copy(
    processes: &[Process],
    n: usize,
    config: &SimulationConfig,
    quantum: Option<i64>,
) -> Result<Vec<Process>, ScheduleError> {
    let mut errors = validate_processes(processes, n, config.capacity)
        .err()
        .unwrap_or_default();
    if let Some(q) = quantum {
        errors.extend(validate_quantum(q).err().unwrap_or_default());
    }

    if !errors.is_empty() {
        warn!(n, violations = errors.len(), "rejected simulation input");
        return Err(ScheduleError::from(errors));
    }

    Ok(processes[..n]
        .iter()
        .cloned()
        .map(|mut p| {
            p.reset();
            p
        })
        .collect())
}

/// Runs FCFS over the first `n` processes.
///
/// # Example
/// ```
/// use cpu_schedsim::models::Process;
/// use cpu_schedsim::scheduler::fcfs_metrics;
///
/// let processes = vec![
///     Process::new(1, 0, 5),
///     Process::new(2, 1, 3),
///     Process::new(3, 2, 1),
/// ];
/// let sim = fcfs_metrics(&processes, 3).unwrap();
/// assert_eq!(sim.trace.to_string(), "| P1 0-5 | P2 5-8 | P3 8-9 |");
/// ```
pub fn fcfs_metrics(processes: &[Process], n: usize) -> Result<Simulation, ScheduleError> {
    FcfsScheduler::new().run(processes, n)
}

/// Runs non-preemptive SJF over the first `n` processes.
///
/// # Example
/// ```
/// use cpu_schedsim::models::Process;
/// use cpu_schedsim::scheduler::sjf_metrics;
///
/// let processes = vec![
///     Process::new(1, 0, 5),
///     Process::new(2, 1, 3),
///     Process::new(3, 2, 1),
/// ];
/// let sim = sjf_metrics(&processes, 3).unwrap();
/// assert_eq!(sim.trace.to_string(), "| P1 0-5 | P3 5-6 | P2 6-9 |");
/// ```
pub fn sjf_metrics(processes: &[Process], n: usize) -> Result<Simulation, ScheduleError> {
    SjfScheduler::new().run(processes, n)
}

/// Runs round-robin with the given quantum over the first `n` processes.
///
/// # Example
/// ```
/// use cpu_schedsim::models::Process;
/// use cpu_schedsim::scheduler::rr_metrics;
///
/// let processes = vec![
///     Process::new(1, 0, 5),
///     Process::new(2, 1, 3),
///     Process::new(3, 2, 1),
/// ];
/// let sim = rr_metrics(&processes, 3, 2).unwrap();
/// assert!((sim.metrics.avg_response_time - 1.0).abs() < 1e-10);
/// ```
pub fn rr_metrics(
    processes: &[Process],
    n: usize,
    quantum: i64,
) -> Result<Simulation, ScheduleError> {
    RoundRobinScheduler::new(quantum).run(processes, n)
}

/// Runs any algorithm with an explicit configuration.
pub fn simulate(
    algorithm: Algorithm,
    processes: &[Process],
    n: usize,
    config: &SimulationConfig,
) -> Result<Simulation, ScheduleError> {
    algorithm.scheduler(config.clone()).run(processes, n)
}
