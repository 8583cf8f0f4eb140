//! Single-processor CPU scheduling simulator.
//!
//! Simulates First-Come-First-Served, non-preemptive Shortest-Job-First and
//! fixed-quantum Round-Robin over a caller-supplied process set, producing
//! per-process timings, aggregate metrics and an execution trace.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `Segment`, `Trace`
//! - **`scheduler`**: `FcfsScheduler`, `SjfScheduler`, `RoundRobinScheduler`,
//!   `Metrics`, and the `fcfs_metrics` / `sjf_metrics` / `rr_metrics` entry points
//! - **`dispatching`**: Ordering rules (FIFO, SJF) and the rule engine
//! - **`validation`**: Input checks (count, capacity, duplicate IDs, bounds)
//! - **`config`**: `SimulationConfig` (capacity bound, idle clock policy)
//! - **`generator`**: Random valid workloads
//!
//! # Example
//!
//! ```
//! use cpu_schedsim::models::Process;
//! use cpu_schedsim::scheduler::rr_metrics;
//!
//! let processes = vec![
//!     Process::new(1, 0, 5),
//!     Process::new(2, 1, 3),
//!     Process::new(3, 2, 1),
//! ];
//! let sim = rr_metrics(&processes, processes.len(), 2)?;
//! assert_eq!(
//!     sim.trace.to_string(),
//!     "| P1 0-2 | P2 2-4 | P3 4-5 | P1 5-7 | P2 7-8 | P1 8-9 |"
//! );
//! # Ok::<(), cpu_schedsim::ScheduleError>(())
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod config;
pub mod dispatching;
mod error;
pub mod generator;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::ScheduleError;
