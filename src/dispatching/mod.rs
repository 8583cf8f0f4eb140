//! Dispatching rules and rule engine for ready-process selection.
//!
//! Non-preemptive disciplines differ only in how they order ready
//! processes. Each ordering criterion is a `DispatchingRule`; the
//! `RuleEngine` chains a primary rule with tie-breakers into a total order.
//!
//! # Usage
//!
//! ```
//! use cpu_schedsim::dispatching::{RuleEngine, TieBreaker};
//! use cpu_schedsim::dispatching::rules;
//! use cpu_schedsim::models::Process;
//!
//! // Shortest burst first, then earliest arrival, then lowest id.
//! let engine = RuleEngine::new()
//!     .with_rule(rules::Sjf)
//!     .with_tie_breaker(rules::Fifo)
//!     .with_final_tie_breaker(TieBreaker::ById);
//!
//! let ready = vec![Process::new(2, 1, 3), Process::new(3, 2, 1)];
//! assert_eq!(engine.select_best_where(&ready, |_| true), Some(1));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

mod engine;
pub mod rules;

pub use engine::{RuleEngine, TieBreaker};

use crate::models::Process;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (dispatched first). Scores are exact
/// clock units, so distinct times never compare equal.
pub type RuleScore = i64;

/// A dispatching rule that evaluates process priority.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules should return smaller values
/// for processes that should be dispatched first.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "FIFO", "SJF").
    fn name(&self) -> &'static str;

    /// Evaluates the priority of a process.
    ///
    /// Returns a score where lower = higher priority.
    fn evaluate(&self, process: &Process) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
