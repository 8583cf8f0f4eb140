//! Built-in dispatching rules.
//!
//! # Score Convention
//! All rules return lower scores for higher priority processes.

use super::{DispatchingRule, RuleScore};
use crate::models::Process;

/// First In First Out.
///
/// Prioritizes processes that arrived earlier.
#[derive(Debug, Clone, Copy)]
pub struct Fifo;

impl DispatchingRule for Fifo {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        process.arrival_time
    }

    fn description(&self) -> &'static str {
        "First In First Out"
    }
}

/// Shortest Job First.
///
/// Prioritizes processes with a shorter total burst. Minimizes average
/// waiting time among non-preemptive disciplines when all jobs are ready.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on a single machine.
#[derive(Debug, Clone, Copy)]
pub struct Sjf;

impl DispatchingRule for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        process.burst_time
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_score() {
        let p = Process::new(1, 7, 3);
        assert_eq!(Fifo.evaluate(&p), 7);
        assert_eq!(Fifo.name(), "FIFO");
        assert_eq!(Fifo.description(), "First In First Out");
    }

    #[test]
    fn test_sjf_score() {
        let p = Process::new(1, 7, 3);
        assert_eq!(Sjf.evaluate(&p), 3);
        assert_eq!(Sjf.name(), "SJF");
    }
}
