//! First-Come-First-Served scheduler.
//!
//! # Algorithm
//!
//! 1. Stable-sort a private copy by arrival time, ties by process id.
//! 2. Walk the sorted list; if the clock is behind the next arrival, the
//!    processor idles until it.
//! 3. Each process runs its whole burst in one segment.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the walk.

use tracing::{debug, trace};

use super::{private_copy, Algorithm, CpuScheduler, Simulation};
use crate::config::SimulationConfig;
use crate::dispatching::{rules, RuleEngine, TieBreaker};
use crate::error::ScheduleError;
use crate::models::{Process, Segment, Trace};

/// Non-preemptive FCFS scheduler.
#[derive(Debug, Clone)]
pub struct FcfsScheduler {
    config: SimulationConfig,
    rule_engine: RuleEngine,
}

impl FcfsScheduler {
    /// Creates a scheduler with the default configuration.
    pub fn new() -> Self {
        Self {
            config: SimulationConfig::default(),
            rule_engine: RuleEngine::new()
                .with_rule(rules::Fifo)
                .with_final_tie_breaker(TieBreaker::ById),
        }
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }
}

impl Default for FcfsScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuScheduler for FcfsScheduler {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Fcfs
    }

    fn run(&self, processes: &[Process], n: usize) -> Result<Simulation, ScheduleError> {
        let mut procs = private_copy(processes, n, &self.config, None)?;
        self.rule_engine.sort(&mut procs);

        let mut timeline = Trace::new();
        let mut cur: i64 = 0;

        for p in procs.iter_mut() {
            if cur < p.arrival_time {
                trace!(from = cur, to = p.arrival_time, "processor idle");
                cur = p.arrival_time;
            }

            let start = cur;
            let end = cur + p.burst_time;
            p.start_time = Some(start);
            p.completion_time = Some(end);
            p.remaining_time = 0;
            cur = end;

            debug!(pid = p.id, start, end, "dispatched");
            timeline.push(Segment::new(p.id, start, end));
        }

        Ok(Simulation::new(Algorithm::Fcfs, procs, timeline))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(sim: &Simulation) -> Vec<u32> {
        sim.trace.iter().map(|s| s.process_id).collect()
    }

    #[test]
    fn test_fcfs_scenario() {
        let processes = vec![
            Process::new(1, 0, 5),
            Process::new(2, 1, 3),
            Process::new(3, 2, 1),
        ];
        let sim = FcfsScheduler::new().run(&processes, 3).unwrap();

        assert_eq!(
            sim.trace.segments,
            vec![
                Segment::new(1, 0, 5),
                Segment::new(2, 5, 8),
                Segment::new(3, 8, 9),
            ]
        );
        // TAT: 5, 7, 7 → 19/3; WT = RT: 0, 4, 6 → 10/3
        assert!((sim.metrics.avg_turnaround_time - 19.0 / 3.0).abs() < 1e-10);
        assert!((sim.metrics.avg_waiting_time - 10.0 / 3.0).abs() < 1e-10);
        assert!((sim.metrics.avg_response_time - 10.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_fcfs_sorts_by_arrival() {
        let processes = vec![
            Process::new(1, 6, 2),
            Process::new(2, 0, 3),
            Process::new(3, 2, 1),
        ];
        let sim = FcfsScheduler::new().run(&processes, 3).unwrap();
        assert_eq!(ids(&sim), vec![2, 3, 1]);
    }

    #[test]
    fn test_fcfs_ties_by_id() {
        let processes = vec![
            Process::new(5, 0, 2),
            Process::new(3, 0, 2),
            Process::new(4, 0, 2),
        ];
        let sim = FcfsScheduler::new().run(&processes, 3).unwrap();
        assert_eq!(ids(&sim), vec![3, 4, 5]);
    }

    #[test]
    fn test_fcfs_idle_gap() {
        let processes = vec![Process::new(1, 0, 2), Process::new(2, 10, 3)];
        let sim = FcfsScheduler::new().run(&processes, 2).unwrap();

        assert_eq!(sim.trace.segments[1], Segment::new(2, 10, 13));
        assert_eq!(sim.trace.idle_time(), 8);
        assert!((sim.metrics.avg_waiting_time - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_fcfs_late_first_arrival() {
        let processes = vec![Process::new(1, 4, 2)];
        let sim = FcfsScheduler::new().run(&processes, 1).unwrap();
        assert_eq!(sim.trace.segments, vec![Segment::new(1, 4, 6)]);
        assert!((sim.metrics.avg_turnaround_time - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_fcfs_large_arrivals_keep_order() {
        let big = 1_i64 << 53;
        let processes = vec![Process::new(1, big + 1, 1), Process::new(2, big, 1)];
        let sim = FcfsScheduler::new().run(&processes, 2).unwrap();
        assert_eq!(
            sim.trace.segments,
            vec![
                Segment::new(2, big, big + 1),
                Segment::new(1, big + 1, big + 2),
            ]
        );
    }

    #[test]
    fn test_fcfs_rejects_empty() {
        let err = FcfsScheduler::new().run(&[], 0).unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidArgument(_)));
    }
}
