//! Shortest-Job-First scheduler (non-preemptive).
//!
//! # Algorithm
//!
//! At every decision point, among unfinished processes that have arrived,
//! dispatch the one with the smallest burst; ties go to the earlier
//! arrival, then the smaller id. With nothing ready the clock advances
//! according to the configured [`IdleAdvance`](crate::config::IdleAdvance)
//! policy. A dispatched process runs its whole burst.
//!
//! # Complexity
//! O(n²) selections plus idle steps.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.2

use tracing::{debug, trace};

use super::{private_copy, Algorithm, CpuScheduler, Simulation};
use crate::config::SimulationConfig;
use crate::dispatching::{rules, RuleEngine, TieBreaker};
use crate::error::ScheduleError;
use crate::models::{Process, Segment, Trace};

/// Non-preemptive SJF scheduler.
#[derive(Debug, Clone)]
pub struct SjfScheduler {
    config: SimulationConfig,
    rule_engine: RuleEngine,
}

impl SjfScheduler {
    /// Creates a scheduler with the default configuration.
    pub fn new() -> Self {
        Self {
            config: SimulationConfig::default(),
            rule_engine: RuleEngine::new()
                .with_rule(rules::Sjf)
                .with_tie_breaker(rules::Fifo)
                .with_final_tie_breaker(TieBreaker::ById),
        }
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }
}

impl Default for SjfScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuScheduler for SjfScheduler {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Sjf
    }

    fn run(&self, processes: &[Process], n: usize) -> Result<Simulation, ScheduleError> {
        let mut procs = private_copy(processes, n, &self.config, None)?;
        let total = procs.len();

        let mut timeline = Trace::new();
        let mut cur: i64 = 0;
        let mut finished = 0;

        while finished < total {
            let selected = self
                .rule_engine
                .select_best_where(&procs, |p| !p.is_finished() && p.arrival_time <= cur);

            let Some(idx) = selected else {
                let next_arrival = procs
                    .iter()
                    .filter(|p| !p.is_finished())
                    .map(|p| p.arrival_time)
                    .min();
                let next = self.config.idle_advance.next_time(cur, next_arrival);
                trace!(from = cur, to = next, "processor idle");
                cur = next;
                continue;
            };

            let p = &mut procs[idx];
            let start = cur;
            let end = cur + p.burst_time;
            p.start_time = Some(start);
            p.completion_time = Some(end);
            p.remaining_time = 0;
            cur = end;
            finished += 1;

            debug!(pid = p.id, start, end, "dispatched");
            timeline.push(Segment::new(p.id, start, end));
        }

        Ok(Simulation::new(Algorithm::Sjf, procs, timeline))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IdleAdvance;

    fn ids(sim: &Simulation) -> Vec<u32> {
        sim.trace.iter().map(|s| s.process_id).collect()
    }

    #[test]
    fn test_sjf_scenario() {
        let processes = vec![
            Process::new(1, 0, 5),
            Process::new(2, 1, 3),
            Process::new(3, 2, 1),
        ];
        let sim = SjfScheduler::new().run(&processes, 3).unwrap();

        assert_eq!(
            sim.trace.segments,
            vec![
                Segment::new(1, 0, 5),
                Segment::new(3, 5, 6),
                Segment::new(2, 6, 9),
            ]
        );
        // TAT: 5, 8, 4 → 17/3; WT = RT: 0, 5, 3 → 8/3
        assert!((sim.metrics.avg_turnaround_time - 17.0 / 3.0).abs() < 1e-10);
        assert!((sim.metrics.avg_waiting_time - 8.0 / 3.0).abs() < 1e-10);
        assert!((sim.metrics.avg_response_time - 8.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_sjf_non_preemptive() {
        // P2 is shorter but arrives while P1 runs; P1 keeps the processor
        let processes = vec![Process::new(1, 0, 10), Process::new(2, 1, 1)];
        let sim = SjfScheduler::new().run(&processes, 2).unwrap();
        assert_eq!(ids(&sim), vec![1, 2]);
        assert_eq!(sim.process(2).unwrap().start_time, Some(10));
    }

    #[test]
    fn test_sjf_tie_by_arrival_then_id() {
        let processes = vec![
            Process::new(1, 0, 4),
            Process::new(4, 2, 2),
            Process::new(3, 1, 2),
            Process::new(2, 2, 2),
        ];
        let sim = SjfScheduler::new().run(&processes, 4).unwrap();
        // At t=4: P3 (arrived 1) beats P2/P4 (arrived 2); then P2 beats P4 by id
        assert_eq!(ids(&sim), vec![1, 3, 2, 4]);
    }

    #[test]
    fn test_sjf_large_bursts_keep_order() {
        let big = 1_i64 << 53;
        let processes = vec![Process::new(1, 0, big + 1), Process::new(2, 0, big)];
        let sim = SjfScheduler::new().run(&processes, 2).unwrap();
        assert_eq!(ids(&sim), vec![2, 1]);
        assert_eq!(sim.process(1).unwrap().completion_time, Some(2 * big + 1));
    }

    #[test]
    fn test_sjf_idle_until_arrival() {
        let processes = vec![Process::new(1, 5, 2), Process::new(2, 5, 1)];
        let sim = SjfScheduler::new().run(&processes, 2).unwrap();
        assert_eq!(
            sim.trace.segments,
            vec![Segment::new(2, 5, 6), Segment::new(1, 6, 8)]
        );
    }

    #[test]
    fn test_sjf_next_arrival_policy() {
        let processes = vec![Process::new(1, 0, 1), Process::new(2, 1_000_000, 1)];
        let config = SimulationConfig::new().with_idle_advance(IdleAdvance::NextArrival);
        let sim = SjfScheduler::new()
            .with_config(config)
            .run(&processes, 2)
            .unwrap();
        assert_eq!(sim.trace.segments[1], Segment::new(2, 1_000_000, 1_000_001));
    }
}
