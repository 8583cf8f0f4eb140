//! Round-robin scheduler with a fixed time quantum.
//!
//! # Algorithm
//!
//! Processes arriving at t=0 are admitted first. Then, each iteration:
//!
//! 1. Empty ready queue: advance the clock per the idle policy, admit new
//!    arrivals, retry.
//! 2. Pop the head. On its first dispatch record `start_time`.
//! 3. Run for `min(remaining, quantum)` and emit one segment.
//! 4. Admit every process that arrived by the new clock value.
//! 5. Finished: record `completion_time`. Otherwise re-queue at the tail,
//!    behind the arrivals admitted in step 4.
//!
//! Admission scans processes in input order.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.3

use tracing::{debug, trace};

use super::{private_copy, Algorithm, CpuScheduler, ReadyQueue, Simulation};
use crate::config::SimulationConfig;
use crate::error::ScheduleError;
use crate::models::{Process, Segment, Trace};

/// Preemptive round-robin scheduler.
#[derive(Debug, Clone)]
pub struct RoundRobinScheduler {
    quantum: i64,
    config: SimulationConfig,
}

impl RoundRobinScheduler {
    /// Creates a scheduler with the given quantum.
    ///
    /// The quantum is validated when the scheduler runs.
    pub fn new(quantum: i64) -> Self {
        Self {
            quantum,
            config: SimulationConfig::default(),
        }
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    /// The time quantum.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }
}

impl CpuScheduler for RoundRobinScheduler {
    fn algorithm(&self) -> Algorithm {
        Algorithm::RoundRobin {
            quantum: self.quantum,
        }
    }

    fn run(&self, processes: &[Process], n: usize) -> Result<Simulation, ScheduleError> {
        let mut procs = private_copy(processes, n, &self.config, Some(self.quantum))?;
        let total = procs.len();

        let mut queue = ReadyQueue::with_capacity(self.config.capacity);
        let mut seen = vec![false; total];
        let mut timeline = Trace::new();
        let mut cur: i64 = 0;
        let mut finished = 0;

        admit_arrivals(&procs, &mut seen, &mut queue, cur)?;

        while finished < total {
            let Some(idx) = queue.dequeue() else {
                let next_arrival = procs
                    .iter()
                    .zip(&seen)
                    .filter(|(_, admitted)| !**admitted)
                    .map(|(p, _)| p.arrival_time)
                    .min();
                let next = self.config.idle_advance.next_time(cur, next_arrival);
                trace!(from = cur, to = next, "processor idle");
                cur = next;
                admit_arrivals(&procs, &mut seen, &mut queue, cur)?;
                continue;
            };

            let p = &mut procs[idx];
            if !p.has_started() {
                p.start_time = Some(cur);
            }

            let slice_start = cur;
            let run = p.remaining_time.min(self.quantum);
            p.remaining_time -= run;
            cur += run;

            debug!(
                pid = p.id,
                start = slice_start,
                end = cur,
                remaining = p.remaining_time,
                queued = queue.len(),
                "dispatched"
            );
            timeline.push(Segment::new(p.id, slice_start, cur));
            let remaining = p.remaining_time;

            // New arrivals go ahead of the preempted process.
            admit_arrivals(&procs, &mut seen, &mut queue, cur)?;

            if remaining == 0 {
                procs[idx].completion_time = Some(cur);
                finished += 1;
            } else {
                queue.enqueue(idx)?;
            }
        }

        Ok(Simulation::new(self.algorithm(), procs, timeline))
    }
}

/// Enqueues, in input order, every process not yet admitted whose arrival
/// is at or before `now`.
fn admit_arrivals(
    procs: &[Process],
    seen: &mut [bool],
    queue: &mut ReadyQueue,
    now: i64,
) -> Result<(), ScheduleError> {
    for (idx, p) in procs.iter().enumerate() {
        if !seen[idx] && p.arrival_time <= now {
            queue.enqueue(idx)?;
            seen[idx] = true;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments(sim: &Simulation) -> Vec<(u32, i64, i64)> {
        sim.trace
            .iter()
            .map(|s| (s.process_id, s.start, s.end))
            .collect()
    }

    #[test]
    fn test_rr_scenario() {
        let processes = vec![
            Process::new(1, 0, 5),
            Process::new(2, 1, 3),
            Process::new(3, 2, 1),
        ];
        let sim = RoundRobinScheduler::new(2).run(&processes, 3).unwrap();

        assert_eq!(
            segments(&sim),
            vec![
                (1, 0, 2),
                (2, 2, 4),
                (3, 4, 5),
                (1, 5, 7),
                (2, 7, 8),
                (1, 8, 9),
            ]
        );
        // TAT: 9, 7, 3 → 19/3; WT: 4, 4, 2 → 10/3; RT: 0, 1, 2 → 1
        assert!((sim.metrics.avg_turnaround_time - 19.0 / 3.0).abs() < 1e-10);
        assert!((sim.metrics.avg_waiting_time - 10.0 / 3.0).abs() < 1e-10);
        assert!((sim.metrics.avg_response_time - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_rr_arrival_before_requeue() {
        // P2 arrives exactly when P1's slice ends: it must run before P1 again
        let processes = vec![Process::new(1, 0, 4), Process::new(2, 2, 2)];
        let sim = RoundRobinScheduler::new(2).run(&processes, 2).unwrap();
        assert_eq!(segments(&sim), vec![(1, 0, 2), (2, 2, 4), (1, 4, 6)]);
    }

    #[test]
    fn test_rr_admission_in_input_order() {
        let processes = vec![
            Process::new(9, 0, 1),
            Process::new(2, 0, 1),
            Process::new(5, 0, 1),
        ];
        let sim = RoundRobinScheduler::new(3).run(&processes, 3).unwrap();
        assert_eq!(segments(&sim), vec![(9, 0, 1), (2, 1, 2), (5, 2, 3)]);
    }

    #[test]
    fn test_rr_idle_gap() {
        let processes = vec![Process::new(1, 0, 1), Process::new(2, 4, 3)];
        let sim = RoundRobinScheduler::new(2).run(&processes, 2).unwrap();
        assert_eq!(segments(&sim), vec![(1, 0, 1), (2, 4, 6), (2, 6, 7)]);
        assert_eq!(sim.process(2).unwrap().start_time, Some(4));
        assert_eq!(sim.trace.idle_time(), 3);
    }

    #[test]
    fn test_rr_large_quantum_is_fcfs_like() {
        let processes = vec![
            Process::new(1, 0, 5),
            Process::new(2, 1, 3),
            Process::new(3, 2, 1),
        ];
        let sim = RoundRobinScheduler::new(100).run(&processes, 3).unwrap();
        assert_eq!(segments(&sim), vec![(1, 0, 5), (2, 5, 8), (3, 8, 9)]);
    }

    #[test]
    fn test_rr_quantum_one() {
        let processes = vec![Process::new(1, 0, 2), Process::new(2, 0, 2)];
        let sim = RoundRobinScheduler::new(1).run(&processes, 2).unwrap();
        assert_eq!(
            segments(&sim),
            vec![(1, 0, 1), (2, 1, 2), (1, 2, 3), (2, 3, 4)]
        );
    }

    #[test]
    fn test_rr_rejects_bad_quantum() {
        let processes = vec![Process::new(1, 0, 2)];
        assert!(RoundRobinScheduler::new(0).run(&processes, 1).is_err());
        assert!(RoundRobinScheduler::new(-1).run(&processes, 1).is_err());
    }

    #[test]
    fn test_rr_algorithm_carries_quantum() {
        let scheduler = RoundRobinScheduler::new(3);
        assert_eq!(scheduler.quantum(), 3);
        assert_eq!(scheduler.algorithm(), Algorithm::RoundRobin { quantum: 3 });
    }
}
