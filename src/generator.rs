//! Random workload generation.
//!
//! Produces valid process sets for experiments and property tests. The
//! caller owns the random source, so a seeded RNG gives reproducible sets.
//!
//! # Example
//! ```
//! use cpu_schedsim::generator::WorkloadGenerator;
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//!
//! let mut rng = SmallRng::seed_from_u64(7);
//! let processes = WorkloadGenerator::new(10).with_max_burst(4).generate(&mut rng);
//! assert_eq!(processes.len(), 10);
//! assert!(processes.iter().all(|p| (1..=4).contains(&p.burst_time)));
//! ```

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::{Pid, Process};

/// Parameters of a synthetic process set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadGenerator {
    /// Number of processes.
    pub count: usize,
    /// Arrivals are drawn from `0..=max_arrival`.
    pub max_arrival: i64,
    /// Bursts are drawn from `1..=max_burst`.
    pub max_burst: i64,
    /// Shuffle the output so ids are not in array order.
    pub shuffle: bool,
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            max_arrival: 20,
            max_burst: 10,
            shuffle: false,
        }
    }

    /// Sets the latest possible arrival.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the longest possible burst.
    pub fn with_max_burst(mut self, max_burst: i64) -> Self {
        self.max_burst = max_burst;
        self
    }

    /// Enables or disables shuffling of the output order.
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Draws a process set with ids `1..=count`.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Process> {
        let max_arrival = self.max_arrival.max(0);
        let max_burst = self.max_burst.max(1);

        let mut processes: Vec<Process> = (1..=self.count)
            .map(|id| {
                Process::new(
                    id as Pid,
                    rng.random_range(0..=max_arrival),
                    rng.random_range(1..=max_burst),
                )
            })
            .collect();

        if self.shuffle {
            processes.shuffle(rng);
        }
        processes
    }
}
