//! Simulation configuration.
//!
//! Knobs that apply to every discipline. The round-robin quantum is not here:
//! it belongs to the algorithm choice (`Algorithm::RoundRobin { quantum }`).

use serde::{Deserialize, Serialize};

/// Default upper bound on the number of processes per run.
pub const DEFAULT_CAPACITY: usize = 64;

/// How the clock moves while the processor has nothing to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdleAdvance {
    /// Advance one tick per idle iteration.
    #[default]
    UnitStep,
    /// Jump straight to the earliest pending arrival.
    NextArrival,
}

impl IdleAdvance {
    /// Next clock value when idle at `now`, given the earliest arrival not
    /// yet admitted. Never returns a value `<= now`.
    pub fn next_time(self, now: i64, next_arrival: Option<i64>) -> i64 {
        match (self, next_arrival) {
            (Self::NextArrival, Some(arrival)) => arrival.max(now + 1),
            _ => now + 1,
        }
    }
}

/// Settings shared by all schedulers.
///
/// # Example
/// ```
/// use cpu_schedsim::config::{IdleAdvance, SimulationConfig};
///
/// let config = SimulationConfig::new()
///     .with_capacity(128)
///     .with_idle_advance(IdleAdvance::NextArrival);
/// assert_eq!(config.capacity, 128);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Maximum number of processes accepted per run.
    pub capacity: usize,
    /// Idle clock policy.
    pub idle_advance: IdleAdvance,
}

impl SimulationConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the process capacity bound.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the idle clock policy.
    pub fn with_idle_advance(mut self, idle_advance: IdleAdvance) -> Self {
        self.idle_advance = idle_advance;
        self
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            idle_advance: IdleAdvance::UnitStep,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SimulationConfig::default();
        assert_eq!(config.capacity, DEFAULT_CAPACITY);
        assert_eq!(config.idle_advance, IdleAdvance::UnitStep);
    }

    #[test]
    fn test_unit_step() {
        assert_eq!(IdleAdvance::UnitStep.next_time(3, Some(10)), 4);
        assert_eq!(IdleAdvance::UnitStep.next_time(3, None), 4);
    }

    #[test]
    fn test_next_arrival() {
        assert_eq!(IdleAdvance::NextArrival.next_time(3, Some(10)), 10);
        // Always strictly advances
        assert_eq!(IdleAdvance::NextArrival.next_time(3, Some(2)), 4);
        assert_eq!(IdleAdvance::NextArrival.next_time(3, None), 4);
    }

    #[test]
    fn test_partial_deserialize() {
        let config: SimulationConfig = serde_json::from_str(r#"{"capacity": 8}"#).unwrap();
        assert_eq!(config.capacity, 8);
        assert_eq!(config.idle_advance, IdleAdvance::UnitStep);

        let config: SimulationConfig =
            serde_json::from_str(r#"{"idle_advance": "next_arrival"}"#).unwrap();
        assert_eq!(config.capacity, DEFAULT_CAPACITY);
        assert_eq!(config.idle_advance, IdleAdvance::NextArrival);
    }
}
