//! Rule engine for multi-criteria dispatching.
//!
//! Composes dispatching rules into a lexicographic comparator: the primary
//! rule decides, tie-breakers are consulted only on ties, and a final
//! tie-breaker settles whatever is still equal.

use std::cmp::Ordering;
use std::sync::Arc;

use super::DispatchingRule;
use crate::models::Process;

/// How ties are broken after all rules are exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreaker {
    /// Leave the processes equal (stable sorts keep input order).
    #[default]
    Stable,
    /// Deterministic by process ID (ascending).
    ById,
}

/// A composable rule engine for process prioritization.
///
/// Rules are applied in insertion order; the next rule is consulted only
/// when the previous one ties.
///
/// # Example
/// ```
/// use cpu_schedsim::dispatching::{RuleEngine, TieBreaker};
/// use cpu_schedsim::dispatching::rules;
///
/// let fcfs = RuleEngine::new()
///     .with_rule(rules::Fifo)
///     .with_final_tie_breaker(TieBreaker::ById);
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
    tie_breaker: TieBreaker,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            tie_breaker: TieBreaker::Stable,
        }
    }

    /// Adds the primary rule.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a tie-breaking rule, consulted after all rules added before it.
    pub fn with_tie_breaker<R: DispatchingRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Sets the final tie-breaking strategy.
    pub fn with_final_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Compares two processes. `Less` means `a` is dispatched first.
    pub fn compare(&self, a: &Process, b: &Process) -> Ordering {
        for rule in &self.rules {
            match rule.evaluate(a).cmp(&rule.evaluate(b)) {
                Ordering::Equal => continue,
                decided => return decided,
            }
        }

        // All rules tied → use final tie-breaker
        match self.tie_breaker {
            TieBreaker::Stable => Ordering::Equal,
            TieBreaker::ById => a.id.cmp(&b.id),
        }
    }

    /// Sorts processes in place, highest priority first.
    ///
    /// The sort is stable: processes the engine considers equal keep their
    /// relative order.
    pub fn sort(&self, processes: &mut [Process]) {
        processes.sort_by(|a, b| self.compare(a, b));
    }

    /// Returns the index of the highest-priority process among those
    /// accepted by `eligible`. On a full tie the earliest index wins.
    pub fn select_best_where<F>(&self, processes: &[Process], eligible: F) -> Option<usize>
    where
        F: Fn(&Process) -> bool,
    {
        let mut best: Option<usize> = None;
        for (idx, process) in processes.iter().enumerate() {
            if !eligible(process) {
                continue;
            }
            match best {
                Some(b) if self.compare(process, &processes[b]) != Ordering::Less => {}
                _ => best = Some(idx),
            }
        }
        best
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field(
                "rules",
                &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>(),
            )
            .field("tie_breaker", &self.tie_breaker)
            .finish()
    }
}
