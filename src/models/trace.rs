//! Execution trace (Gantt) model.
//!
//! A trace is the ordered list of processor occupancy intervals produced by
//! a simulation run. It is pure output: rendering it to text is done by the
//! `Display` impl and never interleaved with scheduling.
//!
//! # Rendering
//! Each segment renders as `| P<id> <start>-<end> ` and the line is closed
//! with a trailing `|`:
//!
//! ```
//! use cpu_schedsim::models::{Segment, Trace};
//!
//! let mut trace = Trace::new();
//! trace.push(Segment::new(1, 0, 5));
//! trace.push(Segment::new(2, 5, 8));
//! assert_eq!(trace.to_string(), "| P1 0-5 | P2 5-8 |");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Pid;

/// Ordered processor occupancy intervals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    /// Segments in dispatch order.
    pub segments: Vec<Segment>,
}

/// One contiguous interval during which a single process held the processor.
///
/// The interval is half-open: `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Process that occupied the processor.
    pub process_id: Pid,
    /// Interval start (ticks).
    pub start: i64,
    /// Interval end (ticks).
    pub end: i64,
}

impl Segment {
    /// Creates a new segment.
    pub fn new(process_id: Pid, start: i64, end: i64) -> Self {
        Self {
            process_id,
            start,
            end,
        }
    }

    /// Length of the interval.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }

    /// Whether two segments share any instant.
    #[inline]
    pub fn overlaps(&self, other: &Segment) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl Trace {
    /// Creates an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a segment.
    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether no segment has been recorded.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Iterates segments in dispatch order.
    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    /// Makespan: latest end time across all segments.
    pub fn makespan(&self) -> i64 {
        self.segments.iter().map(|s| s.end).max().unwrap_or(0)
    }

    /// Returns all segments of one process, in dispatch order.
    pub fn segments_for_process(&self, process_id: Pid) -> Vec<&Segment> {
        self.segments
            .iter()
            .filter(|s| s.process_id == process_id)
            .collect()
    }

    /// Total time the processor was occupied.
    pub fn busy_time(&self) -> i64 {
        self.segments.iter().map(Segment::duration).sum()
    }

    /// Time one process spent on the processor.
    pub fn busy_time_for_process(&self, process_id: Pid) -> i64 {
        self.segments_for_process(process_id)
            .iter()
            .map(|s| s.duration())
            .sum()
    }

    /// Time in `[0, makespan)` during which nothing ran.
    pub fn idle_time(&self) -> i64 {
        self.makespan() - self.busy_time()
    }

    /// Processor utilization: busy_time / makespan.
    ///
    /// Returns `None` for an empty trace.
    pub fn utilization(&self) -> Option<f64> {
        let horizon = self.makespan();
        if horizon <= 0 {
            return None;
        }
        Some(self.busy_time() as f64 / horizon as f64)
    }

    /// Start of the first segment of a process.
    pub fn first_dispatch(&self, process_id: Pid) -> Option<i64> {
        self.segments
            .iter()
            .find(|s| s.process_id == process_id)
            .map(|s| s.start)
    }

    /// End of the last segment of a process.
    pub fn completion_time(&self, process_id: Pid) -> Option<i64> {
        self.segments_for_process(process_id)
            .iter()
            .map(|s| s.end)
            .max()
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "| P{} {}-{} ", self.process_id, self.start, self.end)
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "{segment}")?;
        }
        write!(f, "|")
    }
}
