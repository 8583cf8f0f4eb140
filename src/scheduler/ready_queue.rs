//! Bounded FIFO ready queue for round-robin dispatch.

use std::collections::VecDeque;

use crate::error::ScheduleError;

/// FIFO queue of process indices with a fixed capacity.
///
/// A full queue rejects `enqueue` instead of overwriting the head.
#[derive(Debug, Clone)]
pub struct ReadyQueue {
    items: VecDeque<usize>,
    capacity: usize,
}

impl ReadyQueue {
    /// Creates an empty queue holding at most `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends an index at the tail.
    pub fn enqueue(&mut self, index: usize) -> Result<(), ScheduleError> {
        if self.items.len() >= self.capacity {
            return Err(ScheduleError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.items.push_back(index);
        Ok(())
    }

    /// Removes and returns the head.
    pub fn dequeue(&mut self) -> Option<usize> {
        self.items.pop_front()
    }

    /// Whether the queue holds no entries.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of queued entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}
