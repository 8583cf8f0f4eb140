//! Simulation domain models.
//!
//! Provides the data shared by every scheduling discipline: the process
//! records supplied by the caller and the execution trace produced by a run.
//!
//! # Domain Mappings
//!
//! | cpu-schedsim | Operating system | Classic scheduling theory |
//! |--------------|------------------|---------------------------|
//! | Process | Task control block | Job |
//! | Segment | Time slice on the CPU | Operation interval |
//! | Trace | Dispatch log | Gantt chart |

mod process;
mod trace;

pub use process::{Pid, Process};
pub use trace::{Segment, Trace};
