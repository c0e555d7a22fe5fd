//! Process (unit of CPU work) model.
//!
//! A process is the immutable input to every simulation: when it becomes
//! eligible, how much CPU it needs, and how important it is.

use serde::{Deserialize, Serialize};

/// Priority assigned when the caller does not set one.
pub const DEFAULT_PRIORITY: i32 = 1;

/// A process to be scheduled on the single simulated processor.
///
/// # Time Representation
/// All times are integer time units relative to the simulation start (t=0).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: String,
    /// Time unit at which the process becomes eligible to run.
    pub arrival: i64,
    /// Total CPU time required.
    pub burst: i64,
    /// Scheduling priority (lower = more important).
    #[serde(default = "default_priority")]
    pub priority: i32,
}

fn default_priority() -> i32 {
    DEFAULT_PRIORITY
}

impl Process {
    /// Creates a process with the default priority.
    pub fn new(id: impl Into<String>, arrival: i64, burst: i64) -> Self {
        Self {
            id: id.into(),
            arrival,
            burst,
            priority: DEFAULT_PRIORITY,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Whether the process has arrived by `time`.
    #[inline]
    pub fn has_arrived(&self, time: i64) -> bool {
        self.arrival <= time
    }
}
