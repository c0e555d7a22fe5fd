//! Per-simulation run state.
//!
//! Created fresh by each simulator call and dropped when it returns;
//! never shared between policy runs.

use crate::models::Process;

/// Mutable bookkeeping for one process during one simulation.
#[derive(Debug, Clone)]
pub(crate) struct RunState {
    /// Work left to execute. `0 <= remaining <= burst`.
    pub remaining: i64,
    /// Time the process first received the processor.
    pub first_dispatch: Option<i64>,
    pub completed: bool,
    /// Round-robin ready-queue membership.
    pub queued: bool,
}

impl RunState {
    pub fn new(process: &Process) -> Self {
        Self {
            remaining: process.burst,
            first_dispatch: None,
            completed: false,
            queued: false,
        }
    }

    /// Builds one fresh state per process, index-aligned with `processes`.
    pub fn for_all(processes: &[Process]) -> Vec<Self> {
        processes.iter().map(Self::new).collect()
    }

    /// Marks a dispatch at `now`; returns the first dispatch time.
    pub fn dispatch(&mut self, now: i64) -> i64 {
        *self.first_dispatch.get_or_insert(now)
    }

    /// Executes `amount` units of work.
    pub fn run(&mut self, amount: i64) {
        debug_assert!(amount > 0 && amount <= self.remaining);
        self.remaining -= amount;
        if self.remaining == 0 {
            self.completed = true;
        }
    }
}
