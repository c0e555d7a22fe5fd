//! Serializable simulation request.

use serde::{Deserialize, Serialize};

use super::simulate;
use crate::error::Result;
use crate::models::{Policy, Process, ScheduleResult};

/// Input container for one simulation.
///
/// Deserializes from e.g.
/// `{"policy":"RoundRobin","processes":[{"id":"P1","arrival":0,"burst":5}],"quantum":3}`;
/// `quantum` may be omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// Policy to simulate.
    pub policy: Policy,
    /// Processes, in submission order.
    pub processes: Vec<Process>,
    /// Round-robin time quantum. `None` = [`super::DEFAULT_QUANTUM`].
    #[serde(default)]
    pub quantum: Option<i64>,
}

impl ScheduleRequest {
    /// Creates a new request.
    pub fn new(policy: Policy, processes: Vec<Process>) -> Self {
        Self {
            policy,
            processes,
            quantum: None,
        }
    }

    /// Sets the round-robin time quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = Some(quantum);
        self
    }

    /// Runs the simulation.
    pub fn run(&self) -> Result<ScheduleResult> {
        simulate(self.policy, &self.processes, self.quantum)
    }
}
