//! Scheduling policy selector.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SimulationError;

/// The four simulated scheduling policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Policy {
    /// First-come-first-served (non-preemptive).
    Fcfs,
    /// Shortest-job-first (non-preemptive).
    Sjf,
    /// Lowest priority value first (non-preemptive, no aging).
    Priority,
    /// Fixed-quantum round-robin (preemptive).
    RoundRobin,
}

impl Policy {
    /// All policies, in comparison display order.
    pub const ALL: [Policy; 4] = [
        Policy::Fcfs,
        Policy::Sjf,
        Policy::Priority,
        Policy::RoundRobin,
    ];

    /// Short label (e.g., "FCFS", "RR").
    pub fn label(&self) -> &'static str {
        match self {
            Policy::Fcfs => "FCFS",
            Policy::Sjf => "SJF",
            Policy::Priority => "Priority",
            Policy::RoundRobin => "RR",
        }
    }

    /// Policy description.
    pub fn description(&self) -> &'static str {
        match self {
            Policy::Fcfs => "First Come First Served",
            Policy::Sjf => "Shortest Job First",
            Policy::Priority => "Priority Scheduling",
            Policy::RoundRobin => "Round Robin",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Policy {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fcfs" | "fifo" => Ok(Policy::Fcfs),
            "sjf" => Ok(Policy::Sjf),
            "priority" => Ok(Policy::Priority),
            "rr" | "roundrobin" | "round-robin" | "round_robin" => Ok(Policy::RoundRobin),
            _ => Err(SimulationError::UnknownPolicy(s.to_string())),
        }
    }
}
