//! Process set fixtures and reproducible random workloads.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::models::Process;

/// The classic four-process demo table.
///
/// | ID | Arrival | Burst | Priority |
/// |----|---------|-------|----------|
/// | P1 | 0 | 5 | 2 |
/// | P2 | 1 | 3 | 1 |
/// | P3 | 2 | 8 | 3 |
/// | P4 | 3 | 6 | 2 |
pub fn sample_processes() -> Vec<Process> {
    vec![
        Process::new("P1", 0, 5).with_priority(2),
        Process::new("P2", 1, 3).with_priority(1),
        Process::new("P3", 2, 8).with_priority(3),
        Process::new("P4", 3, 6).with_priority(2),
    ]
}

/// Shape of a generated workload. Ranges are inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkloadConfig {
    /// Number of processes.
    pub count: usize,
    /// Latest arrival time.
    pub max_arrival: i64,
    pub min_burst: i64,
    pub max_burst: i64,
    pub min_priority: i32,
    pub max_priority: i32,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            count: 8,
            max_arrival: 10,
            min_burst: 1,
            max_burst: 10,
            min_priority: 1,
            max_priority: 5,
        }
    }
}

impl WorkloadConfig {
    /// Sets the number of processes.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Sets the latest arrival time.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the burst range.
    pub fn with_burst_range(mut self, min: i64, max: i64) -> Self {
        self.min_burst = min;
        self.max_burst = max;
        self
    }
}

/// Generates `config.count` valid processes named `P1..Pn`.
///
/// The same `seed` always yields the same set. Out-of-range bounds are
/// clamped so every process has `arrival >= 0` and `burst >= 1`.
pub fn random_processes(config: &WorkloadConfig, seed: u64) -> Vec<Process> {
    let mut rng = StdRng::seed_from_u64(seed);

    let max_arrival = config.max_arrival.max(0);
    let min_burst = config.min_burst.max(1);
    let max_burst = config.max_burst.max(min_burst);
    let min_priority = config.min_priority;
    let max_priority = config.max_priority.max(min_priority);

    (1..=config.count)
        .map(|n| {
            Process::new(
                format!("P{n}"),
                rng.random_range(0..=max_arrival),
                rng.random_range(min_burst..=max_burst),
            )
            .with_priority(rng.random_range(min_priority..=max_priority))
        })
        .collect()
}
