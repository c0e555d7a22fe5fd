//! Schedule quality metrics (KPIs).
//!
//! Aggregates the per-process metrics of one schedule result so policies
//! can be compared side by side.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Turnaround | mean(completion - arrival) |
//! | Avg Waiting | mean(turnaround - burst) |
//! | Avg Response | mean(first dispatch - arrival) |
//! | Makespan | Latest completion time |
//! | Idle Time | Units in [0, makespan) with nothing running |
//! | CPU Utilization | busy / makespan |
//! | Throughput | processes / makespan |
//!
//! Averages and ratios are rounded to two fractional digits.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};
use crate::models::ScheduleResult;

/// Schedule performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Mean turnaround time.
    pub avg_turnaround: f64,
    /// Mean waiting time.
    pub avg_waiting: f64,
    /// Mean response time.
    pub avg_response: f64,
    /// Latest completion time.
    pub makespan: i64,
    /// Processor idle time before the makespan.
    pub idle_time: i64,
    /// Busy fraction of `[0, makespan)` (0.0..1.0).
    pub cpu_utilization: f64,
    /// Completed processes per time unit.
    pub throughput: f64,
}

impl ScheduleKpi {
    /// Computes KPIs from a schedule result.
    ///
    /// # Errors
    /// `EmptyMetrics` if the result has no metric records.
    pub fn calculate(result: &ScheduleResult) -> Result<Self> {
        let count = result.metrics.len();
        if count == 0 {
            return Err(SimulationError::EmptyMetrics);
        }

        let (turnaround, waiting, response) =
            result
                .metrics
                .iter()
                .fold((0i128, 0i128, 0i128), |(t, w, r), m| {
                    (
                        t + i128::from(m.turnaround),
                        w + i128::from(m.waiting),
                        r + i128::from(m.response),
                    )
                });

        let n = count as f64;
        let makespan = result.makespan();
        let throughput = if makespan > 0 {
            count as f64 / makespan as f64
        } else {
            0.0
        };

        Ok(Self {
            avg_turnaround: round2(turnaround as f64 / n),
            avg_waiting: round2(waiting as f64 / n),
            avg_response: round2(response as f64 / n),
            makespan,
            idle_time: result.idle_time(),
            cpu_utilization: round2(result.cpu_utilization().unwrap_or(0.0)),
            throughput: round2(throughput),
        })
    }
}

/// Rounds to two fractional digits.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
