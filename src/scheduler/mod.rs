//! Policy simulators, KPI evaluation and policy comparison.
//!
//! Each simulator takes the process set as a read-only slice, builds its
//! own run state, and returns a [`ScheduleResult`]. No state survives
//! between calls, so the same slice can be simulated under every policy
//! (even from several threads) without coordination.
//!
//! # Policies
//!
//! | Policy | Preemptive | Selection |
//! |--------|-----------|-----------|
//! | FCFS | no | earliest arrival |
//! | SJF | no | shortest burst, then earliest arrival |
//! | Priority | no | lowest priority value, then earliest arrival |
//! | Round-Robin | yes | FIFO queue, fixed quantum |
//!
//! Remaining ties always go to the process listed first by the caller.

mod compare;
mod fcfs;
mod kpi;
mod non_preemptive;
mod request;
mod round_robin;
mod state;

pub use compare::{compare_all, Comparison, Criterion, PolicyComparison};
pub use kpi::ScheduleKpi;
pub use request::ScheduleRequest;

use log::debug;

use crate::dispatching::RuleEngine;
use crate::error::Result;
use crate::models::{Policy, Process, ScheduleResult};
use crate::validation::{ensure_valid, validate_quantum};

/// Round-robin time quantum used when none is given.
pub const DEFAULT_QUANTUM: i64 = 2;

/// Simulates `policy` over `processes`.
///
/// `quantum` is only read for [`Policy::RoundRobin`] and defaults to
/// [`DEFAULT_QUANTUM`].
///
/// # Errors
/// - `EmptyInput` if `processes` is empty
/// - `DuplicateId`, `InvalidBurst`, `InvalidArrival` for malformed processes
/// - `InvalidQuantum` for round-robin with `quantum <= 0`
///
/// # Example
///
/// ```
/// use cpu_schedule::models::{Policy, Process};
/// use cpu_schedule::scheduler::simulate;
///
/// let processes = vec![Process::new("P1", 0, 5), Process::new("P2", 1, 3)];
/// let result = simulate(Policy::Fcfs, &processes, None).unwrap();
/// assert_eq!(result.completion_time("P2"), Some(8));
/// ```
pub fn simulate(
    policy: Policy,
    processes: &[Process],
    quantum: Option<i64>,
) -> Result<ScheduleResult> {
    ensure_valid(processes)?;

    let result = match policy {
        Policy::Fcfs => fcfs::simulate(processes),
        Policy::Sjf => {
            non_preemptive::simulate(policy, processes, &RuleEngine::shortest_job_first())
        }
        Policy::Priority => non_preemptive::simulate(policy, processes, &RuleEngine::priority()),
        Policy::RoundRobin => {
            let quantum = validate_quantum(quantum.unwrap_or(DEFAULT_QUANTUM))?;
            round_robin::simulate(processes, quantum)
        }
    };

    debug!(
        "{policy}: {} processes, {} intervals, makespan {}",
        processes.len(),
        result.interval_count(),
        result.makespan()
    );
    Ok(result)
}
