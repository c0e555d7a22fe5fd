//! First-come-first-served simulation.
//!
//! # Algorithm
//! 1. Stable-sort processes by arrival (input order breaks ties).
//! 2. For each process: idle until it arrives, then run its whole burst.

use log::trace;

use crate::dispatching::{rules, RuleEngine};
use crate::models::{Policy, Process, ScheduleResult};

pub(crate) fn simulate(processes: &[Process]) -> ScheduleResult {
    let order = RuleEngine::new()
        .with_rule(rules::EarliestArrival)
        .sort_indices(processes);

    let mut result = ScheduleResult::new(Policy::Fcfs);
    let mut clock = 0;

    for idx in order {
        let process = &processes[idx];
        let start = clock.max(process.arrival);
        let end = start + process.burst;
        trace!("FCFS: {} runs {}..{}", process.id, start, end);

        result.record_interval(&process.id, start, end);
        result.record_completion(process, end, start);
        clock = end;
    }

    result.finish()
}
