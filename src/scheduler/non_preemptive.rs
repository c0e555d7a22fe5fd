//! Non-preemptive selection loop shared by SJF and priority scheduling.
//!
//! # Algorithm
//! 1. Collect processes that have arrived and are not finished.
//! 2. If none, jump the clock to the earliest pending arrival.
//! 3. Otherwise let the rule engine pick one and run it to completion.
//!
//! Jumping over idle time yields the same timeline as stepping the clock
//! one unit at a time, without one iteration per idle unit.
//!
//! # Complexity
//! O(n^2) selections for n processes.

use log::trace;

use super::state::RunState;
use crate::dispatching::RuleEngine;
use crate::models::{Policy, Process, ScheduleResult};

pub(crate) fn simulate(policy: Policy, processes: &[Process], engine: &RuleEngine) -> ScheduleResult {
    let mut states = RunState::for_all(processes);
    let mut result = ScheduleResult::new(policy);
    let mut clock = 0;
    let mut completed = 0;

    while completed < processes.len() {
        let ready = (0..processes.len())
            .filter(|&i| !states[i].completed && processes[i].has_arrived(clock));

        let Some(idx) = engine.select_best(processes, ready) else {
            let next_arrival = processes
                .iter()
                .zip(&states)
                .filter(|(_, s)| !s.completed)
                .map(|(p, _)| p.arrival)
                .min();
            match next_arrival {
                Some(t) => {
                    trace!("{policy}: idle {clock}..{t}");
                    clock = t;
                    continue;
                }
                None => break,
            }
        };

        let process = &processes[idx];
        let state = &mut states[idx];
        let start = state.dispatch(clock);
        let work = state.remaining;
        let end = start + work;
        state.run(work);
        trace!("{policy}: {} runs {}..{}", process.id, start, end);

        result.record_interval(&process.id, start, end);
        result.record_completion(process, end, start);
        clock = end;
        completed += 1;
    }

    result.finish()
}
