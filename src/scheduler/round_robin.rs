//! Fixed-quantum round-robin simulation.
//!
//! # Algorithm
//! 1. Admit every process that has arrived into a FIFO ready queue.
//! 2. If the queue is empty, jump to the next arrival and admit.
//! 3. Pop the head and run it for `min(quantum, remaining)`.
//! 4. Admit processes that arrived during the slice, in arrival order.
//! 5. Re-enqueue the preempted process behind them, or record its metrics.
//!
//! Newly arrived processes always queue ahead of the process that was
//! just preempted.

use std::collections::VecDeque;

use log::trace;

use super::state::RunState;
use crate::dispatching::{rules, RuleEngine};
use crate::models::{Policy, Process, ScheduleResult};

/// FIFO ready queue fed from an arrival-ordered admission list.
#[derive(Debug)]
struct ReadyQueue {
    /// Process indices by arrival, input order on ties.
    admission: Vec<usize>,
    /// Next entry of `admission` not yet admitted.
    cursor: usize,
    queue: VecDeque<usize>,
}

impl ReadyQueue {
    fn new(processes: &[Process]) -> Self {
        let admission = RuleEngine::new()
            .with_rule(rules::EarliestArrival)
            .sort_indices(processes);
        Self {
            admission,
            cursor: 0,
            queue: VecDeque::with_capacity(processes.len()),
        }
    }

    /// Enqueues every not-yet-admitted process with `arrival <= now`.
    fn admit(&mut self, processes: &[Process], states: &mut [RunState], now: i64) {
        while let Some(&idx) = self.admission.get(self.cursor) {
            if !processes[idx].has_arrived(now) {
                break;
            }
            self.cursor += 1;
            self.push(idx, states);
        }
    }

    fn push(&mut self, idx: usize, states: &mut [RunState]) {
        debug_assert!(!states[idx].queued, "process {idx} queued twice");
        states[idx].queued = true;
        self.queue.push_back(idx);
    }

    fn pop(&mut self, states: &mut [RunState]) -> Option<usize> {
        let idx = self.queue.pop_front()?;
        states[idx].queued = false;
        Some(idx)
    }

    /// Arrival time of the next process still waiting to be admitted.
    fn next_arrival(&self, processes: &[Process]) -> Option<i64> {
        self.admission
            .get(self.cursor)
            .map(|&idx| processes[idx].arrival)
    }
}

pub(crate) fn simulate(processes: &[Process], quantum: i64) -> ScheduleResult {
    debug_assert!(quantum > 0);

    let mut states = RunState::for_all(processes);
    let mut ready = ReadyQueue::new(processes);
    let mut result = ScheduleResult::new(Policy::RoundRobin);
    let mut clock = 0;
    let mut completed = 0;

    ready.admit(processes, &mut states, clock);

    while completed < processes.len() {
        let Some(idx) = ready.pop(&mut states) else {
            match ready.next_arrival(processes) {
                Some(t) => {
                    trace!("RR: idle {clock}..{t}");
                    clock = t;
                    ready.admit(processes, &mut states, clock);
                    continue;
                }
                None => break,
            }
        };

        let process = &processes[idx];
        let state = &mut states[idx];
        let first_dispatch = state.dispatch(clock);
        let slice = quantum.min(state.remaining);
        let start = clock;
        state.run(slice);
        let finished = state.completed;
        clock += slice;
        trace!("RR: {} runs {}..{}", process.id, start, clock);

        result.record_interval(&process.id, start, clock);
        ready.admit(processes, &mut states, clock);

        if finished {
            result.record_completion(process, clock, first_dispatch);
            completed += 1;
        } else {
            ready.push(idx, &mut states);
        }
    }

    result.finish()
}
