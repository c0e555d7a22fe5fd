//! Schedule result model.
//!
//! A schedule result is the complete output of one policy run: the Gantt
//! timeline of the single processor and one metric record per process.
//!
//! # Metric Identities
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - burst |
//! | Response | first dispatch - arrival |

use serde::{Deserialize, Serialize};

use super::{Policy, Process};

/// A contiguous `[start, end)` span during which one process holds the processor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GanttInterval {
    /// Running process ID.
    pub id: String,
    /// Start time (inclusive).
    pub start: i64,
    /// End time (exclusive).
    pub end: i64,
}

impl GanttInterval {
    /// Creates a new interval.
    pub fn new(id: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            id: id.into(),
            start,
            end,
        }
    }

    /// Length of the interval.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// Per-process performance record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetric {
    pub id: String,
    pub arrival: i64,
    pub burst: i64,
    /// Time the last unit of work finished.
    pub completion: i64,
    pub turnaround: i64,
    pub waiting: i64,
    pub response: i64,
}

impl ProcessMetric {
    /// Derives all metrics for a finished process.
    ///
    /// Every simulator goes through this function so the arithmetic
    /// cannot diverge between policies.
    pub fn compute(process: &Process, completion: i64, first_dispatch: i64) -> Self {
        let turnaround = completion - process.arrival;
        let waiting = turnaround - process.burst;
        let response = first_dispatch - process.arrival;
        debug_assert!(
            waiting >= 0 && response >= 0,
            "negative wait/response for {}",
            process.id
        );

        Self {
            id: process.id.clone(),
            arrival: process.arrival,
            burst: process.burst,
            completion,
            turnaround,
            waiting,
            response,
        }
    }
}

/// The output of simulating one policy over a process set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// Policy that produced this result.
    pub policy: Policy,
    /// Processor timeline, ordered by start time.
    pub intervals: Vec<GanttInterval>,
    /// One record per input process, ordered by process ID.
    ///
    /// IDs compare byte-wise (`String::cmp`), not by locale collation:
    /// `"B"` sorts before `"a"` and `"P10"` before `"P2"`.
    pub metrics: Vec<ProcessMetric>,
}

impl ScheduleResult {
    /// Creates an empty result for `policy`.
    pub fn new(policy: Policy) -> Self {
        Self {
            policy,
            intervals: Vec::new(),
            metrics: Vec::new(),
        }
    }

    /// Appends a run interval to the timeline.
    ///
    /// Intervals must be appended in time order and must not overlap.
    pub fn record_interval(&mut self, id: &str, start: i64, end: i64) {
        debug_assert!(start < end, "empty interval for {id}");
        debug_assert!(
            self.intervals.last().map_or(true, |last| last.end <= start),
            "overlapping interval for {id}"
        );
        self.intervals.push(GanttInterval::new(id, start, end));
    }

    /// Records the metrics of a finished process.
    pub fn record_completion(&mut self, process: &Process, completion: i64, first_dispatch: i64) {
        self.metrics
            .push(ProcessMetric::compute(process, completion, first_dispatch));
    }

    /// Puts metrics into process ID order. Called once by each simulator.
    pub(crate) fn finish(mut self) -> Self {
        self.metrics.sort_by(|a, b| a.id.cmp(&b.id));
        self
    }

    /// Makespan: latest end time on the timeline.
    pub fn makespan(&self) -> i64 {
        self.intervals.iter().map(|i| i.end).max().unwrap_or(0)
    }

    /// Total time the processor spent running processes.
    pub fn busy_time(&self) -> i64 {
        self.intervals.iter().map(GanttInterval::duration).sum()
    }

    /// Time between t=0 and the makespan with no process running.
    pub fn idle_time(&self) -> i64 {
        self.makespan() - self.busy_time()
    }

    /// Busy fraction of the span `[0, makespan)`.
    ///
    /// Returns `None` for an empty timeline.
    pub fn cpu_utilization(&self) -> Option<f64> {
        let makespan = self.makespan();
        if makespan <= 0 {
            return None;
        }
        Some(self.busy_time() as f64 / makespan as f64)
    }

    /// Returns all run intervals of one process.
    pub fn intervals_for(&self, id: &str) -> Vec<&GanttInterval> {
        self.intervals.iter().filter(|i| i.id == id).collect()
    }

    /// Finds the metric record of one process.
    pub fn metric_for(&self, id: &str) -> Option<&ProcessMetric> {
        self.metrics.iter().find(|m| m.id == id)
    }

    /// Completion time of one process.
    pub fn completion_time(&self, id: &str) -> Option<i64> {
        self.metric_for(id).map(|m| m.completion)
    }

    /// Process IDs in the order they were dispatched, one entry per interval.
    pub fn dispatch_order(&self) -> Vec<&str> {
        self.intervals.iter().map(|i| i.id.as_str()).collect()
    }

    /// Number of timeline intervals (context switches + 1).
    pub fn interval_count(&self) -> usize {
        self.intervals.len()
    }
}
