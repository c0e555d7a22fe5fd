//! Built-in selection rules.
//!
//! All rules return lower scores for processes that should run first.

use super::{RuleScore, SelectionRule};
use crate::models::Process;

/// Shortest burst first.
///
/// Minimizes mean waiting time among non-preemptive policies when all
/// processes are available at once.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl SelectionRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        process.burst
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Lowest priority value first.
///
/// No aging: a process with a large priority value may wait as long as
/// more important processes keep arriving.
#[derive(Debug, Clone, Copy)]
pub struct HighestPriority;

impl SelectionRule for HighestPriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        RuleScore::from(process.priority)
    }

    fn description(&self) -> &'static str {
        "Highest Priority (lowest value)"
    }
}

/// Earliest arrival first.
#[derive(Debug, Clone, Copy)]
pub struct EarliestArrival;

impl SelectionRule for EarliestArrival {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        process.arrival
    }

    fn description(&self) -> &'static str {
        "First Come First Served"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_scores() {
        let p = Process::new("P1", 3, 7).with_priority(-2);
        assert_eq!(ShortestBurst.evaluate(&p), 7);
        assert_eq!(HighestPriority.evaluate(&p), -2);
        assert_eq!(EarliestArrival.evaluate(&p), 3);
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(ShortestBurst.name(), "SJF");
        assert_eq!(HighestPriority.name(), "PRIORITY");
        assert_eq!(EarliestArrival.description(), "First Come First Served");
    }
}
