//! Rule engine for multi-criteria process selection.
//!
//! Composes selection rules in sequence with a final tie-breaking
//! strategy, so every selection is deterministic.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{rules, RuleScore, SelectionRule};
use crate::models::Process;

/// How ties are broken after all rules are exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreaker {
    /// Position in the caller's input (default).
    #[default]
    SubmissionOrder,
    /// Process ID (lexicographic).
    ById,
}

/// A composable rule engine for process selection.
///
/// Rules are applied in the order they were added; a later rule is only
/// consulted when every earlier rule scored both processes equally.
///
/// # Example
/// ```
/// use cpu_schedule::dispatching::{RuleEngine, rules};
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::HighestPriority)
///     .with_tie_breaker(rules::EarliestArrival);
/// assert_eq!(engine.rule_names(), vec!["PRIORITY", "FCFS"]);
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn SelectionRule>>,
    tie_breaker: TieBreaker,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            tie_breaker: TieBreaker::SubmissionOrder,
        }
    }

    /// Shortest burst, then earliest arrival, then submission order.
    pub fn shortest_job_first() -> Self {
        Self::new()
            .with_rule(rules::ShortestBurst)
            .with_tie_breaker(rules::EarliestArrival)
    }

    /// Lowest priority value, then earliest arrival, then submission order.
    pub fn priority() -> Self {
        Self::new()
            .with_rule(rules::HighestPriority)
            .with_tie_breaker(rules::EarliestArrival)
    }

    /// Adds a primary rule.
    pub fn with_rule<R: SelectionRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a rule consulted only when the preceding rules tie.
    pub fn with_tie_breaker<R: SelectionRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Sets the final tie-breaking strategy.
    pub fn with_final_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Evaluates a single process and returns scores from each rule.
    pub fn evaluate(&self, process: &Process) -> Vec<RuleScore> {
        self.rules.iter().map(|r| r.evaluate(process)).collect()
    }

    /// Compares two processes of `processes` by index.
    pub fn compare(&self, processes: &[Process], a: usize, b: usize) -> Ordering {
        for rule in &self.rules {
            let ord = rule
                .evaluate(&processes[a])
                .cmp(&rule.evaluate(&processes[b]));
            if ord != Ordering::Equal {
                return ord;
            }
        }

        match self.tie_breaker {
            TieBreaker::SubmissionOrder => a.cmp(&b),
            TieBreaker::ById => processes[a].id.cmp(&processes[b].id).then(a.cmp(&b)),
        }
    }

    /// Returns all indices of `processes`, highest precedence first.
    pub fn sort_indices(&self, processes: &[Process]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..processes.len()).collect();
        indices.sort_by(|&a, &b| self.compare(processes, a, b));
        indices
    }

    /// Returns the candidate index with the highest precedence.
    pub fn select_best<I>(&self, processes: &[Process], candidates: I) -> Option<usize>
    where
        I: IntoIterator<Item = usize>,
    {
        candidates
            .into_iter()
            .min_by(|&a, &b| self.compare(processes, a, b))
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .field("tie_breaker", &self.tie_breaker)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sjf_ordering() {
        let processes = vec![
            Process::new("long", 0, 9),
            Process::new("short", 0, 1),
            Process::new("medium", 0, 4),
        ];
        let engine = RuleEngine::shortest_job_first();

        let order = engine.sort_indices(&processes);
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn test_arrival_breaks_burst_tie() {
        let processes = vec![Process::new("late", 4, 3), Process::new("early", 1, 3)];
        let engine = RuleEngine::shortest_job_first();

        assert_eq!(engine.select_best(&processes, 0..2), Some(1));
    }

    #[test]
    fn test_submission_order_breaks_full_tie() {
        let processes = vec![
            Process::new("B", 0, 3),
            Process::new("A", 0, 3),
        ];
        let engine = RuleEngine::shortest_job_first();

        assert_eq!(engine.select_best(&processes, [1, 0]), Some(0));
    }

    #[test]
    fn test_by_id_tie_breaker() {
        let processes = vec![
            Process::new("B", 0, 3),
            Process::new("A", 0, 3),
        ];
        let engine = RuleEngine::shortest_job_first().with_final_tie_breaker(TieBreaker::ById);

        assert_eq!(engine.select_best(&processes, 0..2), Some(1));
    }

    #[test]
    fn test_priority_ordering() {
        let processes = vec![
            Process::new("P1", 0, 5).with_priority(3),
            Process::new("P2", 2, 5).with_priority(1),
            Process::new("P3", 1, 5).with_priority(1),
        ];
        let engine = RuleEngine::priority();

        // P2 and P3 share priority 1; P3 arrived first.
        assert_eq!(engine.sort_indices(&processes), vec![2, 1, 0]);
    }

    #[test]
    fn test_select_from_subset() {
        let processes = vec![
            Process::new("P1", 0, 1),
            Process::new("P2", 0, 8),
            Process::new("P3", 0, 5),
        ];
        let engine = RuleEngine::shortest_job_first();

        assert_eq!(engine.select_best(&processes, [1, 2]), Some(2));
        assert_eq!(engine.select_best(&processes, std::iter::empty()), None);
    }

    #[test]
    fn test_evaluate_scores() {
        let p = Process::new("P1", 2, 6).with_priority(4);
        assert_eq!(RuleEngine::priority().evaluate(&p), vec![4, 2]);
        assert_eq!(RuleEngine::shortest_job_first().evaluate(&p), vec![6, 2]);
    }

    #[test]
    fn test_empty_engine_keeps_submission_order() {
        let processes = vec![Process::new("Z", 9, 9), Process::new("A", 0, 1)];
        assert_eq!(RuleEngine::new().sort_indices(&processes), vec![0, 1]);
    }
}
