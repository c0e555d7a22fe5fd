//! Selection rules and rule engine for non-preemptive dispatching.
//!
//! When the processor frees up, a non-preemptive policy picks one process
//! from the arrived, unfinished set. The pick is expressed as a chain of
//! rules: the first rule decides, later rules only break its ties, and a
//! final [`TieBreaker`] makes the order total.
//!
//! # Usage
//!
//! ```
//! use cpu_schedule::dispatching::{RuleEngine, rules};
//! use cpu_schedule::models::Process;
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::ShortestBurst)
//!     .with_tie_breaker(rules::EarliestArrival);
//!
//! let processes = vec![Process::new("A", 0, 6), Process::new("B", 0, 2)];
//! assert_eq!(engine.select_best(&processes, 0..processes.len()), Some(1));
//! ```

mod engine;
pub mod rules;

pub use engine::{RuleEngine, TieBreaker};

use crate::models::Process;
use std::fmt::Debug;

/// Score returned by a selection rule.
///
/// Lower scores = dispatched first.
pub type RuleScore = i64;

/// A rule that ranks processes competing for the processor.
///
/// # Score Convention
/// **Lower score = higher precedence.**
pub trait SelectionRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF").
    fn name(&self) -> &'static str;

    /// Scores a process; lower wins.
    fn evaluate(&self, process: &Process) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
