//! Side-by-side comparison of all policies on one process set.

use serde::{Deserialize, Serialize};

use super::{simulate, ScheduleKpi};
use crate::error::Result;
use crate::models::{Policy, Process, ScheduleResult};

/// Average metric used to rank policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Criterion {
    Turnaround,
    Waiting,
    Response,
}

impl Criterion {
    fn score(&self, kpi: &ScheduleKpi) -> f64 {
        match self {
            Criterion::Turnaround => kpi.avg_turnaround,
            Criterion::Waiting => kpi.avg_waiting,
            Criterion::Response => kpi.avg_response,
        }
    }
}

/// One policy's outcome within a comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyComparison {
    pub policy: Policy,
    pub result: ScheduleResult,
    pub kpi: ScheduleKpi,
}

/// Outcomes of every policy over the same input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// One entry per policy, in [`Policy::ALL`] order.
    pub entries: Vec<PolicyComparison>,
}

impl Comparison {
    /// Finds the entry of one policy.
    pub fn get(&self, policy: Policy) -> Option<&PolicyComparison> {
        self.entries.iter().find(|e| e.policy == policy)
    }

    /// Entry with the lowest average for `criterion`.
    ///
    /// Ties go to the policy listed first in [`Policy::ALL`].
    pub fn best_by(&self, criterion: Criterion) -> Option<&PolicyComparison> {
        self.entries.iter().fold(None, |best, e| match best {
            Some(b) if criterion.score(&b.kpi) <= criterion.score(&e.kpi) => Some(b),
            _ => Some(e),
        })
    }
}

/// Runs every policy on `processes` and aggregates each result.
///
/// `quantum` only affects round-robin.
pub fn compare_all(processes: &[Process], quantum: Option<i64>) -> Result<Comparison> {
    let entries = Policy::ALL
        .iter()
        .map(|&policy| {
            let result = simulate(policy, processes, quantum)?;
            let kpi = ScheduleKpi::calculate(&result)?;
            Ok(PolicyComparison {
                policy,
                result,
                kpi,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Comparison { entries })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimulationError;
    use crate::workload::sample_processes;

    #[test]
    fn test_compare_sample() {
        let cmp = compare_all(&sample_processes(), None).unwrap();
        assert_eq!(cmp.entries.len(), 4);

        let fcfs = cmp.get(Policy::Fcfs).unwrap();
        assert!((fcfs.kpi.avg_waiting - 5.75).abs() < 1e-10);

        let sjf = cmp.get(Policy::Sjf).unwrap();
        assert!((sjf.kpi.avg_waiting - 5.25).abs() < 1e-10);

        let rr = cmp.get(Policy::RoundRobin).unwrap();
        assert!((rr.kpi.avg_waiting - 9.75).abs() < 1e-10);
        assert!((rr.kpi.avg_response - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_best_by() {
        let cmp = compare_all(&sample_processes(), Some(2)).unwrap();

        // SJF and Priority tie on waiting (5.25); SJF is listed first.
        assert_eq!(cmp.best_by(Criterion::Waiting).unwrap().policy, Policy::Sjf);
        assert_eq!(
            cmp.best_by(Criterion::Response).unwrap().policy,
            Policy::RoundRobin
        );
    }

    #[test]
    fn test_compare_propagates_errors() {
        assert_eq!(
            compare_all(&[], None).unwrap_err(),
            SimulationError::EmptyInput
        );
        assert_eq!(
            compare_all(&sample_processes(), Some(0)).unwrap_err(),
            SimulationError::InvalidQuantum(0)
        );
    }
}
