//! Input validation for process sets.
//!
//! Checks the structural integrity of a process set before simulation.
//! Detects:
//! - Empty input
//! - Duplicate IDs
//! - Non-positive burst times
//! - Negative arrival times
//! - Time horizons that overflow the simulated clock
//!
//! `validate_processes` reports every problem at once so a caller can show
//! them together. The simulators re-run it and stop at the first error.

use std::collections::HashSet;

use log::warn;

use crate::error::{Result, SimulationError};
use crate::models::Process;

/// Validation result carrying every detected problem.
pub type ValidationResult = std::result::Result<(), Vec<SimulationError>>;

/// Validates a process set.
///
/// Checks:
/// 1. At least one process
/// 2. No duplicate process IDs
/// 3. Every burst is greater than 0
/// 4. No arrival is negative
/// 5. `max(arrival) + sum(burst)` fits in `i64`; no simulated clock
///    value can exceed it
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues
/// in input order.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    if processes.is_empty() {
        return Err(vec![SimulationError::EmptyInput]);
    }

    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for p in processes {
        if !ids.insert(p.id.as_str()) {
            errors.push(SimulationError::DuplicateId(p.id.clone()));
        }

        if p.burst <= 0 {
            errors.push(SimulationError::InvalidBurst {
                id: p.id.clone(),
                burst: p.burst,
            });
        }

        if p.arrival < 0 {
            errors.push(SimulationError::InvalidArrival {
                id: p.id.clone(),
                arrival: p.arrival,
            });
        }
    }

    if errors.is_empty() && horizon(processes).is_none() {
        errors.push(SimulationError::TimeOverflow);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Latest arrival plus total burst, or `None` on overflow.
fn horizon(processes: &[Process]) -> Option<i64> {
    let latest_arrival = processes.iter().map(|p| p.arrival).max().unwrap_or(0);
    processes
        .iter()
        .try_fold(latest_arrival, |acc, p| acc.checked_add(p.burst))
}

/// Fail-fast variant used by the simulators: returns the first problem.
pub(crate) fn ensure_valid(processes: &[Process]) -> Result<()> {
    validate_processes(processes).map_err(|errors| {
        warn!("rejected process set: {} problem(s)", errors.len());
        errors
            .into_iter()
            .next()
            .unwrap_or(SimulationError::EmptyInput)
    })
}

/// Checks a round-robin time quantum.
pub fn validate_quantum(quantum: i64) -> Result<i64> {
    if quantum <= 0 {
        warn!("rejected time quantum {quantum}");
        return Err(SimulationError::InvalidQuantum(quantum));
    }
    Ok(quantum)
}
