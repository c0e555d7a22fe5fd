//! Error type shared by simulation, validation and aggregation.

use thiserror::Error;

/// Failures reported by the simulation engine.
///
/// All variants are local and deterministic: the same input always
/// produces the same error, so nothing here is worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// `simulate` was called with no processes.
    #[error("at least one process is required")]
    EmptyInput,

    /// A process with a non-positive burst reached the engine.
    #[error("process '{id}' has burst {burst}; burst must be greater than 0")]
    InvalidBurst { id: String, burst: i64 },

    /// A process arrives before t=0.
    #[error("process '{id}' has arrival {arrival}; arrival must not be negative")]
    InvalidArrival { id: String, arrival: i64 },

    /// Two processes share the same id.
    #[error("duplicate process id: {0}")]
    DuplicateId(String),

    /// The latest arrival plus the total burst does not fit the clock.
    #[error("process set spans past the representable time range (latest arrival + total burst overflows)")]
    TimeOverflow,

    /// Round-robin was requested with a non-positive quantum.
    #[error("time quantum must be greater than 0, got {0}")]
    InvalidQuantum(i64),

    /// Averages were requested over an empty metric set.
    #[error("cannot aggregate an empty metric set")]
    EmptyMetrics,

    /// A policy name could not be parsed.
    #[error("unknown scheduling policy: {0}")]
    UnknownPolicy(String),
}

pub type Result<T> = std::result::Result<T, SimulationError>;
