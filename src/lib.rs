//! CPU scheduling simulator.
//!
//! Simulates classic single-processor scheduling policies over a fixed set
//! of processes and reports the processor timeline (Gantt intervals) and
//! per-process completion, turnaround, waiting and response times.
//! Rendering the results is left to the caller.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `Policy`, `GanttInterval`,
//!   `ProcessMetric`, `ScheduleResult`
//! - **`dispatching`**: Selection rules and the rule engine used by
//!   non-preemptive policies
//! - **`scheduler`**: FCFS, SJF, priority and round-robin simulators,
//!   KPI aggregation and policy comparison
//! - **`validation`**: Input integrity checks (empty set, duplicate IDs,
//!   burst and arrival ranges, quantum)
//! - **`workload`**: Demo and seeded random process sets
//!
//! # Example
//!
//! ```
//! use cpu_schedule::models::Policy;
//! use cpu_schedule::scheduler::{simulate, ScheduleKpi};
//! use cpu_schedule::workload::sample_processes;
//!
//! let result = simulate(Policy::Fcfs, &sample_processes(), None).unwrap();
//! let kpi = ScheduleKpi::calculate(&result).unwrap();
//! assert_eq!(kpi.avg_waiting, 5.75);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::{Result, SimulationError};
