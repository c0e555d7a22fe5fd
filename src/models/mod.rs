//! CPU scheduling domain models.
//!
//! Provides the plain data types exchanged between the simulation engine
//! and its callers. Nothing here depends on how results are rendered.
//!
//! # Domain Mappings
//!
//! | cpu-schedule | Operating system | Textbook Gantt chart |
//! |--------------|------------------|----------------------|
//! | Process | Thread/Task | Row label |
//! | GanttInterval | Time slice on the CPU | Bar segment |
//! | ProcessMetric | Per-task accounting | Results table row |
//! | ScheduleResult | Scheduler trace | Whole chart + table |

mod policy;
mod process;
mod schedule;

pub use policy::Policy;
pub use process::{Process, DEFAULT_PRIORITY};
pub use schedule::{GanttInterval, ProcessMetric, ScheduleResult};
