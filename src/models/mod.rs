//! Sequencing domain models.
//!
//! Provides the input type (`Task`) and the result types (`ScheduledItem`,
//! `SchedulePlan`) for single-resource deadline sequencing. Tasks are
//! constructed by the caller; plan types are produced by the sequencer and
//! never mutated afterwards.

mod plan;
mod task;

pub use plan::{SchedulePlan, ScheduledItem};
pub use task::{Priority, Task};
