//! Earliest-deadline-first sequencing with lateness metrics.
//!
//! Assigns a linear execution order and start/finish timestamps to a set of
//! tasks on a single resource, serving tasks in ascending deadline order and
//! reporting how far each one overruns its deadline.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Task`, `Priority`, `ScheduledItem`,
//!   `SchedulePlan`
//! - **`sequencer`**: The EDF sequencing pass (`compute_schedule`)
//! - **`validation`**: Input integrity checks (duplicate IDs, malformed
//!   durations)
//!
//! # Algorithm
//!
//! EDF is optimal for minimizing *maximum* lateness on a single machine
//! without preemption when all tasks are available at the start time
//! (Jackson 1955). The plan also reports *total* lateness, which EDF does
//! not minimize in general; both metrics come from the same pass.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 2-3
//! - Jackson (1955), "Scheduling a Production Line to Minimize Maximum
//!   Tardiness"

pub mod models;
pub mod sequencer;
pub mod validation;
