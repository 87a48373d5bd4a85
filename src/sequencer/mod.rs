//! EDF sequencing.
//!
//! Provides the single scheduling operation of this crate:
//! `compute_schedule`, a pure earliest-deadline-first pass over a task
//! list.
//!
//! # Algorithm
//!
//! Stable sort by deadline ascending, then a single walk with a running
//! clock that packs tasks back to back from the start time. Optimal for
//! maximum lateness on one machine without preemption (Jackson 1955).
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3
//! - Jackson (1955), "Scheduling a Production Line to Minimize Maximum
//!   Tardiness"

mod edf;

pub use edf::compute_schedule;
