//! Input validation for task lists.
//!
//! The sequencer assumes well-formed input; callers building tasks from
//! user-entered values should validate first. Detects:
//! - Duplicate task IDs
//! - Negative durations
//! - Non-finite durations (NaN or infinity)
//!
//! All problems are collected in one pass rather than failing on the
//! first.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::Task;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A malformed-task error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Two tasks share the same ID.
    #[error("duplicate task ID: {0}")]
    DuplicateId(u32),
    /// A task's duration is negative.
    #[error("task {id} has negative duration: {duration_hours}")]
    NegativeDuration {
        /// Offending task ID.
        id: u32,
        /// The negative value supplied.
        duration_hours: f64,
    },
    /// A task's duration is NaN or infinite.
    #[error("task {id} has non-finite duration")]
    NonFiniteDuration {
        /// Offending task ID.
        id: u32,
    },
}

/// Validates a task list before sequencing.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every detected issue.
pub fn validate_tasks(tasks: &[Task]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen_ids = HashSet::new();

    for task in tasks {
        if !seen_ids.insert(task.id) {
            errors.push(ValidationError::DuplicateId(task.id));
        }

        if !task.duration_hours.is_finite() {
            errors.push(ValidationError::NonFiniteDuration { id: task.id });
        } else if task.duration_hours < 0.0 {
            errors.push(ValidationError::NegativeDuration {
                id: task.id,
                duration_hours: task.duration_hours,
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
