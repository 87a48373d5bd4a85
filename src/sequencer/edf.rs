//! Earliest-deadline-first sequencing pass.
//!
//! # Complexity
//! O(n log n) sort plus O(n) walk.

use chrono::NaiveDateTime;

use crate::models::{SchedulePlan, ScheduledItem, Task};

/// Sequences tasks by earliest deadline and computes lateness.
///
/// Sorts tasks by deadline ascending (stable: equal deadlines keep input
/// order), then walks the sorted sequence with a running clock starting at
/// `start_time`. Each task starts exactly when the previous one finishes;
/// there are no gaps and no overlaps. Lateness is hours past deadline at
/// finish, floored at zero.
///
/// Pure function of its inputs: tasks are copied into the plan, never
/// mutated or retained, and identical inputs produce identical plans.
/// An empty slice yields an empty plan with zero totals. Input is assumed
/// well formed (see `validation::validate_tasks`); a negative duration is
/// a caller contract violation.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use edf_sequencer::models::Task;
/// use edf_sequencer::sequencer::compute_schedule;
///
/// let deadline = NaiveDate::from_ymd_opt(2025, 10, 19)
///     .unwrap()
///     .and_hms_opt(10, 0, 0)
///     .unwrap();
/// let start = NaiveDate::from_ymd_opt(2025, 10, 19)
///     .unwrap()
///     .and_hms_opt(8, 0, 0)
///     .unwrap();
///
/// let plan = compute_schedule(&[Task::new(1, "Hearing", 2.0, deadline)], start);
/// assert_eq!(plan.item_count(), 1);
/// assert_eq!(plan.items[0].finish, deadline);
/// assert_eq!(plan.max_lateness_hours, 0.0);
/// ```
pub fn compute_schedule(tasks: &[Task], start_time: NaiveDateTime) -> SchedulePlan {
    let mut ordered: Vec<&Task> = tasks.iter().collect();
    ordered.sort_by_key(|t| t.deadline); // stable, ties keep input order

    let mut items = Vec::with_capacity(ordered.len());
    let mut clock = start_time;
    let mut total_lateness_hours = 0.0;
    let mut max_lateness_hours = 0.0f64;

    for task in ordered {
        let item = ScheduledItem::new(task.clone(), clock);
        clock = item.finish;
        total_lateness_hours += item.lateness_hours;
        max_lateness_hours = max_lateness_hours.max(item.lateness_hours);
        items.push(item);
    }

    SchedulePlan {
        items,
        total_lateness_hours,
        max_lateness_hours,
    }
}
