//! Plan (solution) model.
//!
//! A plan is the output of one sequencing pass: the tasks in execution
//! order with computed start/finish times and lateness, plus the two
//! aggregate lateness metrics.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 2:
//! lateness L_j = C_j - d_j, floored at zero here (tardiness T_j).

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::Task;

const MS_PER_HOUR: f64 = 3_600_000.0;

/// One task placed on the timeline.
///
/// Invariants (enforced by the constructor): `finish = start + duration`
/// and `lateness_hours = max(0, finish - deadline)` in hours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledItem {
    /// The source task (owned copy; the caller's list is never retained).
    pub task: Task,
    /// Computed start time.
    pub start: NaiveDateTime,
    /// Computed finish time.
    pub finish: NaiveDateTime,
    /// Hours past deadline at finish, zero if on time.
    pub lateness_hours: f64,
}

impl ScheduledItem {
    /// Places a task at the given start time, deriving finish and lateness.
    pub fn new(task: Task, start: NaiveDateTime) -> Self {
        let finish = start + task.duration();
        let overrun_ms = (finish - task.deadline).num_milliseconds();
        let lateness_hours = (overrun_ms.max(0) as f64) / MS_PER_HOUR;
        Self {
            task,
            start,
            finish,
            lateness_hours,
        }
    }

    /// Whether this task finishes after its deadline.
    pub fn is_late(&self) -> bool {
        self.lateness_hours > 0.0
    }
}

/// A complete execution plan for one sequencing pass.
///
/// `items` is in execution order, not input order. The aggregate fields
/// are consistent with the per-item lateness values by construction:
/// `total_lateness_hours` is their sum and `max_lateness_hours` their
/// maximum (both zero for an empty plan).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchedulePlan {
    /// Scheduled tasks in execution order.
    pub items: Vec<ScheduledItem>,
    /// Sum of lateness across all items (hours).
    pub total_lateness_hours: f64,
    /// Largest single-item lateness (hours).
    pub max_lateness_hours: f64,
}

impl SchedulePlan {
    /// Creates an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of scheduled items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Whether the plan contains no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Finds the item for a given task ID.
    pub fn item_for_task(&self, task_id: u32) -> Option<&ScheduledItem> {
        self.items.iter().find(|i| i.task.id == task_id)
    }

    /// Finish time of the last item, `None` for an empty plan.
    ///
    /// With strict sequential packing this is also the latest finish
    /// across all items.
    pub fn finish_time(&self) -> Option<NaiveDateTime> {
        self.items.last().map(|i| i.finish)
    }

    /// Items that finish past their deadline, in execution order.
    pub fn late_items(&self) -> Vec<&ScheduledItem> {
        self.items.iter().filter(|i| i.is_late()).collect()
    }

    /// Number of items finishing on or before their deadline.
    pub fn on_time_count(&self) -> usize {
        self.items.iter().filter(|i| !i.is_late()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn dt(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 10, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn item(id: u32, duration_hours: f64, deadline: NaiveDateTime, start: NaiveDateTime) -> ScheduledItem {
        ScheduledItem::new(Task::new(id, format!("T{id}"), duration_hours, deadline), start)
    }

    #[test]
    fn test_item_on_time() {
        // Finishes exactly at the deadline → zero lateness
        let i = item(1, 2.0, dt(19, 10), dt(19, 8));
        assert_eq!(i.start, dt(19, 8));
        assert_eq!(i.finish, dt(19, 10));
        assert_eq!(i.lateness_hours, 0.0);
        assert!(!i.is_late());
    }

    #[test]
    fn test_item_late() {
        let i = item(1, 4.0, dt(19, 10), dt(19, 9));
        assert_eq!(i.finish, dt(19, 13));
        assert!((i.lateness_hours - 3.0).abs() < 1e-10);
        assert!(i.is_late());
    }

    #[test]
    fn test_item_finish_is_start_plus_duration() {
        let i = item(1, 1.5, dt(20, 17), dt(19, 8));
        assert_eq!(i.finish - i.start, Duration::minutes(90));
    }

    #[test]
    fn test_empty_plan() {
        let plan = SchedulePlan::new();
        assert!(plan.is_empty());
        assert_eq!(plan.item_count(), 0);
        assert_eq!(plan.total_lateness_hours, 0.0);
        assert_eq!(plan.max_lateness_hours, 0.0);
        assert!(plan.finish_time().is_none());
        assert!(plan.late_items().is_empty());
    }

    #[test]
    fn test_plan_accessors() {
        let plan = SchedulePlan {
            items: vec![
                item(2, 2.0, dt(19, 10), dt(19, 8)),  // on time
                item(1, 4.0, dt(19, 12), dt(19, 10)), // 2h late
            ],
            total_lateness_hours: 2.0,
            max_lateness_hours: 2.0,
        };

        assert_eq!(plan.item_count(), 2);
        assert_eq!(plan.item_for_task(1).unwrap().task.name, "T1");
        assert!(plan.item_for_task(99).is_none());
        assert_eq!(plan.finish_time(), Some(dt(19, 14)));
        assert_eq!(plan.late_items().len(), 1);
        assert_eq!(plan.late_items()[0].task.id, 1);
        assert_eq!(plan.on_time_count(), 1);
    }

    #[test]
    fn test_plan_serde_round_trip() {
        let plan = SchedulePlan {
            items: vec![item(1, 2.0, dt(19, 10), dt(19, 8))],
            total_lateness_hours: 0.0,
            max_lateness_hours: 0.0,
        };
        let json = serde_json::to_string(&plan).unwrap();
        let back: SchedulePlan = serde_json::from_str(&json).unwrap();
        assert_eq!(back, plan);
    }
}
