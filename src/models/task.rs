//! Task model.
//!
//! A task is a unit of work with a processing duration and an absolute
//! deadline. Priority and client are informational labels carried through
//! to the plan; they never influence execution order.
//!
//! # Time Representation
//! Deadlines are naive wall-clock datetimes (no timezone). Durations are
//! fractional hours; `duration()` converts to a `chrono::Duration` with
//! millisecond precision.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Informational urgency label.
///
/// Does not affect sequencing — order is decided by deadline alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    /// Low urgency.
    Low,
    /// Normal urgency.
    #[default]
    Medium,
    /// High urgency.
    High,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        };
        f.write_str(s)
    }
}

/// A task to be sequenced.
///
/// Well-formed tasks have a unique `id` and a finite, non-negative
/// `duration_hours`; see `validation::validate_tasks`. The sequencer
/// assumes validated input and neither mutates nor retains tasks beyond
/// one invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier.
    pub id: u32,
    /// Human-readable name.
    pub name: String,
    /// Processing duration in hours.
    pub duration_hours: f64,
    /// Latest completion time.
    pub deadline: NaiveDateTime,
    /// Urgency label (informational only).
    pub priority: Priority,
    /// Client or owner tag (informational only).
    pub client: String,
}

impl Task {
    /// Creates a task with the given identity, duration, and deadline.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        duration_hours: f64,
        deadline: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            duration_hours,
            deadline,
            priority: Priority::default(),
            client: String::new(),
        }
    }

    /// Sets the urgency label.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the client tag.
    pub fn with_client(mut self, client: impl Into<String>) -> Self {
        self.client = client.into();
        self
    }

    /// Processing duration as a time delta, rounded to whole milliseconds.
    pub fn duration(&self) -> Duration {
        Duration::milliseconds((self.duration_hours * 3_600_000.0).round() as i64)
    }
}
