//! Task model.
//!
//! A task is a unit of planned work: it has a planned date span, a
//! phase it belongs to, a lifecycle status, and an optional assignee.
//! The layout engine reads only the planned dates, phase, and status;
//! the remaining fields feed metrics and validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A task to be laid out on the timeline.
///
/// Planned dates are inclusive calendar dates. `planned_end` is
/// expected to be on or after `planned_start`; the layout engine clamps
/// rather than rejects when it is not.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique task identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Phase this task belongs to. Empty = grouped under "Unassigned".
    #[serde(default)]
    pub phase: String,
    /// Planned start date (inclusive).
    pub planned_start: NaiveDate,
    /// Planned end date (inclusive).
    pub planned_end: NaiveDate,
    /// Actual start date, once work has begun.
    #[serde(default)]
    pub actual_start: Option<NaiveDate>,
    /// Actual end date, once work has finished.
    #[serde(default)]
    pub actual_end: Option<NaiveDate>,
    /// Lifecycle status. Drives bar color, nothing else.
    #[serde(default)]
    pub status: TaskStatus,
    /// Planned effort in working days (for cost metrics).
    #[serde(default)]
    pub duration_days: i64,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// ID of the assigned team member, if any.
    #[serde(default)]
    pub assigned_to: Option<String>,
}

impl Task {
    /// Creates a new task spanning the given planned dates.
    pub fn new(id: impl Into<String>, planned_start: NaiveDate, planned_end: NaiveDate) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            phase: String::new(),
            planned_start,
            planned_end,
            actual_start: None,
            actual_end: None,
            status: TaskStatus::Pending,
            duration_days: 0,
            description: None,
            assigned_to: None,
        }
    }

    /// Sets the task name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the phase.
    pub fn with_phase(mut self, phase: impl Into<String>) -> Self {
        self.phase = phase.into();
        self
    }

    /// Sets the status.
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the planned effort in working days.
    pub fn with_duration_days(mut self, days: i64) -> Self {
        self.duration_days = days;
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Assigns the task to a team member.
    pub fn with_assignee(mut self, member_id: impl Into<String>) -> Self {
        self.assigned_to = Some(member_id.into());
        self
    }

    /// Planned span in whole days, inclusive of both endpoints.
    ///
    /// Zero when the planned range is inverted.
    pub fn planned_span_days(&self) -> i64 {
        ((self.planned_end - self.planned_start).num_days() + 1).max(0)
    }

    /// Whether the planned range is inverted (end before start).
    pub fn has_inverted_range(&self) -> bool {
        self.planned_end < self.planned_start
    }
}

/// Task lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Not started.
    #[default]
    Pending,
    /// Work underway.
    InProgress,
    /// Finished.
    Completed,
    /// Cannot proceed.
    Blocked,
    /// Paused intentionally.
    OnHold,
}

impl TaskStatus {
    /// Hex color for this status's task bar.
    pub fn bar_color(&self) -> &'static str {
        match self {
            TaskStatus::Completed => "#22c55e",
            TaskStatus::InProgress => "#3b82f6",
            TaskStatus::Blocked => "#ef4444",
            TaskStatus::Pending | TaskStatus::OnHold => "#9ca3af",
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Completed => "completed",
            TaskStatus::Blocked => "blocked",
            TaskStatus::OnHold => "on-hold",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown status string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

impl FromStr for TaskStatus {
    type Err = ParseTaskStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(TaskStatus::Pending),
            "in-progress" => Ok(TaskStatus::InProgress),
            "completed" => Ok(TaskStatus::Completed),
            "blocked" => Ok(TaskStatus::Blocked),
            "on-hold" => Ok(TaskStatus::OnHold),
            other => Err(ParseTaskStatusError(other.to_string())),
        }
    }
}
