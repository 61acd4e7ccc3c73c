//! Task and time-entry model types.
//!
//! `actual_hours` is incremented on every timer stop and can also be
//! hand-edited through a whole-record replacement, so it is best-effort
//! consistent with the sum of the task's time-entry durations -- the two
//! are never strictly reconciled.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::bas;
use crate::error::ValidationError;

/// Task status enumeration.
///
/// Transitions observed in practice:
/// - `NotStarted` -> `InProgress` only happens by convention when a timer
///   starts on the task, and only if the auto-start policy is enabled.
/// - any status -> `Completed` via `complete_task`; no uncomplete
///   operation exists, so `Completed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl TaskStatus {
    /// The three fixed buckets in dashboard order.
    pub const ALL: [TaskStatus; 3] = [
        TaskStatus::NotStarted,
        TaskStatus::InProgress,
        TaskStatus::Completed,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            TaskStatus::NotStarted => "Not Started",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
        }
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::NotStarted
    }
}

/// A tracked task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, monotonically assigned by the store.
    pub id: u32,
    /// Task title (empty titles are accepted).
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Estimated effort in hours.
    pub estimated_hours: f64,
    /// Planned start date.
    pub start_date: NaiveDate,
    /// Current status.
    pub status: TaskStatus,
    /// BAS account code used as a grouping key.
    pub bas_account: String,
    /// Accumulated tracked hours, starts at 0.
    pub actual_hours: f64,
}

/// The addable subset of a task; the store assigns id, status and
/// `actual_hours` on insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub estimated_hours: f64,
    pub start_date: NaiveDate,
    pub bas_account: String,
}

impl TaskDraft {
    /// Draft with the dashboard form defaults: one estimated hour,
    /// today's date, the default BAS account.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            estimated_hours: 1.0,
            start_date: Utc::now().date_naive(),
            bas_account: bas::DEFAULT_ACCOUNT.to_string(),
        }
    }
}

/// A recorded timing interval for a task.
///
/// Entries are created only when a timer session stops, never mutated,
/// and deleted only by the cascade when their task is deleted. The
/// `task_id` is a foreign reference, not ownership.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeEntry {
    /// Unique identifier, monotonically assigned by the store.
    pub id: u32,
    /// Owning task identifier.
    pub task_id: u32,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Duration in hours, derived from the interval but persisted
    /// redundantly.
    pub duration: f64,
    /// Free-text note.
    pub notes: String,
}

impl TimeEntry {
    /// Validating constructor for hand-built entries: end must be
    /// strictly after start.
    pub fn new(
        id: u32,
        task_id: u32,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        duration: f64,
        notes: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        if end_time <= start_time {
            return Err(ValidationError::InvalidTimeRange {
                start: start_time,
                end: end_time,
            });
        }
        Ok(Self {
            id,
            task_id,
            start_time,
            end_time,
            duration,
            notes: notes.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&TaskStatus::NotStarted).unwrap(),
            "\"not_started\""
        );
        assert_eq!(
            serde_json::to_string(&TaskStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
    }

    #[test]
    fn draft_defaults() {
        let draft = TaskDraft::new("Review");
        assert_eq!(draft.estimated_hours, 1.0);
        assert_eq!(draft.bas_account, "1930");
        assert!(draft.description.is_empty());
    }

    #[test]
    fn time_entry_rejects_inverted_range() {
        let start = Utc.with_ymd_and_hms(2025, 3, 20, 12, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2025, 3, 20, 9, 0, 0).unwrap();
        let err = TimeEntry::new(1, 1, start, end, 3.0, "backwards").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidTimeRange { .. }));
    }

    #[test]
    fn time_entry_accepts_forward_range() {
        let start = Utc.with_ymd_and_hms(2025, 3, 20, 9, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2025, 3, 20, 12, 30, 0).unwrap();
        let entry = TimeEntry::new(1, 1, start, end, 3.5, "morning block").unwrap();
        assert_eq!(entry.duration, 3.5);
    }
}
