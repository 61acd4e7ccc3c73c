//! In-memory task and time-entry store.
//!
//! Holds the ordered task and time-entry collections behind explicit CRUD
//! operations. Identifier-miss cases are silent no-ops reported through
//! the `bool` return values, preserving the observable behavior of the
//! dashboard this store was lifted from.

pub mod demo;

use serde::{Deserialize, Serialize};

use crate::task::{Task, TaskDraft, TaskStatus, TimeEntry};

/// Ordered collections of tasks and time entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskStore {
    tasks: Vec<Task>,
    entries: Vec<TimeEntry>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn entries(&self) -> &[TimeEntry] {
        &self.entries
    }

    pub fn task(&self, id: u32) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Entries referencing the given task, in insertion order.
    pub fn entries_for_task(&self, task_id: u32) -> Vec<&TimeEntry> {
        self.entries.iter().filter(|e| e.task_id == task_id).collect()
    }

    fn next_task_id(&self) -> u32 {
        self.tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1
    }

    fn next_entry_id(&self) -> u32 {
        self.entries.iter().map(|e| e.id).max().unwrap_or(0) + 1
    }

    // ── Mutations ────────────────────────────────────────────────────

    /// Append a new task from a draft. No field validation is performed
    /// (an empty title is accepted). Returns the assigned id.
    pub fn add_task(&mut self, draft: TaskDraft) -> u32 {
        let id = self.next_task_id();
        self.tasks.push(Task {
            id,
            title: draft.title,
            description: draft.description,
            estimated_hours: draft.estimated_hours,
            start_date: draft.start_date,
            status: TaskStatus::NotStarted,
            bas_account: draft.bas_account,
            actual_hours: 0.0,
        });
        id
    }

    /// Remove a task and cascade-delete every time entry referencing it.
    /// Returns false (no-op) when the id is absent.
    pub fn delete_task(&mut self, id: u32) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() == before {
            return false;
        }
        self.entries.retain(|e| e.task_id != id);
        true
    }

    /// Whole-record replacement by id. Returns false (no-op) when no task
    /// with the given id exists.
    pub fn edit_task(&mut self, updated: Task) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == updated.id) {
            Some(slot) => {
                *slot = updated;
                true
            }
            None => false,
        }
    }

    /// Set status to `Completed` unconditionally, regardless of the
    /// current status or tracked hours. Returns false when absent.
    pub fn complete_task(&mut self, id: u32) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.status = TaskStatus::Completed;
                true
            }
            None => false,
        }
    }

    /// Set a task's status directly. Used by the timer's auto-start
    /// policy. Returns false when absent.
    pub fn set_status(&mut self, id: u32, status: TaskStatus) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.status = status;
                true
            }
            None => false,
        }
    }

    /// Add tracked hours onto a task's accumulator. Returns false when
    /// absent.
    pub fn add_hours(&mut self, id: u32, hours: f64) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.actual_hours += hours;
                true
            }
            None => false,
        }
    }

    /// Append a time entry with the next free id and return a reference
    /// to it. Only the timer session calls this; entries are never
    /// mutated afterwards.
    pub fn record_entry(
        &mut self,
        task_id: u32,
        start_time: chrono::DateTime<chrono::Utc>,
        end_time: chrono::DateTime<chrono::Utc>,
        duration: f64,
        notes: impl Into<String>,
    ) -> &TimeEntry {
        let id = self.next_entry_id();
        self.entries.push(TimeEntry {
            id,
            task_id,
            start_time,
            end_time,
            duration,
            notes: notes.into(),
        });
        self.entries
            .last()
            .unwrap_or_else(|| unreachable!("entry was just pushed"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn draft(title: &str, account: &str) -> TaskDraft {
        TaskDraft {
            title: title.to_string(),
            description: String::new(),
            estimated_hours: 2.0,
            start_date: chrono::NaiveDate::from_ymd_opt(2025, 3, 20).unwrap(),
            bas_account: account.to_string(),
        }
    }

    #[test]
    fn add_task_assigns_monotonic_ids_and_defaults() {
        let mut store = TaskStore::new();
        let a = store.add_task(draft("First", "1930"));
        let b = store.add_task(draft("Second", "5010"));
        assert_eq!((a, b), (1, 2));

        let first = store.task(1).unwrap();
        assert_eq!(first.status, TaskStatus::NotStarted);
        assert_eq!(first.actual_hours, 0.0);
    }

    #[test]
    fn add_task_accepts_empty_title() {
        let mut store = TaskStore::new();
        let id = store.add_task(draft("", "1930"));
        assert_eq!(store.task(id).unwrap().title, "");
    }

    #[test]
    fn id_assignment_is_max_plus_one_after_delete() {
        let mut store = TaskStore::new();
        store.add_task(draft("a", "1930"));
        store.add_task(draft("b", "1930"));
        store.add_task(draft("c", "1930"));
        store.delete_task(2);
        // Max existing id is 3, so the next task gets 4 -- ids are never
        // reused even with holes in the sequence.
        let id = store.add_task(draft("d", "1930"));
        assert_eq!(id, 4);
    }

    #[test]
    fn delete_task_cascades_only_its_own_entries() {
        let mut store = TaskStore::new();
        store.add_task(draft("one", "1930"));
        store.add_task(draft("two", "5010"));
        let t0 = Utc.with_ymd_and_hms(2025, 3, 20, 9, 0, 0).unwrap();
        let t1 = Utc.with_ymd_and_hms(2025, 3, 20, 10, 0, 0).unwrap();
        store.record_entry(1, t0, t1, 1.0, "task one work");
        store.record_entry(2, t0, t1, 1.0, "task two work");

        assert!(store.delete_task(1));
        assert!(store.task(1).is_none());
        assert_eq!(store.entries().len(), 1);
        assert_eq!(store.entries()[0].task_id, 2);
    }

    #[test]
    fn delete_missing_task_is_noop() {
        let mut store = TaskStore::new();
        store.add_task(draft("keep", "1930"));
        assert!(!store.delete_task(99));
        assert_eq!(store.tasks().len(), 1);
    }

    #[test]
    fn edit_task_replaces_whole_record() {
        let mut store = TaskStore::new();
        let id = store.add_task(draft("before", "1930"));
        let mut updated = store.task(id).unwrap().clone();
        updated.title = "after".to_string();
        updated.actual_hours = 4.5;
        assert!(store.edit_task(updated));
        let task = store.task(id).unwrap();
        assert_eq!(task.title, "after");
        assert_eq!(task.actual_hours, 4.5);
    }

    #[test]
    fn edit_missing_task_is_noop() {
        let mut store = TaskStore::new();
        let id = store.add_task(draft("only", "1930"));
        let mut ghost = store.task(id).unwrap().clone();
        ghost.id = 42;
        assert!(!store.edit_task(ghost));
        assert_eq!(store.task(id).unwrap().title, "only");
    }

    #[test]
    fn complete_task_is_unconditional() {
        let mut store = TaskStore::new();
        let id = store.add_task(draft("fresh", "1930"));
        // Straight from NotStarted with zero tracked hours.
        assert!(store.complete_task(id));
        assert_eq!(store.task(id).unwrap().status, TaskStatus::Completed);
        // Completing again stays completed.
        assert!(store.complete_task(id));
        assert_eq!(store.task(id).unwrap().status, TaskStatus::Completed);
    }

    #[test]
    fn entry_ids_are_monotonic() {
        let mut store = TaskStore::new();
        store.add_task(draft("t", "1930"));
        let t0 = Utc.with_ymd_and_hms(2025, 3, 20, 9, 0, 0).unwrap();
        let t1 = Utc.with_ymd_and_hms(2025, 3, 20, 10, 0, 0).unwrap();
        let first = store.record_entry(1, t0, t1, 1.0, "a").id;
        let second = store.record_entry(1, t0, t1, 1.0, "b").id;
        assert_eq!((first, second), (1, 2));
    }
}
