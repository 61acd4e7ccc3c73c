//! Demo dataset seeded into the store for first-run display.

use chrono::{NaiveDate, TimeZone, Utc};

use crate::task::{Task, TaskStatus, TimeEntry};

use super::TaskStore;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid demo date")
}

fn ts(y: i32, m: u32, d: u32, h: u32, min: u32) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0)
        .single()
        .expect("valid demo timestamp")
}

/// A store pre-filled with the three demo tasks and their time entries.
pub fn demo_store() -> TaskStore {
    TaskStore {
        tasks: vec![
            Task {
                id: 1,
                title: "Website Development".to_string(),
                description: "Frontend implementation".to_string(),
                estimated_hours: 20.0,
                start_date: date(2025, 3, 20),
                status: TaskStatus::InProgress,
                bas_account: "7010".to_string(),
                actual_hours: 8.5,
            },
            Task {
                id: 2,
                title: "API Integration".to_string(),
                description: "Connect to payment gateway".to_string(),
                estimated_hours: 8.0,
                start_date: date(2025, 3, 22),
                status: TaskStatus::NotStarted,
                bas_account: "6200".to_string(),
                actual_hours: 0.0,
            },
            Task {
                id: 3,
                title: "Client Meeting".to_string(),
                description: "Review project progress".to_string(),
                estimated_hours: 2.0,
                start_date: date(2025, 3, 24),
                status: TaskStatus::Completed,
                bas_account: "5800".to_string(),
                actual_hours: 1.5,
            },
        ],
        entries: vec![
            TimeEntry {
                id: 1,
                task_id: 1,
                start_time: ts(2025, 3, 20, 9, 0),
                end_time: ts(2025, 3, 20, 12, 30),
                duration: 3.5,
                notes: "Header and navigation".to_string(),
            },
            TimeEntry {
                id: 2,
                task_id: 1,
                start_time: ts(2025, 3, 21, 14, 0),
                end_time: ts(2025, 3, 21, 19, 0),
                duration: 5.0,
                notes: "Responsive design".to_string(),
            },
            TimeEntry {
                id: 3,
                task_id: 3,
                start_time: ts(2025, 3, 24, 10, 0),
                end_time: ts(2025, 3, 24, 11, 30),
                duration: 1.5,
                notes: "Progress review".to_string(),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_store_shape() {
        let store = demo_store();
        assert_eq!(store.tasks().len(), 3);
        assert_eq!(store.entries().len(), 3);
        assert_eq!(store.entries_for_task(1).len(), 2);
        assert_eq!(store.entries_for_task(2).len(), 0);
    }

    #[test]
    fn demo_ids_continue_after_seed() {
        let mut store = demo_store();
        let id = store.add_task(crate::task::TaskDraft::new("Next"));
        assert_eq!(id, 4);
    }
}
