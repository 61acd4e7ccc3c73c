//! Single-slot timer session.
//!
//! At most one session is active at a time. The session holds no thread
//! of its own -- the caller owns the tick source and invokes `tick()`
//! once per second (the CLI drives it from a sleep loop, tests call it
//! directly). Timestamps come from an injected [`Clock`] so tests can
//! simulate time deterministically.
//!
//! ## Guard conditions
//!
//! `start` is rejected while a session is active; `stop` is rejected
//! while idle. Rejections are silent no-ops surfaced through the return
//! value, matching the dashboard behavior this was lifted from.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::store::TaskStore;
use crate::task::{TaskStatus, TimeEntry};

/// Source of wall-clock timestamps for session start/end.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by `Utc::now()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// The in-progress timing interval.
#[derive(Debug, Clone, Serialize)]
pub struct ActiveTimer {
    pub task_id: u32,
    pub task_title: String,
    pub started_at: DateTime<Utc>,
    pub elapsed_secs: u64,
}

/// Single-active-timer session.
#[derive(Debug, Clone)]
pub struct TimerSession<C: Clock = SystemClock> {
    clock: C,
    /// When enabled, starting a timer on a `NotStarted` task moves it to
    /// `InProgress`. Off by default: the observed dashboard never
    /// flipped status on timer start, only `complete_task` changed it.
    auto_start_task: bool,
    active: Option<ActiveTimer>,
}

impl TimerSession<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for TimerSession<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> TimerSession<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            auto_start_task: false,
            active: None,
        }
    }

    /// Enable or disable the auto-start status policy.
    pub fn auto_start_task(mut self, enabled: bool) -> Self {
        self.auto_start_task = enabled;
        self
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn active(&self) -> Option<&ActiveTimer> {
        self.active.as_ref()
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.active.as_ref().map(|a| a.elapsed_secs).unwrap_or(0)
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Begin timing the given task. Rejected (returns false) when a
    /// session is already active or the task does not exist.
    pub fn start(&mut self, store: &mut TaskStore, task_id: u32) -> bool {
        if self.active.is_some() {
            debug!(task_id, "timer start rejected: session already active");
            return false;
        }
        let Some(task) = store.task(task_id) else {
            debug!(task_id, "timer start rejected: unknown task");
            return false;
        };
        let title = task.title.clone();
        let needs_transition = self.auto_start_task && task.status == TaskStatus::NotStarted;

        self.active = Some(ActiveTimer {
            task_id,
            task_title: title,
            started_at: self.clock.now(),
            elapsed_secs: 0,
        });
        if needs_transition {
            store.set_status(task_id, TaskStatus::InProgress);
        }
        true
    }

    /// Advance the elapsed counter by one second. No-op while idle.
    pub fn tick(&mut self) {
        if let Some(active) = &mut self.active {
            active.elapsed_secs += 1;
        }
    }

    /// Stop the session: materialize exactly one time entry, add the
    /// duration onto the task's `actual_hours`, and clear the slot.
    /// Rejected (returns None) when no session is active.
    pub fn stop(&mut self, store: &mut TaskStore) -> Option<TimeEntry> {
        let Some(active) = self.active.take() else {
            debug!("timer stop rejected: no active session");
            return None;
        };

        let duration = round_hours(active.elapsed_secs as f64 / 3600.0);
        let end_time = self.clock.now();
        let entry = store
            .record_entry(
                active.task_id,
                active.started_at,
                end_time,
                duration,
                "Work session",
            )
            .clone();
        store.add_hours(active.task_id, duration);
        debug!(
            task_id = active.task_id,
            elapsed_secs = active.elapsed_secs,
            duration,
            "timer stopped"
        );
        Some(entry)
    }
}

/// Round to 2 decimal places, the persistence precision for durations.
fn round_hours(hours: f64) -> f64 {
    (hours * 100.0).round() / 100.0
}

/// Format elapsed seconds as zero-padded `HH:MM:SS`. Hours are
/// unbounded, not wrapped at 24.
pub fn format_elapsed(total_secs: u64) -> String {
    let hrs = total_secs / 3600;
    let mins = (total_secs % 3600) / 60;
    let secs = total_secs % 60;
    format!("{hrs:02}:{mins:02}:{secs:02}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskDraft;
    use chrono::TimeZone;

    /// Deterministic clock returning a fixed instant.
    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    fn fixed_clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2025, 3, 25, 9, 0, 0).unwrap())
    }

    fn store_with_task() -> TaskStore {
        let mut store = TaskStore::new();
        store.add_task(TaskDraft::new("Tracked"));
        store
    }

    #[test]
    fn start_then_stop_records_one_entry() {
        let mut store = store_with_task();
        let mut session = TimerSession::with_clock(fixed_clock());

        assert!(session.start(&mut store, 1));
        for _ in 0..7200 {
            session.tick();
        }
        let entry = session.stop(&mut store).unwrap();

        assert_eq!(entry.task_id, 1);
        assert_eq!(entry.duration, 2.0);
        assert_eq!(entry.notes, "Work session");
        assert_eq!(store.entries().len(), 1);
        assert_eq!(store.task(1).unwrap().actual_hours, 2.0);
        assert!(!session.is_running());
    }

    #[test]
    fn stop_after_3661_seconds_rounds_to_1_02() {
        let mut store = store_with_task();
        let mut session = TimerSession::with_clock(fixed_clock());

        session.start(&mut store, 1);
        for _ in 0..3661 {
            session.tick();
        }
        assert_eq!(format_elapsed(session.elapsed_secs()), "01:01:01");
        let entry = session.stop(&mut store).unwrap();
        assert_eq!(entry.duration, 1.02);
    }

    #[test]
    fn second_start_is_rejected_and_session_unchanged() {
        let mut store = store_with_task();
        store.add_task(TaskDraft::new("Other"));
        let mut session = TimerSession::with_clock(fixed_clock());

        assert!(session.start(&mut store, 1));
        session.tick();
        assert!(!session.start(&mut store, 2));
        assert_eq!(session.active().unwrap().task_id, 1);
        assert_eq!(session.elapsed_secs(), 1);
    }

    #[test]
    fn stop_without_session_creates_nothing() {
        let mut store = store_with_task();
        let mut session = TimerSession::with_clock(fixed_clock());
        assert!(session.stop(&mut store).is_none());
        assert!(store.entries().is_empty());
    }

    #[test]
    fn start_on_unknown_task_is_rejected() {
        let mut store = store_with_task();
        let mut session = TimerSession::with_clock(fixed_clock());
        assert!(!session.start(&mut store, 99));
        assert!(!session.is_running());
    }

    #[test]
    fn status_untouched_without_auto_start_policy() {
        let mut store = store_with_task();
        let mut session = TimerSession::with_clock(fixed_clock());
        session.start(&mut store, 1);
        assert_eq!(store.task(1).unwrap().status, TaskStatus::NotStarted);
    }

    #[test]
    fn auto_start_policy_moves_task_in_progress() {
        let mut store = store_with_task();
        let mut session = TimerSession::with_clock(fixed_clock()).auto_start_task(true);
        session.start(&mut store, 1);
        assert_eq!(store.task(1).unwrap().status, TaskStatus::InProgress);
    }

    #[test]
    fn auto_start_policy_leaves_completed_tasks_alone() {
        let mut store = store_with_task();
        store.complete_task(1);
        let mut session = TimerSession::with_clock(fixed_clock()).auto_start_task(true);
        session.start(&mut store, 1);
        assert_eq!(store.task(1).unwrap().status, TaskStatus::Completed);
    }

    #[test]
    fn format_elapsed_is_unbounded_above_24_hours() {
        assert_eq!(format_elapsed(0), "00:00:00");
        assert_eq!(format_elapsed(59), "00:00:59");
        assert_eq!(format_elapsed(3600), "01:00:00");
        assert_eq!(format_elapsed(90 * 3600 + 61), "90:01:01");
    }

    #[test]
    fn accumulates_across_sessions() {
        let mut store = store_with_task();
        let mut session = TimerSession::with_clock(fixed_clock());

        session.start(&mut store, 1);
        for _ in 0..1800 {
            session.tick();
        }
        session.stop(&mut store);

        session.start(&mut store, 1);
        for _ in 0..1800 {
            session.tick();
        }
        session.stop(&mut store);

        assert_eq!(store.task(1).unwrap().actual_hours, 1.0);
        assert_eq!(store.entries().len(), 2);
    }
}
