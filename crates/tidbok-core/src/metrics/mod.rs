//! Dashboard metrics derived from the current task collection.
//!
//! All functions are pure -- the presentation layer recomputes them on
//! every render, so they take the task slice by reference and allocate
//! only their result rows.

use serde::{Deserialize, Serialize};

use crate::bas::BasAccount;
use crate::task::{Task, TaskStatus};

/// Count for one status bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: TaskStatus,
    pub count: usize,
}

/// Hours summed for one BAS account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountHours {
    pub account_id: String,
    pub account_name: String,
    pub hours: f64,
}

/// Everything the dashboard cards and charts need, in one recomputable
/// snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub completion_pct: u32,
    pub estimate_accuracy_pct: u32,
    pub total_estimated_hours: f64,
    pub total_actual_hours: f64,
    pub status_distribution: Vec<StatusCount>,
    pub hours_by_account: Vec<AccountHours>,
}

/// Counts for the three fixed status buckets, in fixed order. Buckets
/// with zero count are included.
pub fn status_distribution(tasks: &[Task]) -> Vec<StatusCount> {
    TaskStatus::ALL
        .iter()
        .map(|&status| StatusCount {
            status,
            count: tasks.iter().filter(|t| t.status == status).count(),
        })
        .collect()
}

/// Per-account sums of `actual_hours` over the fixed lookup. Accounts
/// summing to exactly 0 are excluded (strict greater-than-zero filter),
/// so the bar chart never shows empty bars.
pub fn hours_by_account(tasks: &[Task], accounts: &[BasAccount]) -> Vec<AccountHours> {
    accounts
        .iter()
        .map(|account| AccountHours {
            account_id: account.id.clone(),
            account_name: account.name.clone(),
            hours: tasks
                .iter()
                .filter(|t| t.bas_account == account.id)
                .map(|t| t.actual_hours)
                .sum(),
        })
        .filter(|row| row.hours > 0.0)
        .collect()
}

/// `round(100 * completed / total)`; 0 when no tasks exist.
pub fn completion_percentage(tasks: &[Task]) -> u32 {
    if tasks.is_empty() {
        return 0;
    }
    let completed = tasks
        .iter()
        .filter(|t| t.status == TaskStatus::Completed)
        .count();
    (completed as f64 / tasks.len() as f64 * 100.0).round() as u32
}

/// Mean estimate-accuracy score across tasks with both positive
/// estimated and positive actual hours.
///
/// Per task: `100 - min(100, |actual/estimated*100 - 100|)` -- full
/// credit at 100% of estimate, degrading linearly in absolute percentage
/// deviation, floored at 0. Returns 100 when no task qualifies (vacuous
/// full credit, kept as-is from the dashboard).
pub fn estimate_accuracy(tasks: &[Task]) -> u32 {
    let qualifying: Vec<&Task> = tasks
        .iter()
        .filter(|t| t.estimated_hours > 0.0 && t.actual_hours > 0.0)
        .collect();
    if qualifying.is_empty() {
        return 100;
    }

    let sum: f64 = qualifying
        .iter()
        .map(|t| {
            let deviation = (t.actual_hours / t.estimated_hours * 100.0 - 100.0).abs();
            100.0 - deviation.min(100.0)
        })
        .sum();
    (sum / qualifying.len() as f64).round() as u32
}

/// Sum of estimated hours across all tasks.
pub fn total_estimated_hours(tasks: &[Task]) -> f64 {
    tasks.iter().map(|t| t.estimated_hours).sum()
}

/// Sum of tracked hours across all tasks.
pub fn total_actual_hours(tasks: &[Task]) -> f64 {
    tasks.iter().map(|t| t.actual_hours).sum()
}

/// Compute the full dashboard snapshot.
pub fn summary(tasks: &[Task], accounts: &[BasAccount]) -> MetricsSummary {
    MetricsSummary {
        completion_pct: completion_percentage(tasks),
        estimate_accuracy_pct: estimate_accuracy(tasks),
        total_estimated_hours: total_estimated_hours(tasks),
        total_actual_hours: total_actual_hours(tasks),
        status_distribution: status_distribution(tasks),
        hours_by_account: hours_by_account(tasks, accounts),
    }
}
