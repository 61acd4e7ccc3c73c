//! Accounting report aggregation.
//!
//! A report dataset arrives from a [`ReportProvider`] (simulated here,
//! a backend in the real system) and is reduced to per-account and
//! per-category summary rows. The filter selections (report type, date
//! range) travel with the fetch but do not filter the bundled sample
//! data.

mod provider;
mod sample;
mod service;

pub use provider::{ReportProvider, SampleReportProvider, DEFAULT_FETCH_DELAY_MS};
pub use sample::sample_dataset;
pub use service::{FetchTicket, ReportService};

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// The two report views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportType {
    /// One row per BAS account.
    BasSummary,
    /// Hours rolled up per category.
    CategoryBreakdown,
}

impl ReportType {
    /// Wire/file name for the report type, e.g. in export file names.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportType::BasSummary => "basSummary",
            ReportType::CategoryBreakdown => "categoryBreakdown",
        }
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basSummary" => Ok(ReportType::BasSummary),
            "categoryBreakdown" => Ok(ReportType::CategoryBreakdown),
            other => Err(format!(
                "unknown report type '{other}' (expected basSummary or categoryBreakdown)"
            )),
        }
    }
}

/// Inclusive date range filter for a report fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// First of the current month through today, the default filter.
    pub fn month_to_date(today: NaiveDate) -> Self {
        let start = today.with_day(1).unwrap_or(today);
        Self { start, end: today }
    }
}

/// Aggregated hours for one BAS account, as supplied by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountRow {
    pub account_id: String,
    pub account_name: String,
    pub category: String,
    pub total_hours: f64,
    pub task_count: u32,
}

/// Hours rolled up for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRow {
    pub category: String,
    pub total_hours: f64,
}

/// A full report payload: per-account rows, per-category rows, grand
/// total. Ephemeral -- recomputed on every fetch, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDataset {
    pub accounts: Vec<AccountRow>,
    pub categories: Vec<CategoryRow>,
    pub total_hours: f64,
}

/// One row per account, exactly as supplied by the dataset. The provider
/// already aggregated per account, so no further grouping happens here.
pub fn account_summary(dataset: &ReportDataset) -> Vec<AccountRow> {
    dataset.accounts.clone()
}

/// One row per distinct category, hours summed across all accounts
/// sharing that category, in first-seen order.
pub fn category_summary(dataset: &ReportDataset) -> Vec<CategoryRow> {
    let mut rows: Vec<CategoryRow> = Vec::new();
    for account in &dataset.accounts {
        match rows.iter_mut().find(|r| r.category == account.category) {
            Some(row) => row.total_hours += account.total_hours,
            None => rows.push(CategoryRow {
                category: account.category.clone(),
                total_hours: account.total_hours,
            }),
        }
    }
    rows
}

/// Percent of the grand total carried by one category ("% of Total"
/// table column). 0 when the total is 0.
pub fn category_share(category_hours: f64, total_hours: f64) -> f64 {
    if total_hours == 0.0 {
        return 0.0;
    }
    category_hours / total_hours * 100.0
}
