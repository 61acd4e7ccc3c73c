//! CSV export of report summaries.
//!
//! Output is a header line plus one comma-joined line per row, `\n`
//! terminated. Fields are written without quoting or escaping -- a
//! deliberate compatibility decision carried over from the original
//! export: a field containing a comma will corrupt column alignment.
//! The account names in the fixed dataset contain none.

use chrono::NaiveDate;
use csv::{QuoteStyle, WriterBuilder};
use tracing::debug;

use crate::error::ExportError;
use crate::report::{
    account_summary, category_summary, AccountRow, CategoryRow, ReportDataset, ReportType,
};

/// One ordered output column: header plus field extractor.
pub struct Column<R> {
    pub header: &'static str,
    pub extract: fn(&R) -> String,
}

/// Render rows through the given ordered columns.
pub fn to_csv<R>(rows: &[R], columns: &[Column<R>]) -> Result<String, ExportError> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .from_writer(Vec::new());

    writer.write_record(columns.iter().map(|c| c.header))?;
    for row in rows {
        writer.write_record(columns.iter().map(|c| (c.extract)(row)))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Csv(e.into_error().into()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Minimal display form for an hours value: `12.5`, `45.2`, `3`.
fn fmt_hours(hours: f64) -> String {
    format!("{hours}")
}

/// Column set for the BAS account summary report.
pub fn account_summary_columns() -> Vec<Column<AccountRow>> {
    vec![
        Column {
            header: "Account ID",
            extract: |r| r.account_id.clone(),
        },
        Column {
            header: "Account Name",
            extract: |r| r.account_name.clone(),
        },
        Column {
            header: "Category",
            extract: |r| r.category.clone(),
        },
        Column {
            header: "Total Hours",
            extract: |r| fmt_hours(r.total_hours),
        },
        Column {
            header: "Task Count",
            extract: |r| r.task_count.to_string(),
        },
    ]
}

/// Column set for the category breakdown report.
pub fn category_breakdown_columns() -> Vec<Column<CategoryRow>> {
    vec![
        Column {
            header: "Category",
            extract: |r| r.category.clone(),
        },
        Column {
            header: "Total Hours",
            extract: |r| fmt_hours(r.total_hours),
        },
    ]
}

/// Render the selected report view of a dataset as CSV.
pub fn render_report_csv(
    report_type: ReportType,
    dataset: &ReportDataset,
) -> Result<String, ExportError> {
    let csv = match report_type {
        ReportType::BasSummary => {
            to_csv(&account_summary(dataset), &account_summary_columns())?
        }
        ReportType::CategoryBreakdown => {
            to_csv(&category_summary(dataset), &category_breakdown_columns())?
        }
    };
    debug!(report_type = %report_type, bytes = csv.len(), "rendered report csv");
    Ok(csv)
}

/// Download file name: `{reportType}_{ISO-date}.csv`.
pub fn export_file_name(report_type: ReportType, date: NaiveDate) -> String {
    format!("{}_{}.csv", report_type.as_str(), date.format("%Y-%m-%d"))
}
