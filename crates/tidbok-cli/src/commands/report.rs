//! Accounting report commands.

use std::path::PathBuf;
use std::time::Duration;

use chrono::{NaiveDate, Utc};
use clap::Subcommand;
use tidbok_core::export::{export_file_name, render_report_csv};
use tidbok_core::report::{account_summary, category_share, category_summary};
use tidbok_core::{Config, DateRange, ReportService, ReportType, SampleReportProvider};

#[derive(Subcommand)]
pub enum ReportAction {
    /// Fetch and display a report
    Show {
        /// Report type: basSummary or categoryBreakdown
        #[arg(long, default_value = "basSummary")]
        report_type: ReportType,
        /// Range start (YYYY-MM-DD, default first of current month)
        #[arg(long)]
        start: Option<NaiveDate>,
        /// Range end (YYYY-MM-DD, default today)
        #[arg(long)]
        end: Option<NaiveDate>,
    },
    /// Fetch a report and write it as a CSV file
    Export {
        /// Report type: basSummary or categoryBreakdown
        #[arg(long, default_value = "basSummary")]
        report_type: ReportType,
        /// Output directory (default current directory)
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
}

fn resolve_range(start: Option<NaiveDate>, end: Option<NaiveDate>) -> DateRange {
    let default = DateRange::month_to_date(Utc::now().date_naive());
    DateRange::new(start.unwrap_or(default.start), end.unwrap_or(default.end))
}

pub fn run(action: ReportAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let provider =
        SampleReportProvider::with_delay(Duration::from_millis(config.report.fetch_delay_ms));
    let mut service = ReportService::new(provider);
    let runtime = tokio::runtime::Runtime::new()?;

    match action {
        ReportAction::Show {
            report_type,
            start,
            end,
        } => {
            let range = resolve_range(start, end);
            let dataset = runtime.block_on(service.refresh(report_type, &range))?;

            match report_type {
                ReportType::BasSummary => {
                    let rows = account_summary(dataset);
                    println!("{}", serde_json::to_string_pretty(&rows)?);
                }
                ReportType::CategoryBreakdown => {
                    let rows = category_summary(dataset);
                    for row in &rows {
                        let share = category_share(row.total_hours, dataset.total_hours);
                        println!(
                            "{:<16} {:>6.1}h {:>5.1}%",
                            row.category, row.total_hours, share
                        );
                    }
                }
            }
            println!("Total hours: {}", dataset.total_hours);
        }
        ReportAction::Export {
            report_type,
            out_dir,
        } => {
            let range = resolve_range(None, None);
            let dataset = runtime.block_on(service.refresh(report_type, &range))?;
            let csv = render_report_csv(report_type, dataset)?;
            let path = out_dir.join(export_file_name(report_type, Utc::now().date_naive()));
            std::fs::write(&path, csv)?;
            println!("Wrote {}", path.display());
        }
    }
    Ok(())
}
