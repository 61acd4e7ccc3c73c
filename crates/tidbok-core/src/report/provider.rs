//! Abstract asynchronous report data provider.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::ReportError;

use super::{sample_dataset, DateRange, ReportDataset, ReportType};

/// Default artificial latency of the simulated backend call.
pub const DEFAULT_FETCH_DELAY_MS: u64 = 800;

/// Source of report datasets. The real system would call a backend; the
/// bundled implementation resolves static sample data after a delay.
#[async_trait]
pub trait ReportProvider: Send + Sync {
    async fn fetch(
        &self,
        report_type: ReportType,
        range: &DateRange,
    ) -> Result<ReportDataset, ReportError>;
}

/// Simulated provider: sleeps, then returns [`sample_dataset`]. The
/// report type and date range are accepted but do not filter anything --
/// the sample payload is static.
#[derive(Debug, Clone)]
pub struct SampleReportProvider {
    delay: Duration,
}

impl SampleReportProvider {
    pub fn new() -> Self {
        Self {
            delay: Duration::from_millis(DEFAULT_FETCH_DELAY_MS),
        }
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SampleReportProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReportProvider for SampleReportProvider {
    async fn fetch(
        &self,
        _report_type: ReportType,
        _range: &DateRange,
    ) -> Result<ReportDataset, ReportError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(sample_dataset())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn range() -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 24).unwrap(),
        )
    }

    #[tokio::test]
    async fn sample_provider_resolves_fixed_payload() {
        let provider = SampleReportProvider::with_delay(Duration::ZERO);
        let data = provider
            .fetch(ReportType::BasSummary, &range())
            .await
            .unwrap();
        assert_eq!(data, sample_dataset());
    }

    #[tokio::test]
    async fn both_report_types_share_the_payload() {
        let provider = SampleReportProvider::with_delay(Duration::ZERO);
        let a = provider
            .fetch(ReportType::BasSummary, &range())
            .await
            .unwrap();
        let b = provider
            .fetch(ReportType::CategoryBreakdown, &range())
            .await
            .unwrap();
        assert_eq!(a, b);
    }
}
