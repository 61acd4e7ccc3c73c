//! Report view state with serialized fetches.
//!
//! The report view must never let a second overlapping fetch corrupt the
//! displayed data. Fetches are serialized cancel-and-replace: `begin`
//! hands out a generation ticket and every newer `begin` invalidates the
//! older one, so only the most recent fetch may land its result.

use tracing::debug;

use crate::error::ReportError;

use super::{DateRange, ReportDataset, ReportProvider, ReportType};

/// Proof that a fetch was started; carries the generation it must still
/// match at apply time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

/// Owns the currently displayed dataset and the loading flag.
#[derive(Debug)]
pub struct ReportService<P> {
    provider: P,
    generation: u64,
    loading: bool,
    data: Option<ReportDataset>,
}

impl<P> ReportService<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            generation: 0,
            loading: false,
            data: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn data(&self) -> Option<&ReportDataset> {
        self.data.as_ref()
    }

    /// Start a fetch: bumps the generation (invalidating any in-flight
    /// ticket) and enters the loading state.
    pub fn begin(&mut self) -> FetchTicket {
        self.generation += 1;
        self.loading = true;
        FetchTicket {
            generation: self.generation,
        }
    }

    /// Land a fetch result. Returns false and changes nothing when the
    /// ticket is stale (a newer fetch began in the meantime).
    pub fn apply(&mut self, ticket: FetchTicket, dataset: ReportDataset) -> bool {
        if ticket.generation != self.generation {
            debug!(
                ticket = ticket.generation,
                current = self.generation,
                "dropping stale report fetch result"
            );
            return false;
        }
        self.data = Some(dataset);
        self.loading = false;
        true
    }

    /// Record a failed fetch: leaves the displayed data untouched but
    /// clears the loading state if the ticket is still current.
    pub fn fail(&mut self, ticket: FetchTicket) {
        if ticket.generation == self.generation {
            self.loading = false;
        }
    }
}

impl<P: ReportProvider> ReportService<P> {
    /// Convenience: begin, fetch from the provider, apply. Returns the
    /// freshly displayed dataset.
    pub async fn refresh(
        &mut self,
        report_type: ReportType,
        range: &DateRange,
    ) -> Result<&ReportDataset, ReportError> {
        let ticket = self.begin();
        match self.provider.fetch(report_type, range).await {
            Ok(dataset) => {
                self.apply(ticket, dataset);
                // apply cannot be stale here: &mut self was held across
                // the await, so no newer begin() could run.
                Ok(self
                    .data
                    .as_ref()
                    .unwrap_or_else(|| unreachable!("dataset was just applied")))
            }
            Err(err) => {
                self.fail(ticket);
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{sample_dataset, SampleReportProvider};
    use chrono::NaiveDate;
    use std::time::Duration;

    fn range() -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 24).unwrap(),
        )
    }

    #[test]
    fn begin_sets_loading() {
        let mut service = ReportService::new(SampleReportProvider::new());
        assert!(!service.is_loading());
        let _ticket = service.begin();
        assert!(service.is_loading());
        assert!(service.data().is_none());
    }

    #[test]
    fn stale_ticket_result_is_dropped() {
        let mut service = ReportService::new(SampleReportProvider::new());
        let first = service.begin();
        let second = service.begin();

        // The slow first fetch resolves after a newer fetch began.
        assert!(!service.apply(first, sample_dataset()));
        assert!(service.data().is_none());
        assert!(service.is_loading());

        assert!(service.apply(second, sample_dataset()));
        assert!(!service.is_loading());
        assert!(service.data().is_some());
    }

    #[test]
    fn fail_clears_loading_only_for_current_ticket() {
        let mut service = ReportService::new(SampleReportProvider::new());
        let first = service.begin();
        let second = service.begin();

        service.fail(first);
        assert!(service.is_loading());
        service.fail(second);
        assert!(!service.is_loading());
    }

    #[tokio::test]
    async fn refresh_lands_the_sample_dataset() {
        let provider = SampleReportProvider::with_delay(Duration::ZERO);
        let mut service = ReportService::new(provider);
        let data = service
            .refresh(ReportType::BasSummary, &range())
            .await
            .unwrap();
        assert_eq!(data.accounts.len(), 5);
        assert!(!service.is_loading());
    }
}
