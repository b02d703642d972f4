//! Coverage summary: recorded vs. missing days over the reporting range.

use log::info;
use shared::{CoverageSummary, SummaryRow};

use crate::domain::aggregation::ReportSnapshot;
use crate::domain::money;

/// Summary service that builds the coverage table from a snapshot
#[derive(Clone)]
pub struct SummaryService;

impl SummaryService {
    pub fn new() -> Self {
        Self
    }

    /// Build the summary view: one row per recorded date ascending, plus the
    /// coverage counts, the missing-date list, and the grand total.
    pub fn build(&self, snapshot: &ReportSnapshot) -> CoverageSummary {
        let rows: Vec<SummaryRow> = snapshot
            .by_date
            .values()
            .map(|aggregate| SummaryRow {
                date: aggregate.date.format("%d-%b-%Y").to_string(),
                transactions: aggregate.count(),
                total_amount: money::format_whole(aggregate.total_amount()),
                files: aggregate.file_references().join(", "),
            })
            .collect();

        let coverage = &snapshot.coverage;
        let recorded_days = coverage.recorded_dates.len();
        let missing_days = coverage.missing_dates.len();

        info!(
            "📊 SUMMARY: {} recorded / {} total days",
            recorded_days,
            recorded_days + missing_days
        );

        CoverageSummary {
            rows,
            recorded_days,
            missing_days,
            total_days: recorded_days + missing_days,
            missing_dates: coverage
                .missing_dates
                .iter()
                .map(|date| date.format("%d-%b-%Y").to_string())
                .collect(),
            total_amount: money::format_cents(snapshot.total_amount()),
        }
    }
}

impl Default for SummaryService {
    fn default() -> Self {
        Self::new()
    }
}
