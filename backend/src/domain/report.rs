//! Report orchestration: one sheet load + aggregation per render cycle.

use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use log::info;

use crate::domain::aggregation::{aggregate, ReportSnapshot};
use crate::storage::LedgerStore;

/// The fixed reporting range, inclusive on both ends.
///
/// This is a constant of the report, not configurable input.
pub fn report_range() -> (NaiveDate, NaiveDate) {
    (
        NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
        NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
    )
}

/// The (month, year) pairs covered by the reporting range, ascending
pub fn report_months() -> Vec<(u32, u32)> {
    let (start, end) = report_range();
    let mut months = Vec::new();
    let mut month = start.month();
    let mut year = start.year() as u32;
    loop {
        months.push((month, year));
        if month == end.month() && year == end.year() as u32 {
            break;
        }
        if month == 12 {
            month = 1;
            year += 1;
        } else {
            month += 1;
        }
    }
    months
}

/// Report service that loads the sheet and produces the per-cycle snapshot
#[derive(Clone)]
pub struct ReportService {
    ledger: LedgerStore,
}

impl ReportService {
    pub fn new(ledger: LedgerStore) -> Self {
        Self { ledger }
    }

    /// Load the sheet and aggregate it over the reporting range.
    ///
    /// The sheet is re-read in full on every call; the returned snapshot is
    /// never mutated, only discarded when the cycle ends. An unreadable sheet
    /// is the one fatal failure of the report.
    pub fn snapshot(&self) -> Result<ReportSnapshot> {
        let records = self.ledger.load()?;
        info!("📊 REPORT: loaded {} transactions from sheet", records.len());
        Ok(aggregate(&records, report_range()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_range_is_the_fixed_quarter() {
        let (start, end) = report_range();
        assert_eq!(start, NaiveDate::from_ymd_opt(2025, 4, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2025, 6, 30).unwrap());
    }

    #[test]
    fn test_report_months() {
        assert_eq!(report_months(), vec![(4, 2025), (5, 2025), (6, 2025)]);
    }
}
