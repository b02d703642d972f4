//! Daily aggregation and date-coverage reconciliation.
//!
//! This module is the core of the report: it filters the working set to the
//! reporting range, groups transactions by calendar date, and classifies every
//! date in the range as recorded or missing. All presenters (calendar months,
//! summary table, day detail) are read-only consumers of one
//! [`ReportSnapshot`] produced here per render cycle.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::domain::models::Transaction;

/// Per-date rollup of the transactions recorded on that date.
///
/// `count` includes transactions whose amount failed to parse; `total_amount`
/// sums only the parseable subset. A date whose rows all carry unparseable
/// amounts therefore shows `count > 0` with a zero total.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyAggregate {
    pub date: NaiveDate,
    /// Transactions in source order
    pub transactions: Vec<Transaction>,
}

impl DailyAggregate {
    pub fn count(&self) -> usize {
        self.transactions.len()
    }

    pub fn total_amount(&self) -> f64 {
        self.transactions.iter().filter_map(|tx| tx.amount).sum()
    }

    /// File references recorded on this date, in source order
    pub fn file_references(&self) -> Vec<&str> {
        self.transactions
            .iter()
            .filter_map(|tx| tx.file_reference.as_deref())
            .collect()
    }
}

/// Classification of every date in the reporting range.
///
/// Invariant: `recorded_dates ∪ missing_dates` is exactly the full range and
/// the two sets are disjoint. Both lists are ascending.
#[derive(Debug, Clone, PartialEq)]
pub struct DateCoverage {
    pub recorded_dates: Vec<NaiveDate>,
    pub missing_dates: Vec<NaiveDate>,
}

/// Immutable aggregation output for one render cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSnapshot {
    pub by_date: BTreeMap<NaiveDate, DailyAggregate>,
    pub coverage: DateCoverage,
}

impl ReportSnapshot {
    /// Grand total over every parseable in-range amount
    pub fn total_amount(&self) -> f64 {
        self.by_date.values().map(DailyAggregate::total_amount).sum()
    }
}

/// Enumerate every date of `[start, end]`, inclusive on both ends.
pub fn enumerate_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let mut current = start;
    while current <= end {
        dates.push(current);
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }
    dates
}

/// Group `records` by date over `range` and reconcile coverage.
///
/// Records outside the inclusive range are dropped before grouping. Grouping
/// is stable: transactions for a date keep their relative source order. An
/// empty input is not an error; it yields an empty mapping and a missing set
/// equal to the full range.
pub fn aggregate(records: &[Transaction], range: (NaiveDate, NaiveDate)) -> ReportSnapshot {
    let (start, end) = range;
    let mut by_date: BTreeMap<NaiveDate, DailyAggregate> = BTreeMap::new();

    for tx in records {
        if tx.date < start || tx.date > end {
            continue;
        }
        by_date
            .entry(tx.date)
            .or_insert_with(|| DailyAggregate {
                date: tx.date,
                transactions: Vec::new(),
            })
            .transactions
            .push(tx.clone());
    }

    let recorded_dates: Vec<NaiveDate> = by_date.keys().copied().collect();
    let missing_dates: Vec<NaiveDate> = enumerate_range(start, end)
        .into_iter()
        .filter(|date| !by_date.contains_key(date))
        .collect();

    log::info!(
        "📊 AGGREGATE: {} recorded days, {} missing days over {} - {}",
        recorded_dates.len(),
        missing_dates.len(),
        start,
        end
    );

    ReportSnapshot {
        by_date,
        coverage: DateCoverage {
            recorded_dates,
            missing_dates,
        },
    }
}
