//! Transaction sheet reader.
//!
//! The sheet is a delimited file with header columns `Date`, `Amt` and
//! optionally `File`. Header names are matched after trimming incidental
//! whitespace. Rows with an unparseable date are dropped; rows with an
//! unparseable amount are kept with `amount: None` so that they still count
//! toward the day's transactions without contributing to its total.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use chrono::NaiveDate;
use csv::Reader;
use log::warn;
use thiserror::Error;

use crate::domain::models::Transaction;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("failed to read transaction sheet: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse transaction sheet: {0}")]
    Csv(#[from] csv::Error),

    #[error("transaction sheet is missing required column: {0}")]
    MissingColumn(&'static str),
}

/// File-based store for the transaction sheet
#[derive(Clone)]
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read the full sheet into the working set.
    ///
    /// The file is re-read on every call; there is no incremental diffing.
    pub fn load(&self) -> Result<Vec<Transaction>, LedgerError> {
        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        let mut csv_reader = Reader::from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let column = |name: &'static str| -> Option<usize> {
            headers.iter().position(|header| header.trim() == name)
        };
        let date_col = column("Date").ok_or(LedgerError::MissingColumn("Date"))?;
        let amount_col = column("Amt").ok_or(LedgerError::MissingColumn("Amt"))?;
        let file_col = column("File");

        let mut transactions = Vec::new();
        let mut dropped = 0usize;

        for result in csv_reader.records() {
            let record = result?;

            let date = match parse_entry_date(record.get(date_col).unwrap_or("")) {
                Some(date) => date,
                None => {
                    dropped += 1;
                    continue;
                }
            };

            let amount = record
                .get(amount_col)
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .and_then(|value| value.parse::<f64>().ok());

            let file_reference = file_col
                .and_then(|col| record.get(col))
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string);

            transactions.push(Transaction {
                date,
                amount,
                file_reference,
            });
        }

        if dropped > 0 {
            warn!("Dropped {} sheet rows with unparseable dates", dropped);
        }

        Ok(transactions)
    }
}

/// Parse an entry date, discarding any time-of-day component.
///
/// Accepts ISO dates and the datetime forms that show up in exported sheets.
/// Returns None on failure; the caller drops the row.
fn parse_entry_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(datetime) = chrono::NaiveDateTime::parse_from_str(value, format) {
            return Some(datetime.date());
        }
    }
    if let Ok(datetime) = chrono::DateTime::parse_from_rfc3339(value) {
        return Some(datetime.date_naive());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn store_with(content: &str) -> (LedgerStore, TempDir) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("disputed.csv");
        let mut file = File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        (LedgerStore::new(path), dir)
    }

    #[test]
    fn test_load_basic_sheet() {
        let (store, _dir) = store_with(
            "Date,Amt,File\n\
             2025-04-05,100,inv-0042\n\
             2025-04-05,50,inv-0043\n",
        );

        let transactions = store.load().unwrap();
        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions[0].date, date(2025, 4, 5));
        assert_eq!(transactions[0].amount, Some(100.0));
        assert_eq!(transactions[0].file_reference.as_deref(), Some("inv-0042"));
    }

    #[test]
    fn test_headers_are_trimmed() {
        let (store, _dir) = store_with(
            " Date , Amt , File \n\
             2025-04-05,100,inv-0042\n",
        );

        let transactions = store.load().unwrap();
        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].amount, Some(100.0));
    }

    #[test]
    fn test_unparseable_date_drops_row() {
        let (store, _dir) = store_with(
            "Date,Amt,File\n\
             not-a-date,100,a\n\
             2025-04-05,100,b\n",
        );

        let transactions = store.load().unwrap();
        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].file_reference.as_deref(), Some("b"));
    }

    #[test]
    fn test_unparseable_amount_becomes_none() {
        let (store, _dir) = store_with(
            "Date,Amt,File\n\
             2025-04-06,bad,a\n\
             2025-04-06,,b\n",
        );

        let transactions = store.load().unwrap();
        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions[0].amount, None);
        assert_eq!(transactions[1].amount, None);
    }

    #[test]
    fn test_datetime_values_discard_time_of_day() {
        let (store, _dir) = store_with(
            "Date,Amt\n\
             2025-04-05 09:30:00,10\n\
             2025-04-06T12:00:00,20\n\
             2025-04-07T08:00:00+02:00,30\n",
        );

        let transactions = store.load().unwrap();
        assert_eq!(transactions.len(), 3);
        assert_eq!(transactions[0].date, date(2025, 4, 5));
        assert_eq!(transactions[1].date, date(2025, 4, 6));
        assert_eq!(transactions[2].date, date(2025, 4, 7));
    }

    #[test]
    fn test_file_column_is_optional() {
        let (store, _dir) = store_with("Date,Amt\n2025-04-05,100\n");

        let transactions = store.load().unwrap();
        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].file_reference, None);
    }

    #[test]
    fn test_file_values_are_trimmed() {
        let (store, _dir) = store_with("Date,Amt,File\n2025-04-05,100,  inv-0042  \n");

        let transactions = store.load().unwrap();
        assert_eq!(transactions[0].file_reference.as_deref(), Some("inv-0042"));
    }

    #[test]
    fn test_missing_required_column() {
        let (store, _dir) = store_with("Date,File\n2025-04-05,a\n");

        match store.load() {
            Err(LedgerError::MissingColumn(name)) => assert_eq!(name, "Amt"),
            Err(other) => panic!("expected MissingColumn error, got {:?}", other),
            Ok(_) => panic!("expected MissingColumn error, got a loaded sheet"),
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let store = LedgerStore::new(dir.path().join("absent.csv"));
        assert!(matches!(store.load(), Err(LedgerError::Io(_))));
    }
}
