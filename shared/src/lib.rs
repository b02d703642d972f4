use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of calendar cell for explicit rendering logic
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CalendarDayKind {
    /// Padding cell belonging to an adjacent month (grid alignment)
    Blank,
    /// In-month day with no recorded transactions
    Empty,
    /// In-month day with at least one recorded transaction
    Active,
}

/// A single cell of the calendar grid
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarDay {
    /// Day of month, or 0 for blank padding cells
    pub day: u32,
    /// Number of transactions recorded on this day (unparseable amounts included)
    pub count: usize,
    /// Sum of the parseable amounts recorded on this day
    pub total_amount: f64,
    pub kind: CalendarDayKind,
}

impl CalendarDay {
    pub fn blank() -> Self {
        Self {
            day: 0,
            count: 0,
            total_amount: 0.0,
            kind: CalendarDayKind::Blank,
        }
    }

    pub fn empty(day: u32) -> Self {
        Self {
            day,
            count: 0,
            total_amount: 0.0,
            kind: CalendarDayKind::Empty,
        }
    }

    pub fn active(day: u32, total_amount: f64, count: usize) -> Self {
        Self {
            day,
            count,
            total_amount,
            kind: CalendarDayKind::Active,
        }
    }
}

/// A calendar month rendered as whole 7-cell weeks (Monday first)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarMonth {
    pub month: u32,
    pub year: u32,
    /// Human-readable month name, e.g. "April"
    pub month_name: String,
    /// Flat cell list; always a multiple of 7 entries
    pub days: Vec<CalendarDay>,
}

/// The fixed set of months covered by the report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportMonthsResponse {
    pub months: Vec<CalendarMonth>,
}

/// One row of the coverage summary table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummaryRow {
    /// Formatted as DD-Mon-YYYY, e.g. "05-Apr-2025"
    pub date: String,
    pub transactions: usize,
    /// Currency-formatted day total, e.g. "$1,234"
    pub total_amount: String,
    /// Comma-joined file references recorded on this day
    pub files: String,
}

/// Coverage summary for the full reporting range
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoverageSummary {
    pub rows: Vec<SummaryRow>,
    pub recorded_days: usize,
    pub missing_days: usize,
    pub total_days: usize,
    /// Missing dates ascending, formatted as DD-Mon-YYYY
    pub missing_dates: Vec<String>,
    /// Grand total over all parseable in-range amounts, e.g. "$12,345.67"
    pub total_amount: String,
}

/// Receipt image resolution for one transaction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReceiptRef {
    /// Exact filename looked up in the receipt directory, e.g. "inv-0042.jpg"
    pub filename: String,
    pub available: bool,
}

/// One transaction entry in the day detail view
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayDetailItem {
    /// None when the source amount failed to parse
    pub amount: Option<f64>,
    /// Currency-formatted amount, absent for unparseable amounts
    pub formatted_amount: Option<String>,
    pub file_reference: Option<String>,
    pub receipt: ReceiptRef,
}

/// Drill-down view for a single date
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayDetail {
    pub date: NaiveDate,
    /// Formatted as "05 Apr 2025"
    pub formatted_date: String,
    pub items: Vec<DayDetailItem>,
    /// Informational message when the date has no records; not an error
    pub message: Option<String>,
}

/// Request to select a date (the "day selected" event from an Active cell)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectDayRequest {
    pub date: NaiveDate,
}

/// Response after selecting a date
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectDayResponse {
    pub selected_date: NaiveDate,
    pub success_message: String,
}

/// The currently selected date, if any
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectedDayResponse {
    pub selected_date: Option<NaiveDate>,
}

/// CSV export payload returned to the caller
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExportDataResponse {
    pub csv_content: String,
    pub filename: String,
    pub row_count: usize,
}

/// Request to write the export CSV to disk
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExportToPathRequest {
    /// Target directory; falls back to the Documents folder when absent
    pub custom_path: Option<String>,
}

/// Response after writing the export CSV to disk
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExportToPathResponse {
    pub success: bool,
    pub message: String,
    pub file_path: String,
    pub row_count: usize,
}

/// Response after invalidating the receipt filename cache
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RefreshReceiptsResponse {
    pub success_message: String,
    /// Number of files present in the receipt directory after the refresh
    pub available_files: usize,
}
