//! Domain model for one financial record from the transaction sheet.

use chrono::NaiveDate;

/// A single transaction row from the sheet.
///
/// Rows whose date failed to parse never become a `Transaction`; rows whose
/// amount failed to parse keep `amount: None` rather than defaulting to zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub date: NaiveDate,
    pub amount: Option<f64>,
    /// Trimmed receipt file reference from the `File` column, if any
    pub file_reference: Option<String>,
}

impl Transaction {
    /// Receipt image filename for this transaction.
    ///
    /// Transactions without a file reference resolve to "unknown.jpg", which
    /// the receipt directory will report as unavailable.
    pub fn receipt_filename(&self) -> String {
        format!("{}.jpg", self.file_reference.as_deref().unwrap_or("unknown"))
    }
}
