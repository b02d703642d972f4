//! Day drill-down view: the transactions of one date with their receipts.

use chrono::NaiveDate;
use log::warn;
use shared::{DayDetail, DayDetailItem, ReceiptRef};

use crate::domain::aggregation::ReportSnapshot;
use crate::domain::money;
use crate::storage::ReceiptStore;

/// Detail service that resolves one date's transactions and receipt images
#[derive(Clone)]
pub struct DetailService;

impl DetailService {
    pub fn new() -> Self {
        Self
    }

    /// Build the detail view for `date`.
    ///
    /// A date with no aggregate entry is an empty-result state, not an error:
    /// the view carries an informational message and no items. Receipt images
    /// that cannot be found are flagged per item instead of failing the view.
    pub fn day_detail(
        &self,
        snapshot: &ReportSnapshot,
        date: NaiveDate,
        receipts: &ReceiptStore,
    ) -> DayDetail {
        let formatted_date = date.format("%d %b %Y").to_string();

        let aggregate = match snapshot.by_date.get(&date) {
            Some(aggregate) => aggregate,
            None => {
                return DayDetail {
                    date,
                    formatted_date,
                    items: Vec::new(),
                    message: Some("No records found for this date".to_string()),
                }
            }
        };

        let items = aggregate
            .transactions
            .iter()
            .map(|tx| {
                let filename = tx.receipt_filename();
                let available = receipts.contains(&filename);
                if !available {
                    warn!("🧾 DETAIL: receipt image not found: {}", filename);
                }
                DayDetailItem {
                    amount: tx.amount,
                    formatted_amount: tx.amount.map(money::format_cents),
                    file_reference: tx.file_reference.clone(),
                    receipt: ReceiptRef {
                        filename,
                        available,
                    },
                }
            })
            .collect();

        DayDetail {
            date,
            formatted_date,
            items,
            message: None,
        }
    }
}

impl Default for DetailService {
    fn default() -> Self {
        Self::new()
    }
}
