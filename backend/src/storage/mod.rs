//! Storage layer: the transaction sheet file and the receipt image directory.

pub mod ledger;
pub mod receipts;

#[cfg(test)]
pub mod test_utils;

pub use ledger::{LedgerError, LedgerStore};
pub use receipts::ReceiptStore;
