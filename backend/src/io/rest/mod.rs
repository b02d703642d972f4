pub mod calendar_apis;
pub mod day_apis;
pub mod export_apis;
pub mod receipt_apis;
pub mod selection_apis;
pub mod summary_apis;
