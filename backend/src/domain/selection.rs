//! Selected-date state for the drill-down view.
//!
//! One process-wide single-slot value: selecting a new date discards the
//! previous selection (last write wins), and clearing it returns the detail
//! view to its unselected state. There is no concurrent writer; the mutex
//! only makes the slot shareable across handlers.

use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use log::info;

use crate::domain::report;

/// Single-slot holder for the currently inspected date
#[derive(Clone)]
pub struct SelectionService {
    selected_date: Arc<Mutex<Option<NaiveDate>>>,
}

impl SelectionService {
    pub fn new() -> Self {
        Self {
            selected_date: Arc::new(Mutex::new(None)),
        }
    }

    /// Record a "day selected" event, replacing any previous selection.
    ///
    /// Dates outside the reporting range are rejected; the calendar grid only
    /// emits selection events for in-range Active cells, so a rejection here
    /// means the caller bypassed the grid.
    pub fn select(&self, date: NaiveDate) -> Result<NaiveDate, String> {
        let (start, end) = report::report_range();
        if date < start || date > end {
            return Err(format!(
                "Date {} is outside the reporting range {} - {}",
                date, start, end
            ));
        }

        let mut slot = self.selected_date.lock().unwrap();
        *slot = Some(date);
        info!("📌 SELECTION: selected date set to {}", date);
        Ok(date)
    }

    /// The currently selected date, if any
    pub fn current(&self) -> Option<NaiveDate> {
        *self.selected_date.lock().unwrap()
    }

    /// Clear the selection
    pub fn clear(&self) {
        let mut slot = self.selected_date.lock().unwrap();
        *slot = None;
        info!("📌 SELECTION: selection cleared");
    }
}

impl Default for SelectionService {
    fn default() -> Self {
        Self::new()
    }
}
