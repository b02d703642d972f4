//! Calendar presentation logic for the coverage dashboard.
//!
//! This module contains all business logic related to laying out a month of
//! daily aggregates as a calendar grid. The API layer should only handle
//! transport concerns; date math and cell classification live here.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use log::debug;
use shared::{CalendarDay, CalendarMonth};

use crate::domain::aggregation::DailyAggregate;

/// Calendar service that renders months of the report as cell grids
#[derive(Clone)]
pub struct CalendarService;

impl CalendarService {
    pub fn new() -> Self {
        Self
    }

    /// Render one month as a grid of whole 7-cell weeks.
    ///
    /// The grid starts on Monday. Leading and trailing cells that belong to
    /// adjacent months are emitted as blanks so that the cell count is always
    /// a multiple of 7. In-month days become Empty or Active cells depending
    /// on whether an aggregate entry exists for that date.
    pub fn generate_calendar_month(
        &self,
        month: u32,
        year: u32,
        aggregates: &BTreeMap<NaiveDate, DailyAggregate>,
    ) -> CalendarMonth {
        let days_in_month = self.days_in_month(month, year);
        let leading_blanks = self.first_weekday_offset(month, year);

        debug!(
            "🗓️ CALENDAR: Generating {}/{} - {} days, {} leading blanks",
            month, year, days_in_month, leading_blanks
        );

        let mut days = Vec::new();
        for _ in 0..leading_blanks {
            days.push(CalendarDay::blank());
        }

        for day in 1..=days_in_month {
            // Valid by construction: day never exceeds days_in_month
            let date = NaiveDate::from_ymd_opt(year as i32, month, day).unwrap();
            match aggregates.get(&date) {
                Some(aggregate) => days.push(CalendarDay::active(
                    day,
                    aggregate.total_amount(),
                    aggregate.count(),
                )),
                None => days.push(CalendarDay::empty(day)),
            }
        }

        while days.len() % 7 != 0 {
            days.push(CalendarDay::blank());
        }

        CalendarMonth {
            month,
            year,
            month_name: self.month_name(month).to_string(),
            days,
        }
    }

    /// Get the number of days in a given month and year
    pub fn days_in_month(&self, month: u32, year: u32) -> u32 {
        match month {
            2 => {
                if self.is_leap_year(year) {
                    29
                } else {
                    28
                }
            }
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    /// Check if a year is a leap year
    pub fn is_leap_year(&self, year: u32) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    /// Offset of the month's first day from Monday (0 = Monday, 6 = Sunday)
    pub fn first_weekday_offset(&self, month: u32, year: u32) -> u32 {
        match NaiveDate::from_ymd_opt(year as i32, month, 1) {
            Some(date) => date.weekday().num_days_from_monday(),
            None => 0,
        }
    }

    /// Get the human-readable name for a month number
    pub fn month_name(&self, month: u32) -> &'static str {
        match month {
            1 => "January",
            2 => "February",
            3 => "March",
            4 => "April",
            5 => "May",
            6 => "June",
            7 => "July",
            8 => "August",
            9 => "September",
            10 => "October",
            11 => "November",
            12 => "December",
            _ => "Invalid Month",
        }
    }
}

impl Default for CalendarService {
    fn default() -> Self {
        Self::new()
    }
}
