//! Calendar grid cell model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One cell of a month calendar grid.
///
/// Created fresh per grid build and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    /// Day of month shown in the cell.
    pub day_number: u32,
    /// False for the leading days borrowed from the previous month.
    pub is_current_month: bool,
    /// True only for the cell matching today's date.
    pub is_today: bool,
    /// True when the events source reported at least one event that day.
    pub has_event: bool,
}

/// A (year, month) pair used for calendar navigation.
///
/// Months are zero-based: 0 is January and 11 is December.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CalendarMonth {
    /// The calendar year.
    pub year: i32,
    /// The month, 0-11.
    pub month: u32,
}

impl CalendarMonth {
    /// Creates a new calendar month.
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// The chrono month number (1-12), or `None` when `month` is out of range.
    pub fn month1(&self) -> Option<u32> {
        (self.month < 12).then_some(self.month + 1)
    }

    /// The first day of the month.
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month1()?, 1)
    }
}
