//! Month calendar grid construction.
//!
//! This module builds the day cells rendered by calendar widgets: the trailing
//! days of the previous month needed to align the 1st under its weekday column,
//! followed by every day of the month itself.
//!
//! Months are zero-based throughout (0 is January, 11 is December), matching
//! the calendar widgets that consume the grid.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};

use crate::models::{CalendarDay, CalendarMonth};

/// Number of days in a month, or `None` for an invalid year/month.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::days_in_month;
///
/// assert_eq!(days_in_month(2024, 1), Some(29)); // February
/// assert_eq!(days_in_month(2025, 1), Some(28));
/// assert_eq!(days_in_month(2025, 12), None);
/// ```
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let current = CalendarMonth::new(year, month);
    let first = current.first_day()?;
    let next_first = shift_month(current, 1).first_day()?;
    u32::try_from((next_first - first).num_days()).ok()
}

/// Weekday index (0 = Sunday) of the first day of a zero-based month.
pub fn first_weekday(year: i32, month: u32) -> Option<u32> {
    CalendarMonth::new(year, month)
        .first_day()
        .map(|d| d.weekday().num_days_from_sunday())
}

/// Moves a month forward or backward, wrapping across years.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::shift_month;
/// use attendance_engine::models::CalendarMonth;
///
/// assert_eq!(shift_month(CalendarMonth::new(2026, 0), -1), CalendarMonth::new(2025, 11));
/// assert_eq!(shift_month(CalendarMonth::new(2025, 11), 1), CalendarMonth::new(2026, 0));
/// ```
pub fn shift_month(month: CalendarMonth, delta: i32) -> CalendarMonth {
    let index = i64::from(month.year) * 12 + i64::from(month.month) + i64::from(delta);
    CalendarMonth {
        year: i32::try_from(index.div_euclid(12)).unwrap_or(month.year),
        month: u32::try_from(index.rem_euclid(12)).unwrap_or(0),
    }
}

/// Builds the day cells for a month calendar.
///
/// Emits `first_weekday` cells for the tail of the previous month
/// (`is_current_month = false`), then one cell per day of the month. No
/// padding is appended after the last day, so the grid length is
/// `first_weekday + days_in_month`. An invalid month yields an empty grid.
///
/// `month` is 0-11. `event_days` holds the day numbers (of this month) that
/// have events; `today` marks at most one cell.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::build_grid;
/// use chrono::NaiveDate;
/// use std::collections::BTreeSet;
///
/// // February 2024 starts on a Thursday (index 4) and has 29 days
/// let today = NaiveDate::from_ymd_opt(2024, 2, 14).unwrap();
/// let grid = build_grid(2024, 1, &BTreeSet::from([14]), today);
///
/// assert_eq!(grid.len(), 4 + 29);
/// assert_eq!(grid[0].day_number, 28); // Jan 28
/// assert!(!grid[0].is_current_month);
/// assert!(grid[4 + 13].is_today && grid[4 + 13].has_event);
/// ```
pub fn build_grid(
    year: i32,
    month: u32,
    event_days: &BTreeSet<u32>,
    today: NaiveDate,
) -> Vec<CalendarDay> {
    let current = CalendarMonth::new(year, month);
    let (Some(first), Some(day_count)) = (current.first_day(), days_in_month(year, month)) else {
        return Vec::new();
    };
    let lead = first.weekday().num_days_from_sunday();

    let previous = shift_month(current, -1);
    let previous_count = days_in_month(previous.year, previous.month).unwrap_or(31);

    let today_in_month = (today.year() == year && today.month0() == month).then(|| today.day());

    let leading = (previous_count - lead + 1..=previous_count).map(|day_number| CalendarDay {
        day_number,
        is_current_month: false,
        is_today: false,
        has_event: false,
    });

    let current = (1..=day_count).map(|day_number| CalendarDay {
        day_number,
        is_current_month: true,
        is_today: today_in_month == Some(day_number),
        has_event: event_days.contains(&day_number),
    });

    leading.chain(current).collect()
}
