//! Date range and period summary models.
//!
//! This module contains the [`DateRange`] used to select a reporting period and
//! the [`PeriodSummary`] / [`SummaryStats`] types produced by aggregation.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::EmployeeId;

/// An inclusive range of calendar dates.
///
/// # Example
///
/// ```
/// use attendance_engine::models::DateRange;
/// use chrono::NaiveDate;
///
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 18).unwrap(),
/// );
///
/// assert_eq!(range.len_days(), 7);
/// assert!(range.contains(NaiveDate::from_ymd_opt(2026, 1, 18).unwrap()));
/// assert!(!range.contains(NaiveDate::from_ymd_opt(2026, 1, 19).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First date of the range (inclusive).
    pub from: NaiveDate,
    /// Last date of the range (inclusive).
    pub to: NaiveDate,
}

impl DateRange {
    /// Creates a new inclusive range.
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    /// Checks if a date falls within the range (inclusive of both ends).
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.from && date <= self.to
    }

    /// Number of days in the range; zero when `from` is after `to`.
    pub fn len_days(&self) -> u32 {
        let days = (self.to - self.from).num_days() + 1;
        u32::try_from(days).unwrap_or(0)
    }

    /// Iterates every date in the range in ascending order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        let end = self.to;
        self.from
            .iter_days()
            .take_while(move |date| *date <= end)
    }
}

/// Per-employee day counts over a date range.
///
/// Late days are not counted as present days, and weekend dates are not
/// counted at all, so the counters need not sum to the range length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodSummary {
    /// Days classified `Present` or `Overtime`.
    pub present_days: u32,
    /// Days classified `Late`.
    pub late_days: u32,
    /// Weekdays with no clock-in.
    pub absent_days: u32,
    /// Weekdays flagged as leave upstream.
    pub leave_days: u32,
}

/// Fleet-wide averages of the per-employee counters.
///
/// Each average is rounded to one decimal place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Mean present days per employee.
    pub avg_present_days: Decimal,
    /// Mean late days per employee.
    pub avg_late_days: Decimal,
    /// Mean absent days per employee.
    pub avg_absent_days: Decimal,
    /// Mean leave days per employee.
    pub avg_leave_days: Decimal,
}

/// The full result of aggregating attendance over a period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodReport {
    /// The period that was aggregated.
    pub range: Option<DateRange>,
    /// One summary per employee with at least one record in range, ordered by id.
    pub summaries: BTreeMap<EmployeeId, PeriodSummary>,
    /// Display names seen for each employee.
    pub employee_names: BTreeMap<EmployeeId, String>,
    /// Fleet-wide averages.
    pub summary_stats: SummaryStats,
}

impl PeriodReport {
    /// Number of employees in the report.
    pub fn employee_count(&self) -> usize {
        self.summaries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_days_iterates_inclusive_range() {
        let range = DateRange::new(make_date("2026-01-30"), make_date("2026-02-02"));
        let days: Vec<NaiveDate> = range.days().collect();
        assert_eq!(
            days,
            vec![
                make_date("2026-01-30"),
                make_date("2026-01-31"),
                make_date("2026-02-01"),
                make_date("2026-02-02"),
            ]
        );
        assert_eq!(range.len_days(), 4);
    }

    #[test]
    fn test_single_day_range() {
        let range = DateRange::new(make_date("2026-01-14"), make_date("2026-01-14"));
        assert_eq!(range.days().count(), 1);
        assert_eq!(range.len_days(), 1);
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let range = DateRange::new(make_date("2026-01-14"), make_date("2026-01-10"));
        assert_eq!(range.days().count(), 0);
        assert_eq!(range.len_days(), 0);
        assert!(!range.contains(make_date("2026-01-12")));
    }

    #[test]
    fn test_summary_stats_serialize_as_strings() {
        let stats = SummaryStats {
            avg_present_days: Decimal::new(45, 1),
            ..SummaryStats::default()
        };
        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"avg_present_days\":\"4.5\""));
    }
}
