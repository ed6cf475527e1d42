//! Period aggregation of attendance statuses.
//!
//! This module folds classified statuses over a date range into per-employee
//! [`PeriodSummary`] counters and fleet-wide [`SummaryStats`] averages.

use std::collections::BTreeMap;

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use crate::config::ShiftSchedule;
use crate::models::{
    AttendanceRecord, DateRange, DerivedStatus, EmployeeId, PeriodReport, PeriodSummary,
    SummaryStats,
};

use super::time_status::classify;

/// Decimal places used for fleet-wide averages.
pub const AVERAGE_DECIMAL_PLACES: u32 = 1;

/// Aggregates attendance records over an inclusive date range.
///
/// Records are grouped by employee. Only employees with at least one record
/// inside the range are reported. For each of them every date in the range is
/// classified; dates without a record are treated as having no punches, so they
/// count as absent on weekdays. Weekend dates are not counted.
///
/// Counting rules:
/// - `Present` and `Overtime` increment `present_days`
/// - `Late` increments `late_days` (and not `present_days`)
/// - `Absent` increments `absent_days`
/// - `OnLeave` (upstream leave flag) increments `leave_days`
///
/// When several records exist for the same employee and date, the first one
/// in input order is used.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::aggregate;
/// use attendance_engine::config::ShiftSchedule;
/// use attendance_engine::models::{AttendanceRecord, DateRange, EmployeeId};
/// use chrono::{NaiveDate, NaiveTime};
///
/// let monday = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
/// let records = vec![
///     AttendanceRecord::new(EmployeeId::new("1"), monday)
///         .with_times(NaiveTime::from_hms_opt(8, 0, 0), NaiveTime::from_hms_opt(17, 0, 0)),
/// ];
/// let range = DateRange::new(monday, NaiveDate::from_ymd_opt(2026, 1, 18).unwrap());
///
/// let report = aggregate(&records, range, &ShiftSchedule::default());
/// let summary = report.summaries[&EmployeeId::new("1")];
/// assert_eq!(summary.present_days, 1);
/// assert_eq!(summary.absent_days, 4); // Tue-Fri have no record; Sat/Sun are not counted
/// ```
pub fn aggregate(
    records: &[AttendanceRecord],
    range: DateRange,
    schedule: &ShiftSchedule,
) -> PeriodReport {
    let mut by_employee: BTreeMap<&EmployeeId, BTreeMap<chrono::NaiveDate, &AttendanceRecord>> =
        BTreeMap::new();
    let mut employee_names: BTreeMap<EmployeeId, String> = BTreeMap::new();

    for record in records.iter().filter(|r| range.contains(r.date)) {
        let days = by_employee.entry(&record.employee_id).or_default();
        if days.contains_key(&record.date) {
            debug!(
                employee_id = %record.employee_id,
                date = %record.date,
                "Ignoring duplicate attendance record"
            );
            continue;
        }
        days.insert(record.date, record);

        if !record.employee_name.is_empty() {
            employee_names
                .entry(record.employee_id.clone())
                .or_insert_with(|| record.employee_name.clone());
        }
    }

    let summaries: BTreeMap<EmployeeId, PeriodSummary> = by_employee
        .into_iter()
        .map(|(employee_id, days)| {
            let summary = summarize_employee(employee_id, &days, range, schedule);
            (employee_id.clone(), summary)
        })
        .collect();

    let summary_stats = summary_stats(summaries.values());

    debug!(
        from = %range.from,
        to = %range.to,
        employee_count = summaries.len(),
        "Aggregated attendance period"
    );

    PeriodReport {
        range: Some(range),
        summaries,
        employee_names,
        summary_stats,
    }
}

fn summarize_employee(
    employee_id: &EmployeeId,
    days: &BTreeMap<chrono::NaiveDate, &AttendanceRecord>,
    range: DateRange,
    schedule: &ShiftSchedule,
) -> PeriodSummary {
    let mut summary = PeriodSummary::default();

    for date in range.days() {
        let status = match days.get(&date) {
            Some(record) => classify(record, schedule),
            None => classify(&AttendanceRecord::new(employee_id.clone(), date), schedule),
        };

        match status {
            DerivedStatus::Present | DerivedStatus::Overtime => summary.present_days += 1,
            DerivedStatus::Late { .. } => summary.late_days += 1,
            DerivedStatus::Absent => summary.absent_days += 1,
            DerivedStatus::OnLeave => summary.leave_days += 1,
            DerivedStatus::Weekend => {}
        }
    }

    summary
}

/// Computes fleet-wide averages, rounded to one decimal place.
///
/// An empty set of summaries yields all-zero averages.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::summary_stats;
/// use attendance_engine::models::PeriodSummary;
/// use rust_decimal::Decimal;
///
/// let summaries = [
///     PeriodSummary { present_days: 4, late_days: 1, absent_days: 0, leave_days: 0 },
///     PeriodSummary { present_days: 1, late_days: 0, absent_days: 4, leave_days: 0 },
/// ];
/// let stats = summary_stats(summaries.iter());
/// assert_eq!(stats.avg_present_days, Decimal::new(25, 1)); // 2.5
/// assert_eq!(stats.avg_late_days, Decimal::new(5, 1));     // 0.5
///
/// assert_eq!(summary_stats(std::iter::empty()).avg_absent_days, Decimal::ZERO);
/// ```
pub fn summary_stats<'a>(summaries: impl Iterator<Item = &'a PeriodSummary>) -> SummaryStats {
    let mut count: u64 = 0;
    let mut totals = [0u64; 4];

    for summary in summaries {
        count += 1;
        totals[0] += u64::from(summary.present_days);
        totals[1] += u64::from(summary.late_days);
        totals[2] += u64::from(summary.absent_days);
        totals[3] += u64::from(summary.leave_days);
    }

    if count == 0 {
        return SummaryStats::default();
    }

    let average = |total: u64| {
        (Decimal::from(total) / Decimal::from(count))
            .round_dp_with_strategy(AVERAGE_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
    };

    SummaryStats {
        avg_present_days: average(totals[0]),
        avg_late_days: average(totals[1]),
        avg_absent_days: average(totals[2]),
        avg_leave_days: average(totals[3]),
    }
}
