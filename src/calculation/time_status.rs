//! Attendance status classification.
//!
//! This module maps a raw attendance record (punches, overtime, shift type and
//! date) to the single [`DerivedStatus`] label shown for that employee and day.

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};

use crate::config::{ShiftRule, ShiftSchedule};
use crate::models::{AttendanceRecord, DerivedStatus};

/// Time formats accepted from attendance sources, tried in order.
const TIME_FORMATS: [&str; 5] = [
    "%H:%M:%S%.f",
    "%H:%M:%S",
    "%H:%M",
    "%I:%M %p",
    "%I:%M:%S %p",
];

/// The value some sources send in place of a missing punch.
pub const MISSING_PUNCH: NaiveTime = NaiveTime::MIN;

const DAY_SECONDS: i64 = 24 * 60 * 60;

/// Arrivals up to this long before the work start count as early for that
/// shift rather than late for the previous one.
const EARLY_WINDOW_SECONDS: i64 = DAY_SECONDS / 2;

/// Returns true if the date falls on a Saturday or Sunday.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::is_weekend;
/// use chrono::NaiveDate;
///
/// assert!(is_weekend(NaiveDate::from_ymd_opt(2026, 1, 17).unwrap())); // Saturday
/// assert!(!is_weekend(NaiveDate::from_ymd_opt(2026, 1, 16).unwrap())); // Friday
/// ```
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Parses a time-of-day string from an attendance source.
///
/// Returns `None` for blank strings, `null` and anything unparseable.
/// Midnight parses as a real time; callers decide whether it stands for a
/// missing punch (see [`MISSING_PUNCH`]).
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::parse_time_of_day;
/// use chrono::NaiveTime;
///
/// assert_eq!(parse_time_of_day("08:11"), NaiveTime::from_hms_opt(8, 11, 0));
/// assert_eq!(parse_time_of_day("05:30 PM"), NaiveTime::from_hms_opt(17, 30, 0));
/// assert_eq!(parse_time_of_day("not a time"), None);
/// ```
pub fn parse_time_of_day(raw: &str) -> Option<NaiveTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("null") {
        return None;
    }

    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(trimmed, format).ok())
}

/// Minutes late for a clock-in under a shift rule.
///
/// Arrival at or before the end of the grace window is on time (zero).
/// Otherwise the minutes are counted from the work start, not from the end of
/// the grace window, and partial minutes are dropped.
///
/// Time is measured forward from the work start across midnight, so a 23:55
/// start with 10 minutes of grace still accepts 00:05. Arrivals up to twelve
/// hours before the work start are early and never late.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::late_minutes;
/// use attendance_engine::config::ShiftSchedule;
/// use chrono::NaiveTime;
///
/// let rule = ShiftSchedule::default().day;
/// assert_eq!(late_minutes(NaiveTime::from_hms_opt(8, 10, 0).unwrap(), &rule), 0);
/// assert_eq!(late_minutes(NaiveTime::from_hms_opt(8, 11, 0).unwrap(), &rule), 11);
/// ```
pub fn late_minutes(time_in: NaiveTime, rule: &ShiftRule) -> u32 {
    let mut elapsed = (time_in - rule.work_start).num_seconds();
    if elapsed < -EARLY_WINDOW_SECONDS {
        elapsed += DAY_SECONDS;
    }
    if elapsed <= i64::from(rule.grace_minutes) * 60 {
        return 0;
    }
    u32::try_from(elapsed / 60).unwrap_or(0)
}

/// Classifies an attendance record into its display status.
///
/// Rules apply in strict precedence order:
///
/// 1. Saturday or Sunday is `Weekend`, whatever the punches say.
/// 2. A weekday flagged as leave upstream is `OnLeave`.
/// 3. No clock-in is `Absent`.
/// 4. Clocked in but not out: `Late` if past the grace window, else `Present`.
/// 5. Clocked in and out: `Late` if past the grace window (overtime is not
///    reflected in the label then), else `Overtime` when at least one whole
///    hour of overtime was worked, else `Present`.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::classify;
/// use attendance_engine::config::ShiftSchedule;
/// use attendance_engine::models::{AttendanceRecord, DerivedStatus, EmployeeId};
/// use chrono::{NaiveDate, NaiveTime};
///
/// // 2026-01-14 is a Wednesday
/// let record = AttendanceRecord::new(EmployeeId::new("7"), NaiveDate::from_ymd_opt(2026, 1, 14).unwrap())
///     .with_times(NaiveTime::from_hms_opt(8, 30, 0), NaiveTime::from_hms_opt(18, 0, 0))
///     .with_overtime_minutes(60);
///
/// assert_eq!(classify(&record, &ShiftSchedule::default()), DerivedStatus::Late { minutes: 30 });
/// ```
pub fn classify(record: &AttendanceRecord, schedule: &ShiftSchedule) -> DerivedStatus {
    if is_weekend(record.date) {
        return DerivedStatus::Weekend;
    }

    if record.on_leave {
        return DerivedStatus::OnLeave;
    }

    let Some(time_in) = record.time_in else {
        return DerivedStatus::Absent;
    };

    let late = late_minutes(time_in, schedule.rule_for(record.shift_type));
    if late > 0 {
        return DerivedStatus::Late { minutes: late };
    }

    if record.time_out.is_some() && record.overtime_hours() > 0 {
        return DerivedStatus::Overtime;
    }

    DerivedStatus::Present
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EmployeeId, ShiftType};
    use proptest::prelude::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn t(s: &str) -> Option<NaiveTime> {
        parse_time_of_day(s)
    }

    // 2026-01-14 is a Wednesday
    fn weekday_record(time_in: &str, time_out: &str) -> AttendanceRecord {
        AttendanceRecord::new(EmployeeId::new("emp_001"), make_date("2026-01-14"))
            .with_times(t(time_in), t(time_out))
    }

    fn classify_default(record: &AttendanceRecord) -> DerivedStatus {
        classify(record, &ShiftSchedule::default())
    }

    // ==========================================================================
    // Weekend precedence
    // ==========================================================================
    #[test]
    fn test_saturday_is_weekend_even_with_punches() {
        let record = AttendanceRecord::new(EmployeeId::new("emp_001"), make_date("2026-01-17"))
            .with_times(t("09:45"), t("19:00"))
            .with_overtime_minutes(120);
        assert_eq!(classify_default(&record), DerivedStatus::Weekend);
    }

    #[test]
    fn test_sunday_is_weekend_even_on_leave() {
        let record =
            AttendanceRecord::new(EmployeeId::new("emp_001"), make_date("2026-01-18")).on_leave();
        assert_eq!(classify_default(&record), DerivedStatus::Weekend);
    }

    // ==========================================================================
    // Absent and leave
    // ==========================================================================
    #[test]
    fn test_weekday_without_time_in_is_absent() {
        let record = weekday_record("", "");
        assert_eq!(classify_default(&record), DerivedStatus::Absent);
    }

    #[test]
    fn test_time_out_without_time_in_is_absent() {
        let record = weekday_record("", "17:00");
        assert_eq!(classify_default(&record), DerivedStatus::Absent);
    }

    #[test]
    fn test_malformed_time_in_fails_open_to_absent() {
        let record = weekday_record("8h05", "17:00");
        assert_eq!(record.time_in, None);
        assert_eq!(classify_default(&record), DerivedStatus::Absent);
    }

    #[test]
    fn test_leave_flag_on_weekday_is_on_leave() {
        let record = weekday_record("", "").on_leave();
        assert_eq!(classify_default(&record), DerivedStatus::OnLeave);
    }

    // ==========================================================================
    // Grace boundary
    // ==========================================================================
    #[test]
    fn test_exactly_at_grace_boundary_is_present() {
        let record = weekday_record("08:10", "17:00");
        assert_eq!(classify_default(&record), DerivedStatus::Present);
    }

    #[test]
    fn test_one_minute_past_grace_counts_from_work_start() {
        let record = weekday_record("08:11", "17:00");
        assert_eq!(classify_default(&record), DerivedStatus::Late { minutes: 11 });
    }

    #[test]
    fn test_seconds_past_grace_are_late_with_floored_minutes() {
        let record = weekday_record("08:10:30", "17:00");
        assert_eq!(classify_default(&record), DerivedStatus::Late { minutes: 10 });
    }

    #[test]
    fn test_early_arrival_is_present() {
        let record = weekday_record("07:15", "17:00");
        assert_eq!(classify_default(&record), DerivedStatus::Present);
    }

    // ==========================================================================
    // Partial shifts
    // ==========================================================================
    #[test]
    fn test_partial_shift_on_time_is_present() {
        let record = weekday_record("07:58", "");
        assert_eq!(classify_default(&record), DerivedStatus::Present);
    }

    #[test]
    fn test_partial_shift_late_is_late() {
        let record = weekday_record("09:02", "");
        assert_eq!(classify_default(&record), DerivedStatus::Late { minutes: 62 });
    }

    #[test]
    fn test_partial_shift_ignores_overtime() {
        let record = weekday_record("08:00", "").with_overtime_minutes(120);
        assert_eq!(classify_default(&record), DerivedStatus::Present);
    }

    // ==========================================================================
    // Overtime
    // ==========================================================================
    #[test]
    fn test_late_takes_precedence_over_overtime() {
        let record = weekday_record("08:30", "18:00").with_overtime_minutes(60);
        assert_eq!(classify_default(&record), DerivedStatus::Late { minutes: 30 });
    }

    #[test]
    fn test_on_time_with_overtime_is_overtime() {
        let record = weekday_record("08:00", "19:00").with_overtime_minutes(120);
        assert_eq!(classify_default(&record), DerivedStatus::Overtime);
    }

    #[test]
    fn test_overtime_under_one_hour_is_present() {
        let record = weekday_record("08:00", "17:45").with_overtime_minutes(45);
        assert_eq!(classify_default(&record), DerivedStatus::Present);
    }

    // ==========================================================================
    // Night shift
    // ==========================================================================
    #[test]
    fn test_night_shift_uses_night_rule() {
        let record = weekday_record("20:05", "").with_shift_type(ShiftType::Night);
        assert_eq!(classify_default(&record), DerivedStatus::Present);

        let record = weekday_record("20:25", "").with_shift_type(ShiftType::Night);
        assert_eq!(classify_default(&record), DerivedStatus::Late { minutes: 25 });
    }

    fn late_night_schedule() -> ShiftSchedule {
        ShiftSchedule {
            night: ShiftRule::new(NaiveTime::from_hms_opt(23, 55, 0).unwrap(), 10),
            ..ShiftSchedule::default()
        }
    }

    #[test]
    fn test_grace_window_crossing_midnight() {
        let schedule = late_night_schedule();
        let night = |time_in: &str| {
            let record = weekday_record(time_in, "").with_shift_type(ShiftType::Night);
            classify(&record, &schedule)
        };

        assert_eq!(night("23:58"), DerivedStatus::Present);
        assert_eq!(night("00:05"), DerivedStatus::Present);
        assert_eq!(night("00:06"), DerivedStatus::Late { minutes: 11 });
        assert_eq!(night("01:25"), DerivedStatus::Late { minutes: 90 });
        assert_eq!(night("22:30"), DerivedStatus::Present);
    }

    #[test]
    fn test_default_night_shift_late_after_midnight() {
        let record = weekday_record("00:30", "").with_shift_type(ShiftType::Night);
        assert_eq!(classify_default(&record), DerivedStatus::Late { minutes: 270 });
    }

    #[test]
    fn test_custom_day_rule() {
        let schedule = ShiftSchedule {
            day: ShiftRule::new(NaiveTime::from_hms_opt(9, 0, 0).unwrap(), 5),
            ..ShiftSchedule::default()
        };
        let record = weekday_record("09:06", "18:00");
        assert_eq!(classify(&record, &schedule), DerivedStatus::Late { minutes: 6 });
    }

    // ==========================================================================
    // Time parsing
    // ==========================================================================
    #[test]
    fn test_parse_time_formats() {
        assert_eq!(t("08:11:00"), NaiveTime::from_hms_opt(8, 11, 0));
        assert_eq!(t(" 08:11 "), NaiveTime::from_hms_opt(8, 11, 0));
        assert_eq!(
            t("08:11:05.250").map(|x| x.format("%H:%M:%S").to_string()),
            Some("08:11:05".to_string())
        );
        assert_eq!(t("08:11 AM"), NaiveTime::from_hms_opt(8, 11, 0));
        assert_eq!(t("12:05 am"), NaiveTime::from_hms_opt(0, 5, 0));
    }

    #[test]
    fn test_parse_time_rejects_placeholders() {
        assert_eq!(t(""), None);
        assert_eq!(t("   "), None);
        assert_eq!(t("null"), None);
        assert_eq!(t("NULL"), None);
        assert_eq!(t("25:00"), None);
    }

    #[test]
    fn test_parse_midnight_is_a_time() {
        assert_eq!(t("00:00:00"), Some(MISSING_PUNCH));
        assert_eq!(t("12:00 AM"), Some(NaiveTime::MIN));
    }

    // ==========================================================================
    // Properties
    // ==========================================================================
    proptest! {
        #[test]
        fn prop_weekend_always_wins(
            day_offset in 0i64..2000,
            time_in in proptest::option::of(0u32..86_399),
            time_out in proptest::option::of(0u32..86_399),
            overtime in 0u32..600,
            on_leave in any::<bool>(),
        ) {
            // 2026-01-17 is a Saturday; step a whole number of weeks plus 0 or 1 day
            let base = make_date("2026-01-17");
            let date = base + chrono::Duration::days((day_offset / 2) * 7 + day_offset % 2);
            let mut record = AttendanceRecord::new(EmployeeId::new("p"), date)
                .with_times(
                    time_in.and_then(|s| NaiveTime::from_num_seconds_from_midnight_opt(s, 0)),
                    time_out.and_then(|s| NaiveTime::from_num_seconds_from_midnight_opt(s, 0)),
                )
                .with_overtime_minutes(overtime);
            record.on_leave = on_leave;
            prop_assert_eq!(classify_default(&record), DerivedStatus::Weekend);
        }

        #[test]
        fn prop_late_minutes_are_never_inside_grace(seconds in 0u32..86_399) {
            let rule = ShiftSchedule::default().day;
            let time_in = NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0).unwrap();
            let late = late_minutes(time_in, &rule);
            if time_in <= rule.grace_end() {
                prop_assert_eq!(late, 0);
            } else {
                prop_assert!(late >= rule.grace_minutes);
            }
        }

        #[test]
        fn prop_grace_holds_for_any_start(
            start in 0u32..86_400,
            grace in 0u32..700,
            within in 0u32..=600,
        ) {
            // Any arrival within the grace window is on time, even across midnight
            let work_start = NaiveTime::from_num_seconds_from_midnight_opt(start, 0).unwrap();
            let rule = ShiftRule::new(work_start, grace);
            let offset = within.min(grace * 60);
            let time_in = work_start + chrono::Duration::seconds(i64::from(offset));
            prop_assert_eq!(late_minutes(time_in, &rule), 0);

            let past = work_start + chrono::Duration::seconds(i64::from(grace * 60 + 60));
            prop_assert_eq!(late_minutes(past, &rule), grace + 1);
        }
    }
}
