//! Attendance record and derived status types.
//!
//! This module defines the [`AttendanceRecord`] punched in by an employee for a
//! single calendar date and the [`DerivedStatus`] label computed from it.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Opaque identifier for an employee.
///
/// Remote sources send ids as either numbers or strings; both are
/// normalised into this string newtype.
///
/// # Example
///
/// ```
/// use attendance_engine::models::EmployeeId;
///
/// let id = EmployeeId::new("EMP-0042");
/// assert_eq!(id.as_str(), "EMP-0042");
/// assert_eq!(id.to_string(), "EMP-0042");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(String);

impl EmployeeId {
    /// Creates a new employee id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EmployeeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// The work schedule an employee is assigned to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftType {
    /// Daytime schedule, starting at 08:00 by default.
    #[default]
    Day,
    /// Night schedule, with its own configured start time.
    Night,
}

/// A single day's attendance punches for one employee.
///
/// If `time_out` is present then `time_in` is expected to be present too;
/// a record with only `time_in` is a partial shift (still clocked in).
///
/// # Example
///
/// ```
/// use attendance_engine::models::{AttendanceRecord, EmployeeId};
/// use chrono::{NaiveDate, NaiveTime};
///
/// let record = AttendanceRecord::new(
///     EmployeeId::new("7"),
///     NaiveDate::from_ymd_opt(2026, 1, 14).unwrap(),
/// )
/// .with_times(NaiveTime::from_hms_opt(8, 5, 0), NaiveTime::from_hms_opt(17, 0, 0));
///
/// assert!(record.time_in.is_some());
/// assert!(!record.has_partial_shift());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The employee the punches belong to.
    pub employee_id: EmployeeId,
    /// Display name, when the source supplies one.
    #[serde(default)]
    pub employee_name: String,
    /// The calendar date of the record.
    pub date: NaiveDate,
    /// Clock-in time, absent when the employee never clocked in.
    #[serde(default)]
    pub time_in: Option<NaiveTime>,
    /// Clock-out time, absent while the employee is still clocked in.
    #[serde(default)]
    pub time_out: Option<NaiveTime>,
    /// Overtime worked, already truncated to whole hours upstream.
    #[serde(default)]
    pub overtime_minutes: u32,
    /// Total time worked.
    #[serde(default)]
    pub total_work_minutes: u32,
    /// The schedule the employee works.
    #[serde(default)]
    pub shift_type: ShiftType,
    /// Leave flag supplied by the leave management side.
    #[serde(default)]
    pub on_leave: bool,
}

impl AttendanceRecord {
    /// Creates an empty record (no punches) for an employee and date.
    pub fn new(employee_id: EmployeeId, date: NaiveDate) -> Self {
        Self {
            employee_id,
            employee_name: String::new(),
            date,
            time_in: None,
            time_out: None,
            overtime_minutes: 0,
            total_work_minutes: 0,
            shift_type: ShiftType::Day,
            on_leave: false,
        }
    }

    /// Sets the clock-in and clock-out times.
    pub fn with_times(mut self, time_in: Option<NaiveTime>, time_out: Option<NaiveTime>) -> Self {
        self.time_in = time_in;
        self.time_out = time_out;
        self
    }

    /// Sets the overtime minutes.
    pub fn with_overtime_minutes(mut self, minutes: u32) -> Self {
        self.overtime_minutes = minutes;
        self
    }

    /// Sets the shift type.
    pub fn with_shift_type(mut self, shift_type: ShiftType) -> Self {
        self.shift_type = shift_type;
        self
    }

    /// Marks the record as an approved leave day.
    pub fn on_leave(mut self) -> Self {
        self.on_leave = true;
        self
    }

    /// Whole hours of overtime (floor of minutes / 60).
    pub fn overtime_hours(&self) -> u32 {
        self.overtime_minutes / 60
    }

    /// Returns true when the employee clocked in but has not clocked out.
    pub fn has_partial_shift(&self) -> bool {
        self.time_in.is_some() && self.time_out.is_none()
    }
}

/// The display status derived for one (employee, date) pair.
///
/// Computed fresh on every classification and never persisted.
///
/// # Example
///
/// ```
/// use attendance_engine::models::DerivedStatus;
///
/// assert_eq!(DerivedStatus::Late { minutes: 11 }.to_string(), "Late (11m)");
/// assert_eq!(DerivedStatus::OnLeave.to_string(), "On Leave");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DerivedStatus {
    /// Clocked in within the grace window.
    Present,
    /// Clocked in after the grace window; minutes are counted from work start.
    Late {
        /// Minutes after the shift's work start (always positive).
        minutes: u32,
    },
    /// On time and worked at least one whole hour of overtime.
    Overtime,
    /// No clock-in on a weekday.
    Absent,
    /// Saturday or Sunday.
    Weekend,
    /// Approved leave supplied by the upstream leave flag.
    OnLeave,
}

impl std::fmt::Display for DerivedStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DerivedStatus::Present => write!(f, "Present"),
            DerivedStatus::Late { minutes } => write!(f, "Late ({}m)", minutes),
            DerivedStatus::Overtime => write!(f, "Overtime"),
            DerivedStatus::Absent => write!(f, "Absent"),
            DerivedStatus::Weekend => write!(f, "Weekend"),
            DerivedStatus::OnLeave => write!(f, "On Leave"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn hm(h: u32, m: u32) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(h, m, 0)
    }

    #[test]
    fn test_overtime_hours_truncates() {
        let record =
            AttendanceRecord::new("1".into(), make_date("2026-01-14")).with_overtime_minutes(119);
        assert_eq!(record.overtime_hours(), 1);

        let record = record.with_overtime_minutes(59);
        assert_eq!(record.overtime_hours(), 0);
    }

    #[test]
    fn test_partial_shift_detection() {
        let record =
            AttendanceRecord::new("1".into(), make_date("2026-01-14")).with_times(hm(8, 0), None);
        assert!(record.has_partial_shift());

        let record = record.with_times(hm(8, 0), hm(17, 0));
        assert!(!record.has_partial_shift());

        let record = record.with_times(None, None);
        assert!(!record.has_partial_shift());
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(DerivedStatus::Present.to_string(), "Present");
        assert_eq!(DerivedStatus::Late { minutes: 30 }.to_string(), "Late (30m)");
        assert_eq!(DerivedStatus::Overtime.to_string(), "Overtime");
        assert_eq!(DerivedStatus::Absent.to_string(), "Absent");
        assert_eq!(DerivedStatus::Weekend.to_string(), "Weekend");
        assert_eq!(DerivedStatus::OnLeave.to_string(), "On Leave");
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&DerivedStatus::Late { minutes: 11 }).unwrap();
        assert_eq!(json, r#"{"status":"late","minutes":11}"#);

        let json = serde_json::to_string(&DerivedStatus::OnLeave).unwrap();
        assert_eq!(json, r#"{"status":"on_leave"}"#);
    }

    #[test]
    fn test_record_deserialization_defaults() {
        let json = r#"{
            "employee_id": "42",
            "date": "2026-01-14",
            "time_in": "08:00:00"
        }"#;

        let record: AttendanceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.employee_id, EmployeeId::new("42"));
        assert_eq!(record.time_in, hm(8, 0));
        assert_eq!(record.time_out, None);
        assert_eq!(record.shift_type, ShiftType::Day);
        assert!(!record.on_leave);
    }

    #[test]
    fn test_employee_id_is_transparent() {
        let json = serde_json::to_string(&EmployeeId::new("EMP-1")).unwrap();
        assert_eq!(json, "\"EMP-1\"");
    }
}
