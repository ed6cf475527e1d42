//! Attendance source wire format.
//!
//! The attendance endpoint returns one row per employee per date with
//! `{id, firstName, lastName, date, time_in, time_out, total_workhours,
//! overtime, profile_image, shift_type}`. [`AttendanceRow::to_record`]
//! converts a row into the domain [`AttendanceRecord`], failing open on
//! malformed punch times.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::calculation::{MISSING_PUNCH, parse_time_of_day};
use crate::models::{AttendanceRecord, EmployeeId, ShiftType};

use super::lenient::{decimal_number, flag, optional_text, string_or_number, whole_number};

/// One row returned by the attendance source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRow {
    /// Employee id (number or string on the wire).
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    /// Employee first name.
    #[serde(rename = "firstName", default, deserialize_with = "string_or_number")]
    pub first_name: String,
    /// Employee last name.
    #[serde(rename = "lastName", default, deserialize_with = "string_or_number")]
    pub last_name: String,
    /// Date as `YYYY-MM-DD`.
    #[serde(deserialize_with = "string_or_number")]
    pub date: String,
    /// Clock-in time, any of the accepted time formats.
    #[serde(default, deserialize_with = "optional_text")]
    pub time_in: Option<String>,
    /// Clock-out time.
    #[serde(default, deserialize_with = "optional_text")]
    pub time_out: Option<String>,
    /// Hours worked, possibly fractional.
    #[serde(default, deserialize_with = "decimal_number")]
    pub total_workhours: f64,
    /// Overtime in minutes, truncated to whole hours upstream.
    #[serde(default, deserialize_with = "whole_number")]
    pub overtime: u32,
    /// Avatar path; passed through for rendering.
    #[serde(default, deserialize_with = "optional_text")]
    pub profile_image: Option<String>,
    /// `day` or `night`; anything else is read as `day`.
    #[serde(default, deserialize_with = "optional_text")]
    pub shift_type: Option<String>,
    /// Leave flag joined in by the leave module, when present.
    #[serde(default, deserialize_with = "flag")]
    pub on_leave: bool,
}

impl AttendanceRow {
    /// Full display name, `"First Last"`.
    pub fn employee_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }

    /// The shift type named by the row.
    pub fn shift_type(&self) -> ShiftType {
        match self.shift_type.as_deref().map(str::trim) {
            Some(s) if s.eq_ignore_ascii_case("night") => ShiftType::Night,
            _ => ShiftType::Day,
        }
    }

    /// Converts the row into a domain record.
    ///
    /// Returns `None` (and logs a warning) when the date cannot be parsed, since
    /// such a row cannot be placed on any day. Unparseable punch times become
    /// absent punches, so the day classifies as `Absent`.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::sources::AttendanceRow;
    ///
    /// let row: AttendanceRow = serde_json::from_str(r#"{
    ///     "id": 12, "firstName": "Ana", "lastName": "Cruz", "date": "2026-01-14",
    ///     "time_in": "08:11:00", "time_out": null, "total_workhours": "0",
    ///     "overtime": "0", "profile_image": null, "shift_type": "day"
    /// }"#).unwrap();
    ///
    /// let record = row.to_record().unwrap();
    /// assert_eq!(record.employee_name, "Ana Cruz");
    /// assert!(record.has_partial_shift());
    /// ```
    pub fn to_record(&self) -> Option<AttendanceRecord> {
        let Ok(date) = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d") else {
            warn!(
                employee_id = %self.id,
                date = %self.date,
                "Dropping attendance row with unparseable date"
            );
            return None;
        };

        // 00:00:00 stands for a missing punch, except as a night-shift clock-out
        let shift_type = self.shift_type();
        let time_in = self
            .time_in
            .as_deref()
            .and_then(parse_time_of_day)
            .filter(|time| *time != MISSING_PUNCH);
        let time_out = self
            .time_out
            .as_deref()
            .and_then(parse_time_of_day)
            .filter(|time| *time != MISSING_PUNCH || shift_type == ShiftType::Night);

        Some(AttendanceRecord {
            employee_id: EmployeeId::new(self.id.trim()),
            employee_name: self.employee_name(),
            date,
            time_in,
            time_out,
            overtime_minutes: self.overtime,
            total_work_minutes: (self.total_workhours * 60.0)
                .round()
                .min(f64::from(u32::MAX)) as u32,
            shift_type,
            on_leave: self.on_leave,
        })
    }
}

/// Converts rows into records, dropping rows whose date cannot be parsed.
pub fn records_from_rows(rows: &[AttendanceRow]) -> Vec<AttendanceRecord> {
    rows.iter().filter_map(AttendanceRow::to_record).collect()
}
