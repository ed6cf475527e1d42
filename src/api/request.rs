//! Request types for the Attendance Engine API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{PaginationStrategy, ViewKind};
use crate::sources::{AttendanceRow, CalendarEventsResponse};

/// Request body for `POST /attendance/classify`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyRequest {
    /// Rows exactly as the attendance source returned them.
    pub records: Vec<AttendanceRow>,
}

/// Request body for `POST /performance/summary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceRequest {
    /// First day of the period (inclusive).
    pub from: NaiveDate,
    /// Last day of the period (inclusive).
    pub to: NaiveDate,
    /// Attendance rows covering the period.
    pub records: Vec<AttendanceRow>,
}

/// Request body for `POST /calendar/grid`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarRequest {
    /// The calendar year.
    pub year: i32,
    /// The month, 0-11 (0 is January).
    pub month: u32,
    /// Months to move from `year`/`month` before building (prev/next navigation).
    #[serde(default)]
    pub offset_months: i32,
    /// Day numbers with events.
    #[serde(default)]
    pub days_with_events: Vec<u32>,
    /// The events source response for the month, merged with `days_with_events`.
    #[serde(default)]
    pub events: Option<CalendarEventsResponse>,
    /// Overrides the current date in the business timezone.
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

/// Request body for `POST /pagination`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationRequest {
    /// Number of items in the table.
    pub total_items: usize,
    /// Requested 1-based page.
    #[serde(default = "first_page")]
    pub current_page: usize,
    /// Rows per page; defaults to the view's configured size.
    #[serde(default)]
    pub page_size: Option<usize>,
    /// Page-button layout; defaults to the view's configured layout.
    #[serde(default)]
    pub strategy: Option<PaginationStrategy>,
    /// The view whose settings supply the defaults.
    #[serde(default = "default_view")]
    pub view: ViewKind,
    /// Clamps `current_page` into range before slicing; when false an
    /// out-of-range page yields an empty slice.
    #[serde(default = "clamp_by_default")]
    pub clamp: bool,
}

fn first_page() -> usize {
    1
}

fn default_view() -> ViewKind {
    ViewKind::Attendance
}

fn clamp_by_default() -> bool {
    true
}
