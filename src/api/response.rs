//! Response types for the Attendance Engine API.
//!
//! This module defines the success bodies and the error response
//! structures for the HTTP API.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{
    AttendanceRecord, CalendarDay, CalendarMonth, DerivedStatus, EmployeeId, PageSlice,
    PaginationStrategy, ShiftType,
};

/// One classified attendance row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedRecord {
    /// Employee id.
    pub employee_id: EmployeeId,
    /// Employee display name.
    pub employee_name: String,
    /// Attendance date.
    pub date: NaiveDate,
    /// Shift the record was classified against.
    pub shift_type: ShiftType,
    /// The derived status.
    pub derived_status: DerivedStatus,
    /// Display label, e.g. `Late (11m)`.
    pub label: String,
    /// Whole overtime hours.
    pub overtime_hours: u32,
}

impl ClassifiedRecord {
    /// Pairs a record with its derived status.
    pub fn new(record: &AttendanceRecord, status: DerivedStatus) -> Self {
        Self {
            employee_id: record.employee_id.clone(),
            employee_name: record.employee_name.clone(),
            date: record.date,
            shift_type: record.shift_type,
            derived_status: status,
            label: status.to_string(),
            overtime_hours: record.overtime_hours(),
        }
    }
}

/// Response body for `POST /attendance/classify`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifyResponse {
    /// Classified rows in request order.
    pub records: Vec<ClassifiedRecord>,
    /// Rows dropped because their date could not be parsed.
    pub dropped_rows: usize,
}

/// Response body for `POST /calendar/grid`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarResponse {
    /// The month the grid shows.
    pub month: CalendarMonth,
    /// The month before, for navigation.
    pub previous: CalendarMonth,
    /// The month after, for navigation.
    pub next: CalendarMonth,
    /// Grid cells in display order.
    pub days: Vec<CalendarDay>,
}

/// Response body for `POST /pagination`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationResponse {
    /// The page actually shown, after clamping.
    pub current_page: usize,
    /// Rows per page used.
    pub page_size: usize,
    /// Page-button layout used.
    pub strategy: PaginationStrategy,
    /// The visible range and buttons.
    #[serde(flatten)]
    pub slice: PageSlice,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}
