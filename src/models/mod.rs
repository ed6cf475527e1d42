//! Core data models for the Attendance Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod calendar;
mod page;
mod period;
mod view;

pub use attendance::{AttendanceRecord, DerivedStatus, EmployeeId, ShiftType};
pub use calendar::{CalendarDay, CalendarMonth};
pub use page::{PageButton, PageSlice, PageState, PaginationStrategy, total_pages};
pub use period::{DateRange, PeriodReport, PeriodSummary, SummaryStats};
pub use view::ViewKind;
