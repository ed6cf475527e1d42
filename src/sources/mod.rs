//! Wire formats of the remote HR API sources.
//!
//! The attendance, performance and calendar-events endpoints are external
//! collaborators. This module only defines the JSON shapes the engine reads
//! from them (and, for performance, produces) and the conversions into the
//! domain models.

mod attendance;
mod events;
mod lenient;
mod performance;

pub use attendance::{AttendanceRow, records_from_rows};
pub use events::{CalendarEvent, CalendarEventsResponse};
pub use performance::{PerformanceResponse, PerformanceRow, SummaryStatsRow};
