//! Calculation logic for the Attendance Engine.
//!
//! This module contains the pure functions behind the dashboards: attendance
//! status classification, period aggregation with fleet-wide averages, month
//! calendar grid construction, and pagination with its two page-button layouts.
//! None of them perform I/O or keep state between calls.

mod calendar_grid;
mod pagination;
mod period_aggregate;
mod time_status;

pub use calendar_grid::{build_grid, days_in_month, first_weekday, shift_month};
pub use pagination::{
    HeadAndTailPaginator, PAGE_WINDOW, Paginator, SlidingWindowPaginator, paginate,
};
pub use period_aggregate::{AVERAGE_DECIMAL_PLACES, aggregate, summary_stats};
pub use time_status::{MISSING_PUNCH, classify, is_weekend, late_minutes, parse_time_of_day};
