//! HTTP API module for the Attendance Engine.
//!
//! Exposes attendance classification, period summaries, calendar grids and
//! pagination as JSON endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalendarRequest, ClassifyRequest, PaginationRequest, PerformanceRequest};
pub use response::{
    ApiError, ApiErrorResponse, CalendarResponse, ClassifiedRecord, ClassifyResponse,
    PaginationResponse,
};
pub use state::AppState;
