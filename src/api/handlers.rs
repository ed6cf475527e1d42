//! HTTP request handlers for the Attendance Engine API.
//!
//! Every handler parses its JSON body, runs the pure calculation and logs the
//! outcome under a per-request correlation id.

use std::collections::BTreeSet;
use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{aggregate, build_grid, classify, paginate, shift_month};
use crate::models::{CalendarMonth, DateRange, PageState};
use crate::sources::{PerformanceResponse, records_from_rows};

use super::request::{CalendarRequest, ClassifyRequest, PaginationRequest, PerformanceRequest};
use super::response::{
    ApiError, ApiErrorResponse, CalendarResponse, ClassifiedRecord, ClassifyResponse,
    PaginationResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/attendance/classify", post(classify_handler))
        .route("/performance/summary", post(performance_handler))
        .route("/calendar/grid", post(calendar_handler))
        .route("/pagination", post(pagination_handler))
        .with_state(state)
}

/// Handler for POST /attendance/classify.
///
/// Converts raw attendance rows and derives the display status of each.
async fn classify_handler(
    State(state): State<AppState>,
    payload: Result<Json<ClassifyRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing classify request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let records = records_from_rows(&request.records);
    let dropped_rows = request.records.len() - records.len();
    let shifts = state.config().config().shifts();

    let classified: Vec<ClassifiedRecord> = records
        .iter()
        .map(|record| ClassifiedRecord::new(record, classify(record, shifts)))
        .collect();

    info!(
        correlation_id = %correlation_id,
        records = classified.len(),
        dropped_rows,
        duration_us = start_time.elapsed().as_micros() as u64,
        "Classification completed"
    );

    json_response(ClassifyResponse {
        records: classified,
        dropped_rows,
    })
}

/// Handler for POST /performance/summary.
///
/// Aggregates attendance rows over the requested period into the same shape
/// the performance source serves.
async fn performance_handler(
    State(state): State<AppState>,
    payload: Result<Json<PerformanceRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing performance summary request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let range = DateRange::new(request.from, request.to);
    if range.len_days() == 0 {
        warn!(
            correlation_id = %correlation_id,
            from = %request.from,
            to = %request.to,
            "Inverted date range, summary will be empty"
        );
    }

    let start_time = Instant::now();
    let records = records_from_rows(&request.records);
    let report = aggregate(&records, range, state.config().config().shifts());

    info!(
        correlation_id = %correlation_id,
        employees = report.employee_count(),
        days = range.len_days(),
        duration_us = start_time.elapsed().as_micros() as u64,
        "Performance summary completed"
    );

    json_response(PerformanceResponse::from(&report))
}

/// Handler for POST /calendar/grid.
async fn calendar_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalendarRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calendar grid request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    if request.month > 11 {
        warn!(correlation_id = %correlation_id, month = request.month, "Month out of range");
        return ApiErrorResponse::bad_request(ApiError::with_details(
            "VALIDATION_ERROR",
            format!("Invalid month: {}", request.month),
            "Months are numbered 0 (January) through 11 (December)",
        ))
        .into_response();
    }

    let month = shift_month(
        CalendarMonth::new(request.year, request.month),
        request.offset_months,
    );

    let mut event_days: BTreeSet<u32> = request
        .days_with_events
        .iter()
        .copied()
        .filter(|day| (1..=31).contains(day))
        .collect();
    if let Some(events) = &request.events {
        event_days.extend(events.event_days());
    }

    let today = request.today.unwrap_or_else(|| state.today());
    let days = build_grid(month.year, month.month, &event_days, today);

    info!(
        correlation_id = %correlation_id,
        year = month.year,
        month = month.month,
        cells = days.len(),
        event_days = event_days.len(),
        "Calendar grid built"
    );

    json_response(CalendarResponse {
        month,
        previous: shift_month(month, -1),
        next: shift_month(month, 1),
        days,
    })
}

/// Handler for POST /pagination.
///
/// Missing page size and layout are taken from the view's configuration.
async fn pagination_handler(
    State(state): State<AppState>,
    payload: Result<Json<PaginationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing pagination request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let settings = state.config().config().view(request.view);
    let page_size = request.page_size.unwrap_or(settings.page_size);
    if page_size == 0 {
        warn!(correlation_id = %correlation_id, view = %request.view, "Zero page size");
        return ApiErrorResponse::bad_request(ApiError::validation_error(
            "page_size must be greater than zero",
        ))
        .into_response();
    }
    let strategy = request.strategy.unwrap_or(settings.pagination);

    let requested = PageState {
        current_page: request.current_page,
        page_size,
        total_items: request.total_items,
    };
    let page = if request.clamp {
        requested.clamped()
    } else {
        requested
    };

    let slice = paginate(
        page.total_items,
        page.page_size,
        page.current_page,
        strategy.paginator(),
    );

    info!(
        correlation_id = %correlation_id,
        view = %request.view,
        current_page = page.current_page,
        total_pages = slice.total_pages,
        "Pagination computed"
    );

    json_response(PaginationResponse {
        current_page: page.current_page,
        page_size,
        strategy,
        slice,
    })
}

fn json_response<T: Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Maps a JSON extraction failure to a 400 with a structured body.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error).into_response()
}
