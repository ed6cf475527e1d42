//! Attendance Engine for HR and payroll dashboards
//!
//! This crate derives attendance statuses from raw clock punches, aggregates
//! them into per-employee period summaries with fleet-wide averages, builds
//! month calendar grids, paginates record tables and keeps dashboard views
//! fresh by polling their data sources in the background.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod refresh;
pub mod sources;
