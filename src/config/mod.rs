//! Configuration loading and management for the Attendance Engine.
//!
//! This module provides functionality to load the business timezone, shift
//! rules, polling interval and per-view pagination settings from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use attendance_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Business timezone: {}", config.config().timezone().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AppConfig, BusinessTimezone, PollingConfig, ScheduleConfig, ShiftRule, ShiftSchedule,
    ViewSettings, ViewsConfig,
};
