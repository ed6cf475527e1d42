//! Application state for the Attendance Engine API.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use crate::config::ConfigLoader;

/// Shared application state.
///
/// Holds the loaded schedule and view configuration for all handlers.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// The current date in the configured business timezone.
    pub fn today(&self) -> NaiveDate {
        self.config.config().timezone().today(Utc::now())
    }
}
