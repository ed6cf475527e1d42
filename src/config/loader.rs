//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::ViewKind;

use super::types::{AppConfig, ScheduleConfig, ViewsConfig};

/// Grace windows of twelve hours or more cannot be told apart from an early
/// arrival for the next shift.
const MAX_GRACE_MINUTES: u32 = 12 * 60;

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── schedule.yaml   # Business timezone and shift rules
/// └── views.yaml      # Polling interval and per-view pagination
/// ```
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::ConfigLoader;
/// use attendance_engine::models::ViewKind;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Attendance page size: {}", loader.config().view(ViewKind::Attendance).page_size);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if either file is missing, contains invalid YAML,
    /// or holds values outside their allowed range.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let schedule = Self::load_yaml::<ScheduleConfig>(&path.join("schedule.yaml"))?;
        let views = Self::load_yaml::<ViewsConfig>(&path.join("views.yaml"))?;

        Self::validate(&schedule, &views)?;

        debug!(
            timezone = %schedule.timezone.name,
            polling_ms = views.polling.interval_ms,
            "Loaded engine configuration"
        );

        Ok(Self {
            config: AppConfig::new(schedule, views),
        })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: AppConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn validate(schedule: &ScheduleConfig, views: &ViewsConfig) -> EngineResult<()> {
        if schedule.timezone.offset().is_none() {
            return Err(EngineError::InvalidConfig {
                field: "timezone.utc_offset_minutes".to_string(),
                message: format!(
                    "{} is outside the range of a UTC offset",
                    schedule.timezone.utc_offset_minutes
                ),
            });
        }

        for (name, rule) in [("day", &schedule.shifts.day), ("night", &schedule.shifts.night)] {
            if rule.grace_minutes >= MAX_GRACE_MINUTES {
                return Err(EngineError::InvalidConfig {
                    field: format!("shifts.{}.grace_minutes", name),
                    message: format!(
                        "{} must be less than {}",
                        rule.grace_minutes, MAX_GRACE_MINUTES
                    ),
                });
            }
        }

        if views.polling.interval_ms == 0 {
            return Err(EngineError::InvalidConfig {
                field: "polling.interval_ms".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }

        if let Some((view, _)) = views.views.iter().find(|(_, s)| s.page_size == 0) {
            return Err(EngineError::InvalidConfig {
                field: format!("views.{}.page_size", view),
                message: "must be greater than zero".to_string(),
            });
        }

        Ok(())
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Page size for a view.
    pub fn page_size(&self, view: ViewKind) -> usize {
        self.config.view(view).page_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ShiftRule, ShiftSchedule};
    use crate::models::PaginationStrategy;
    use chrono::NaiveTime;
    use std::time::Duration;

    fn config_path() -> &'static str {
        "./config/default"
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.config().timezone().utc_offset_minutes, 480);
        assert_eq!(
            loader.config().shifts().day.work_start,
            NaiveTime::from_hms_opt(8, 0, 0).unwrap()
        );
        assert_eq!(loader.config().shifts().day.grace_minutes, 10);
        assert_eq!(loader.config().polling().interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_shipped_config_matches_defaults() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.config(), &AppConfig::default());
    }

    #[test]
    fn test_view_settings_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.page_size(ViewKind::Payroll), 6);
        assert_eq!(
            loader.config().view(ViewKind::GeneratePayroll).pagination,
            PaginationStrategy::HeadAndTail
        );
        assert_eq!(
            loader.config().view(ViewKind::Attendance).pagination,
            PaginationStrategy::SlidingWindow
        );
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("schedule.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_validate_rejects_zero_page_size() {
        let views: ViewsConfig =
            serde_yaml::from_str("views:\n  payroll:\n    page_size: 0\n").unwrap();
        let result = ConfigLoader::validate(&ScheduleConfig::default(), &views);

        match result {
            Err(EngineError::InvalidConfig { field, .. }) => {
                assert_eq!(field, "views.payroll.page_size");
            }
            _ => panic!("Expected InvalidConfig error"),
        }
    }

    #[test]
    fn test_validate_rejects_zero_polling_interval() {
        let views: ViewsConfig = serde_yaml::from_str("polling:\n  interval_ms: 0\n").unwrap();
        let result = ConfigLoader::validate(&ScheduleConfig::default(), &views);
        assert!(matches!(result, Err(EngineError::InvalidConfig { .. })));
    }

    fn late_night_schedule(grace_minutes: u32) -> ScheduleConfig {
        ScheduleConfig {
            shifts: ShiftSchedule {
                night: ShiftRule::new(NaiveTime::from_hms_opt(23, 55, 0).unwrap(), grace_minutes),
                ..ShiftSchedule::default()
            },
            ..ScheduleConfig::default()
        }
    }

    #[test]
    fn test_validate_rejects_half_day_grace() {
        let schedule = late_night_schedule(1440);
        let result = ConfigLoader::validate(&schedule, &ViewsConfig::default());

        match result {
            Err(EngineError::InvalidConfig { field, .. }) => {
                assert_eq!(field, "shifts.night.grace_minutes");
            }
            _ => panic!("Expected InvalidConfig error"),
        }
    }

    #[test]
    fn test_validate_accepts_grace_crossing_midnight() {
        let schedule = late_night_schedule(10);
        assert!(ConfigLoader::validate(&schedule, &ViewsConfig::default()).is_ok());
    }
}
