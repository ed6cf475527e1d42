//! Configuration types for attendance classification and dashboard views.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::collections::BTreeMap;
use std::time::Duration;

use chrono::{
    DateTime, Duration as ChronoDuration, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc,
};
use serde::Deserialize;

use crate::models::{PaginationStrategy, ShiftType, ViewKind};

/// The business timezone all dates and weekdays are computed in.
///
/// Expressed as a fixed UTC offset; the default is UTC+8.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BusinessTimezone {
    /// Human-readable zone name, for logs only.
    #[serde(default = "default_timezone_name")]
    pub name: String,
    /// Offset east of UTC in minutes.
    pub utc_offset_minutes: i32,
}

fn default_timezone_name() -> String {
    "UTC+08:00".to_string()
}

impl Default for BusinessTimezone {
    fn default() -> Self {
        Self {
            name: default_timezone_name(),
            utc_offset_minutes: 8 * 60,
        }
    }
}

impl BusinessTimezone {
    /// Returns the chrono offset, or `None` when the configured offset is out of range.
    pub fn offset(&self) -> Option<FixedOffset> {
        self.utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
    }

    /// Converts a UTC instant into business-local wall-clock time.
    ///
    /// An out-of-range offset is treated as UTC.
    pub fn local_datetime(&self, now: DateTime<Utc>) -> NaiveDateTime {
        match self.offset() {
            Some(offset) => now.with_timezone(&offset).naive_local(),
            None => now.naive_utc(),
        }
    }

    /// The business date at the given UTC instant.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::config::BusinessTimezone;
    /// use chrono::{NaiveDate, TimeZone, Utc};
    ///
    /// let tz = BusinessTimezone::default(); // UTC+8
    /// let now = Utc.with_ymd_and_hms(2026, 1, 14, 17, 30, 0).unwrap();
    /// assert_eq!(tz.today(now), NaiveDate::from_ymd_opt(2026, 1, 15).unwrap());
    /// ```
    pub fn today(&self, now: DateTime<Utc>) -> NaiveDate {
        self.local_datetime(now).date()
    }
}

/// Work start and grace window for one shift type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ShiftRule {
    /// Wall-clock start of the working day.
    pub work_start: NaiveTime,
    /// Minutes after `work_start` during which arrival is not late.
    pub grace_minutes: u32,
}

impl ShiftRule {
    /// Creates a rule from a start time and grace period.
    pub fn new(work_start: NaiveTime, grace_minutes: u32) -> Self {
        Self {
            work_start,
            grace_minutes,
        }
    }

    /// Last on-time clock-in (inclusive).
    pub fn grace_end(&self) -> NaiveTime {
        self.work_start + ChronoDuration::minutes(i64::from(self.grace_minutes))
    }
}

/// Shift rules by shift type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ShiftSchedule {
    /// The day shift (08:00 with a 10 minute grace period by default).
    pub day: ShiftRule,
    /// The night shift.
    pub night: ShiftRule,
}

impl Default for ShiftSchedule {
    fn default() -> Self {
        Self {
            day: ShiftRule::new(hms(8, 0), 10),
            night: ShiftRule::new(hms(20, 0), 10),
        }
    }
}

impl ShiftSchedule {
    /// Returns the rule that applies to a shift type.
    pub fn rule_for(&self, shift_type: ShiftType) -> &ShiftRule {
        match shift_type {
            ShiftType::Day => &self.day,
            ShiftType::Night => &self.night,
        }
    }
}

fn hms(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}

/// Contents of schedule.yaml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ScheduleConfig {
    /// Business timezone.
    #[serde(default)]
    pub timezone: BusinessTimezone,
    /// Shift rules.
    #[serde(default)]
    pub shifts: ShiftSchedule,
}

/// Polling settings shared by all refresh loops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PollingConfig {
    /// Interval between background refreshes, in milliseconds.
    pub interval_ms: u64,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self { interval_ms: 1000 }
    }
}

impl PollingConfig {
    /// The refresh interval as a [`Duration`].
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

/// Table settings for one dashboard view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ViewSettings {
    /// Rows per page.
    pub page_size: usize,
    /// Page-button layout.
    #[serde(default)]
    pub pagination: PaginationStrategy,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            page_size: 10,
            pagination: PaginationStrategy::SlidingWindow,
        }
    }
}

/// Contents of views.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ViewsConfig {
    /// Polling settings.
    #[serde(default)]
    pub polling: PollingConfig,
    /// Per-view table settings.
    #[serde(default)]
    pub views: BTreeMap<ViewKind, ViewSettings>,
}

impl Default for ViewsConfig {
    fn default() -> Self {
        let views = BTreeMap::from([
            (
                ViewKind::Attendance,
                ViewSettings {
                    page_size: 10,
                    pagination: PaginationStrategy::SlidingWindow,
                },
            ),
            (
                ViewKind::Performance,
                ViewSettings {
                    page_size: 10,
                    pagination: PaginationStrategy::SlidingWindow,
                },
            ),
            (
                ViewKind::Payroll,
                ViewSettings {
                    page_size: 6,
                    pagination: PaginationStrategy::HeadAndTail,
                },
            ),
            (
                ViewKind::GeneratePayroll,
                ViewSettings {
                    page_size: 6,
                    pagination: PaginationStrategy::HeadAndTail,
                },
            ),
        ]);
        Self {
            polling: PollingConfig::default(),
            views,
        }
    }
}

impl ViewsConfig {
    /// Settings for a view, falling back to the defaults when the view is not configured.
    pub fn settings(&self, view: ViewKind) -> ViewSettings {
        self.views.get(&view).copied().unwrap_or_default()
    }
}

/// The complete configuration loaded from YAML files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Timezone and shift rules.
    schedule: ScheduleConfig,
    /// Polling and per-view settings.
    views: ViewsConfig,
}

impl AppConfig {
    /// Creates a new AppConfig from its component parts.
    pub fn new(schedule: ScheduleConfig, views: ViewsConfig) -> Self {
        Self { schedule, views }
    }

    /// Returns the business timezone.
    pub fn timezone(&self) -> &BusinessTimezone {
        &self.schedule.timezone
    }

    /// Returns the shift rules.
    pub fn shifts(&self) -> &ShiftSchedule {
        &self.schedule.shifts
    }

    /// Returns the polling settings.
    pub fn polling(&self) -> &PollingConfig {
        &self.views.polling
    }

    /// Returns the table settings for a view.
    pub fn view(&self, view: ViewKind) -> ViewSettings {
        self.views.settings(view)
    }
}
