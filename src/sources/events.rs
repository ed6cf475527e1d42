//! Calendar events source wire format.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::lenient::keyed_map;

/// A single calendar event as returned by the events source.
///
/// Only the title is interpreted; other fields are kept for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// Event title.
    #[serde(default)]
    pub title: String,
    /// Any other fields the source sent.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Events for one month, keyed by day of month.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalendarEventsResponse {
    /// Events grouped by day number.
    #[serde(default, deserialize_with = "keyed_map")]
    pub calendar_events: BTreeMap<u32, Vec<CalendarEvent>>,
    /// Day numbers the source flags as having events.
    #[serde(default)]
    pub days_with_events: Vec<u32>,
}

impl CalendarEventsResponse {
    /// Day numbers with at least one event.
    ///
    /// Takes the union of `days_with_events` and the non-empty days of
    /// `calendar_events`, dropping anything outside 1-31.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::sources::CalendarEventsResponse;
    ///
    /// let response: CalendarEventsResponse = serde_json::from_str(r#"{
    ///     "calendar_events": {"3": [{"title": "Payroll cutoff"}], "9": []},
    ///     "days_with_events": [14, 0, 40]
    /// }"#).unwrap();
    ///
    /// assert_eq!(response.event_days().into_iter().collect::<Vec<_>>(), vec![3, 14]);
    /// ```
    pub fn event_days(&self) -> BTreeSet<u32> {
        self.calendar_events
            .iter()
            .filter(|(_, events)| !events.is_empty())
            .map(|(day, _)| *day)
            .chain(self.days_with_events.iter().copied())
            .filter(|day| (1..=31).contains(day))
            .collect()
    }
}
