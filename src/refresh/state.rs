//! View state and its reducer.
//!
//! Each dashboard view keeps one immutable [`ViewState`] record. Every change
//! goes through [`ViewState::reduce`], which returns the next state or `None`
//! when the action would not change anything visible. The refresh loop relies
//! on that `None` to skip redundant updates.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{DateRange, PageState, ViewKind};

/// Where a view is in its load lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadStatus {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// The initial, visible load is in progress.
    Loading,
    /// Data is displayed.
    Ready,
    /// The initial load failed; `error` holds the message.
    Failed,
}

/// Filters a view applies to its data source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewFilters {
    /// Exact date filter (attendance view).
    pub date: Option<NaiveDate>,
    /// Date range filter (performance and payroll views).
    pub range: Option<DateRange>,
    /// Free-text search.
    pub search: Option<String>,
}

/// The complete state of one view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewState<T> {
    /// The view this state belongs to.
    pub view: ViewKind,
    /// The data currently displayed.
    pub data: Option<T>,
    /// The 1-based page displayed.
    pub page: usize,
    /// Active filters.
    pub filters: ViewFilters,
    /// Load lifecycle.
    pub load_status: LoadStatus,
    /// Visible error from the last initial load, if it failed.
    pub error: Option<String>,
    /// When `data` last changed.
    pub last_updated: Option<DateTime<Utc>>,
    /// Incremented on every emitted state change.
    pub revision: u64,
}

/// Changes that can be applied to a [`ViewState`].
#[derive(Debug, Clone, PartialEq)]
pub enum ViewAction<T> {
    /// The initial load started.
    LoadStarted,
    /// The initial load returned data.
    Loaded(T),
    /// The initial load failed; the message is shown to the user.
    LoadFailed(String),
    /// A background refresh returned data.
    BackgroundLoaded(T),
    /// A background refresh failed; never visible.
    BackgroundFailed(String),
    /// The user selected a page; clamped against the current item count.
    SetPage {
        /// Requested page.
        page: usize,
        /// Items in the table.
        total_items: usize,
        /// Rows per page.
        page_size: usize,
    },
    /// The user changed filters; the page resets to 1.
    SetFilters(ViewFilters),
}

impl<T: Clone + PartialEq> ViewState<T> {
    /// Creates an empty state for a view.
    pub fn new(view: ViewKind) -> Self {
        Self {
            view,
            data: None,
            page: 1,
            filters: ViewFilters::default(),
            load_status: LoadStatus::Idle,
            error: None,
            last_updated: None,
            revision: 0,
        }
    }

    /// Applies an action, returning the next state or `None` if nothing changes.
    ///
    /// A background result deep-equal to the displayed data yields `None`, as
    /// does a background failure: the previous data stays on screen.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::models::ViewKind;
    /// use attendance_engine::refresh::{ViewAction, ViewState};
    /// use chrono::Utc;
    ///
    /// let state: ViewState<Vec<u32>> = ViewState::new(ViewKind::Attendance);
    /// let now = Utc::now();
    ///
    /// let loaded = state.reduce(ViewAction::Loaded(vec![1, 2]), now).unwrap();
    /// assert_eq!(loaded.revision, 1);
    ///
    /// // Same data again: no change to emit
    /// assert!(loaded.reduce(ViewAction::BackgroundLoaded(vec![1, 2]), now).is_none());
    /// ```
    pub fn reduce(&self, action: ViewAction<T>, now: DateTime<Utc>) -> Option<Self> {
        let next = match action {
            ViewAction::LoadStarted => {
                if self.load_status == LoadStatus::Loading {
                    return None;
                }
                Self {
                    load_status: LoadStatus::Loading,
                    error: None,
                    ..self.clone()
                }
            }
            ViewAction::Loaded(data) => {
                let unchanged = self.data.as_ref() == Some(&data);
                if unchanged && self.load_status == LoadStatus::Ready && self.error.is_none() {
                    return None;
                }
                Self {
                    last_updated: if unchanged { self.last_updated } else { Some(now) },
                    data: Some(data),
                    load_status: LoadStatus::Ready,
                    error: None,
                    ..self.clone()
                }
            }
            ViewAction::LoadFailed(message) => Self {
                load_status: LoadStatus::Failed,
                error: Some(message),
                ..self.clone()
            },
            ViewAction::BackgroundLoaded(data) => {
                if self.data.as_ref() == Some(&data) {
                    return None;
                }
                Self {
                    data: Some(data),
                    load_status: LoadStatus::Ready,
                    error: None,
                    last_updated: Some(now),
                    ..self.clone()
                }
            }
            ViewAction::BackgroundFailed(_) => return None,
            ViewAction::SetPage {
                page,
                total_items,
                page_size,
            } => {
                let clamped = PageState {
                    current_page: page,
                    page_size,
                    total_items,
                }
                .clamped()
                .current_page;
                if clamped == self.page {
                    return None;
                }
                Self {
                    page: clamped,
                    ..self.clone()
                }
            }
            ViewAction::SetFilters(filters) => {
                if filters == self.filters {
                    return None;
                }
                Self {
                    filters,
                    page: 1,
                    ..self.clone()
                }
            }
        };

        Some(Self {
            revision: self.revision + 1,
            ..next
        })
    }
}
