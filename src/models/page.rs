//! Pagination models.
//!
//! This module contains [`PageState`] held by a view, the [`PageButton`] metadata
//! rendered under a table and the [`PageSlice`] returned by the paginators.

use serde::{Deserialize, Serialize};

/// The pagination state a view keeps for one table.
///
/// # Example
///
/// ```
/// use attendance_engine::models::PageState;
///
/// let state = PageState { current_page: 12, page_size: 6, total_items: 47 };
/// assert_eq!(state.total_pages(), 8);
/// assert_eq!(state.clamped().current_page, 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    /// The 1-based page being displayed.
    pub current_page: usize,
    /// Rows per page.
    pub page_size: usize,
    /// Total rows available.
    pub total_items: usize,
}

impl PageState {
    /// Creates a state positioned on the first page.
    pub fn first(page_size: usize, total_items: usize) -> Self {
        Self {
            current_page: 1,
            page_size,
            total_items,
        }
    }

    /// Number of pages; zero when there are no items or the page size is zero.
    pub fn total_pages(&self) -> usize {
        total_pages(self.total_items, self.page_size)
    }

    /// Returns a copy with `current_page` clamped into `[1, total_pages]`.
    ///
    /// The paginators never clamp; clamping is the consuming view's job.
    pub fn clamped(&self) -> Self {
        let last = self.total_pages().max(1);
        Self {
            current_page: self.current_page.clamp(1, last),
            ..*self
        }
    }
}

/// Computes `ceil(total_items / page_size)`, treating a zero page size as no pages.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size)
}

/// A single entry in the row of page buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "page", rename_all = "snake_case")]
pub enum PageButton {
    /// A clickable page number.
    Page(usize),
    /// The "..." marker between non-adjacent page numbers.
    Ellipsis,
}

/// Which page-button layout a view uses.
///
/// Both layouts are in use: the attendance view centres a window on the
/// current page while the payroll views show the first pages plus the last.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaginationStrategy {
    /// A window of five page buttons centred on the current page.
    #[default]
    SlidingWindow,
    /// Pages one to five, an ellipsis, then the last page.
    HeadAndTail,
}

/// The visible slice of a record list plus the page buttons to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSlice {
    /// Index of the first visible item.
    pub start_index: usize,
    /// One past the last visible item; never exceeds the item count.
    pub end_index: usize,
    /// Total number of pages.
    pub total_pages: usize,
    /// Page buttons in display order.
    pub page_buttons: Vec<PageButton>,
    /// Whether a "previous" control should be enabled.
    pub has_previous: bool,
    /// Whether a "next" control should be enabled.
    pub has_next: bool,
}

impl PageSlice {
    /// Number of visible items.
    pub fn len(&self) -> usize {
        self.end_index - self.start_index
    }

    /// Returns true if the slice shows nothing.
    pub fn is_empty(&self) -> bool {
        self.start_index == self.end_index
    }

    /// Applies the slice to a record list.
    ///
    /// Bounds are re-checked against `items` so a stale slice never panics.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let end = self.end_index.min(items.len());
        let start = self.start_index.min(end);
        &items[start..end]
    }
}
