//! Pagination slicing and page-button layouts.
//!
//! This module computes the visible index range of a paginated table and the
//! page buttons to show under it. Two button layouts exist side by side and are
//! selected per view through the [`Paginator`] trait.

use crate::models::{PageButton, PageSlice, PaginationStrategy, total_pages};

/// Number of numbered buttons shown by both layouts.
pub const PAGE_WINDOW: usize = 5;

/// A page-button layout.
pub trait Paginator: Send + Sync {
    /// Returns the buttons to render for `total_pages` pages while `current_page` is shown.
    fn page_buttons(&self, total_pages: usize, current_page: usize) -> Vec<PageButton>;
}

/// Shows up to five consecutive pages centred on the current page.
///
/// The window is clamped to `[1, total_pages]`, so near either end it shifts
/// rather than shrinking.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::{Paginator, SlidingWindowPaginator};
/// use attendance_engine::models::PageButton;
///
/// let buttons = SlidingWindowPaginator.page_buttons(10, 6);
/// assert_eq!(buttons, (4..=8).map(PageButton::Page).collect::<Vec<_>>());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SlidingWindowPaginator;

impl Paginator for SlidingWindowPaginator {
    fn page_buttons(&self, total_pages: usize, current_page: usize) -> Vec<PageButton> {
        if total_pages == 0 {
            return Vec::new();
        }

        let current = current_page.clamp(1, total_pages);
        let half = PAGE_WINDOW / 2;
        let mut start = current.saturating_sub(half).max(1);
        let end = (start + PAGE_WINDOW - 1).min(total_pages);
        start = end.saturating_sub(PAGE_WINDOW - 1).max(1);

        (start..=end).map(PageButton::Page).collect()
    }
}

/// Shows pages one to five, an ellipsis and the last page.
///
/// With five pages or fewer every page gets a button. The layout does not
/// move with the current page.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::{HeadAndTailPaginator, Paginator};
/// use attendance_engine::models::PageButton;
///
/// let buttons = HeadAndTailPaginator.page_buttons(9, 7);
/// assert_eq!(buttons.len(), 7);
/// assert_eq!(buttons[5], PageButton::Ellipsis);
/// assert_eq!(buttons[6], PageButton::Page(9));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadAndTailPaginator;

impl Paginator for HeadAndTailPaginator {
    fn page_buttons(&self, total_pages: usize, _current_page: usize) -> Vec<PageButton> {
        if total_pages <= PAGE_WINDOW {
            return (1..=total_pages).map(PageButton::Page).collect();
        }

        let mut buttons: Vec<PageButton> = (1..=PAGE_WINDOW).map(PageButton::Page).collect();
        buttons.push(PageButton::Ellipsis);
        buttons.push(PageButton::Page(total_pages));
        buttons
    }
}

impl PaginationStrategy {
    /// Returns the paginator implementing this strategy.
    pub fn paginator(&self) -> &'static dyn Paginator {
        match self {
            PaginationStrategy::SlidingWindow => &SlidingWindowPaginator,
            PaginationStrategy::HeadAndTail => &HeadAndTailPaginator,
        }
    }
}

/// Computes the visible slice and page buttons for a table.
///
/// `start_index = (current_page - 1) * page_size` and
/// `end_index = min(start_index + page_size, total_items)`. A page beyond the
/// last one yields an empty slice positioned at `total_items`; page 0 is read
/// as page 1 and a zero page size yields an empty slice with no buttons.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::{paginate, HeadAndTailPaginator};
///
/// let page = paginate(47, 6, 8, &HeadAndTailPaginator);
/// assert_eq!((page.start_index, page.end_index), (42, 47));
/// assert_eq!(page.total_pages, 8);
/// assert!(!page.has_next);
/// ```
pub fn paginate(
    total_items: usize,
    page_size: usize,
    current_page: usize,
    paginator: &dyn Paginator,
) -> PageSlice {
    let pages = total_pages(total_items, page_size);
    let current = current_page.max(1);

    let start_index = (current - 1)
        .saturating_mul(page_size)
        .min(total_items);
    let end_index = start_index.saturating_add(page_size).min(total_items);

    PageSlice {
        start_index,
        end_index,
        total_pages: pages,
        page_buttons: paginator.page_buttons(pages, current),
        has_previous: current > 1 && pages > 0,
        has_next: current < pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pages(range: std::ops::RangeInclusive<usize>) -> Vec<PageButton> {
        range.map(PageButton::Page).collect()
    }

    // ==========================================================================
    // Slicing
    // ==========================================================================
    #[test]
    fn test_last_partial_page() {
        let slice = paginate(47, 6, 8, &SlidingWindowPaginator);
        assert_eq!(slice.start_index, 42);
        assert_eq!(slice.end_index, 47);
        assert_eq!(slice.len(), 5);
    }

    #[test]
    fn test_empty_list() {
        let slice = paginate(0, 6, 1, &HeadAndTailPaginator);
        assert_eq!(slice.start_index, 0);
        assert_eq!(slice.end_index, 0);
        assert!(slice.is_empty());
        assert_eq!(slice.total_pages, 0);
        assert!(slice.page_buttons.is_empty());
        assert!(!slice.has_previous);
        assert!(!slice.has_next);
    }

    #[test]
    fn test_page_beyond_last_is_empty() {
        let slice = paginate(47, 6, 20, &SlidingWindowPaginator);
        assert_eq!(slice.start_index, 47);
        assert_eq!(slice.end_index, 47);
        assert!(slice.is_empty());
    }

    #[test]
    fn test_page_zero_reads_as_first_page() {
        let slice = paginate(47, 6, 0, &SlidingWindowPaginator);
        assert_eq!((slice.start_index, slice.end_index), (0, 6));
        assert!(!slice.has_previous);
        assert!(slice.has_next);
    }

    #[test]
    fn test_zero_page_size_is_empty() {
        let slice = paginate(47, 0, 3, &HeadAndTailPaginator);
        assert!(slice.is_empty());
        assert_eq!(slice.total_pages, 0);
        assert!(slice.page_buttons.is_empty());
    }

    #[test]
    fn test_slice_applies_to_records() {
        let records: Vec<usize> = (0..47).collect();
        let slice = paginate(records.len(), 6, 2, &SlidingWindowPaginator);
        assert_eq!(slice.slice(&records), &[6, 7, 8, 9, 10, 11]);
    }

    // ==========================================================================
    // Sliding window
    // ==========================================================================
    #[test]
    fn test_sliding_window_few_pages() {
        assert_eq!(SlidingWindowPaginator.page_buttons(3, 2), pages(1..=3));
    }

    #[test]
    fn test_sliding_window_near_start() {
        assert_eq!(SlidingWindowPaginator.page_buttons(10, 1), pages(1..=5));
        assert_eq!(SlidingWindowPaginator.page_buttons(10, 2), pages(1..=5));
        assert_eq!(SlidingWindowPaginator.page_buttons(10, 3), pages(1..=5));
    }

    #[test]
    fn test_sliding_window_centred() {
        assert_eq!(SlidingWindowPaginator.page_buttons(10, 4), pages(2..=6));
        assert_eq!(SlidingWindowPaginator.page_buttons(10, 7), pages(5..=9));
    }

    #[test]
    fn test_sliding_window_near_end() {
        assert_eq!(SlidingWindowPaginator.page_buttons(10, 9), pages(6..=10));
        assert_eq!(SlidingWindowPaginator.page_buttons(10, 10), pages(6..=10));
        // Out of range current page clamps to the last window
        assert_eq!(SlidingWindowPaginator.page_buttons(10, 40), pages(6..=10));
    }

    // ==========================================================================
    // Head and tail
    // ==========================================================================
    #[test]
    fn test_head_and_tail_few_pages() {
        assert_eq!(HeadAndTailPaginator.page_buttons(5, 5), pages(1..=5));
        assert!(HeadAndTailPaginator.page_buttons(0, 1).is_empty());
    }

    #[test]
    fn test_head_and_tail_many_pages() {
        let mut expected = pages(1..=5);
        expected.push(PageButton::Ellipsis);
        expected.push(PageButton::Page(12));

        assert_eq!(HeadAndTailPaginator.page_buttons(12, 1), expected);
        // The layout does not follow the current page
        assert_eq!(HeadAndTailPaginator.page_buttons(12, 9), expected);
    }

    #[test]
    fn test_strategy_selects_paginator() {
        assert_eq!(
            PaginationStrategy::HeadAndTail
                .paginator()
                .page_buttons(8, 1)
                .len(),
            7
        );
        assert_eq!(
            PaginationStrategy::SlidingWindow
                .paginator()
                .page_buttons(8, 1)
                .len(),
            5
        );
    }

    // ==========================================================================
    // Properties
    // ==========================================================================
    proptest! {
        #[test]
        fn prop_slice_never_exceeds_bounds(
            total in 0usize..10_000,
            size in 1usize..200,
            page in 0usize..500,
        ) {
            let slice = paginate(total, size, page, &SlidingWindowPaginator);
            prop_assert!(slice.start_index <= slice.end_index);
            prop_assert!(slice.end_index <= total);
            prop_assert!(slice.len() <= size);
        }

        #[test]
        fn prop_sliding_window_contains_current_page(
            total_pages in 1usize..500,
            page in 1usize..500,
        ) {
            let current = page.min(total_pages);
            let buttons = SlidingWindowPaginator.page_buttons(total_pages, current);
            prop_assert_eq!(buttons.len(), total_pages.min(PAGE_WINDOW));
            prop_assert!(buttons.contains(&PageButton::Page(current)));
        }
    }
}
