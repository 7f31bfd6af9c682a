//! Pagination window derivation.

use std::ops::RangeInclusive;

/// How many page-number buttons the pagination block shows at most.
const BUTTON_WINDOW: usize = 5;

/// A resolved page of the filtered view.
///
/// Derivation never fails: requested pages clamp into `1..=total_pages`,
/// and `total_pages` is at least 1 even for an empty view, so a valid
/// (possibly empty) slice window always exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// Current page, 1-based, always within `1..=total_pages`.
    pub page: usize,
    /// Total page count, at least 1.
    pub total_pages: usize,
    /// Slice start into the filtered view (inclusive).
    pub start: usize,
    /// Slice end into the filtered view (exclusive).
    pub end: usize,
    /// Total rows in the filtered view.
    pub total_rows: usize,
}

impl PageWindow {
    /// Derives the window for `requested_page` over `filtered_count` rows.
    pub fn derive(filtered_count: usize, page_size: usize, requested_page: usize) -> Self {
        let page_size = page_size.max(1);
        let total_pages = filtered_count.div_ceil(page_size).max(1);
        let page = requested_page.clamp(1, total_pages);
        let start = ((page - 1) * page_size).min(filtered_count);
        let end = (page * page_size).min(filtered_count);
        Self {
            page,
            total_pages,
            start,
            end,
            total_rows: filtered_count,
        }
    }

    /// Number of rows on this page.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the page shows no rows.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether a previous page exists.
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Whether a next page exists.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// The page numbers the pagination block displays.
    ///
    /// At most five consecutive numbers, centered on the current page where
    /// possible; near either boundary the window shifts so it still shows
    /// five (or fewer when there are fewer pages).
    pub fn button_window(&self) -> RangeInclusive<usize> {
        let mut start = self.page.saturating_sub(2).max(1);
        let end = (start + BUTTON_WINDOW - 1).min(self.total_pages);
        if end - start < BUTTON_WINDOW - 1 {
            start = end.saturating_sub(BUTTON_WINDOW - 1).max(1);
        }
        start..=end
    }
}
