//! Paginator value type
//!
//! All arithmetic is done on `i64` so callers can pass raw, unvalidated
//! numbers straight from a query string.

use serde::Serialize;
use std::ops::Range;

/// Page size used when the caller supplies zero or a negative value
pub const DEFAULT_PER_PAGE: i64 = 10;

/// Pagination metadata for one page of a bounded collection
///
/// Constructed once through [`Paginator::compute`]; the fields are private so a
/// computed value can't drift out of its invariants afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Paginator {
    per_page: i64,
    current_page: i64,
    total_items: i64,
    total_pages: i64,
    offset: i64,
    item_count: i64,
    has_previous: bool,
    has_next: bool,
    prev_page: i64,
    next_page: i64,
}

impl Paginator {
    /// Compute pagination metadata from raw inputs
    ///
    /// Never fails. `per_page <= 0` becomes [`DEFAULT_PER_PAGE`],
    /// `total_items <= 0` produces the single empty page, and `current_page` is
    /// clamped into `[1, total_pages]`.
    pub fn compute(total_items: i64, current_page: i64, per_page: i64) -> Self {
        let per_page = if per_page <= 0 {
            DEFAULT_PER_PAGE
        } else {
            per_page
        };

        if total_items <= 0 {
            return Self::empty(per_page);
        }

        let total_pages = total_items / per_page + i64::from(total_items % per_page != 0);
        let current_page = current_page.clamp(1, total_pages);
        let offset = (current_page - 1) * per_page;

        // The last page holds whatever is left over
        let item_count = if current_page < total_pages {
            per_page
        } else {
            total_items - per_page * (total_pages - 1)
        };

        let has_previous = current_page > 1;
        let has_next = current_page < total_pages;

        Self {
            per_page,
            current_page,
            total_items,
            total_pages,
            offset,
            item_count,
            has_previous,
            has_next,
            prev_page: if has_previous { current_page - 1 } else { 0 },
            next_page: if has_next { current_page + 1 } else { 0 },
        }
    }

    fn empty(per_page: i64) -> Self {
        Self {
            per_page,
            current_page: 1,
            total_items: 0,
            total_pages: 1,
            offset: 0,
            item_count: 0,
            has_previous: false,
            has_next: false,
            prev_page: 0,
            next_page: 0,
        }
    }

    /// Effective page size
    pub fn per_page(&self) -> i64 {
        self.per_page
    }

    /// Current page, always within `[1, total_pages]`
    pub fn current_page(&self) -> i64 {
        self.current_page
    }

    /// Total number of items (0 when the input was non-positive)
    pub fn total_items(&self) -> i64 {
        self.total_items
    }

    /// Total number of pages, at least 1
    pub fn total_pages(&self) -> i64 {
        self.total_pages
    }

    /// Zero-based index of the first item on the current page
    pub fn offset(&self) -> i64 {
        self.offset
    }

    /// Number of items on the current page
    pub fn item_count(&self) -> i64 {
        self.item_count
    }

    pub fn has_previous(&self) -> bool {
        self.has_previous
    }

    pub fn has_next(&self) -> bool {
        self.has_next
    }

    /// Previous page number, or 0 on the first page
    pub fn prev_page(&self) -> i64 {
        self.prev_page
    }

    /// Next page number, or 0 on the last page
    pub fn next_page(&self) -> i64 {
        self.next_page
    }

    /// Index range of the current page's items within the full collection
    ///
    /// Suitable for slicing an in-memory `Vec`: `&items[p.item_range()]`.
    pub fn item_range(&self) -> Range<usize> {
        let start = self.offset as usize;
        start..start + self.item_count as usize
    }
}
