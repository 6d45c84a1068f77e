//! Pagination module
//!
//! Derives page counts, offsets and neighbor pages from a total item count,
//! a requested page and a page size.
//!
//! # Overview
//!
//! `Paginator::compute` is total: any combination of integers produces a
//! usable result. Out-of-range pages are clamped, non-positive page sizes fall
//! back to [`DEFAULT_PER_PAGE`], and an empty collection always yields a single
//! empty page.

mod types;

pub use types::{Paginator, DEFAULT_PER_PAGE};
