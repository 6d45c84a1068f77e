//! View assembly and window selection

use super::types::{PageItem, View};
use crate::links::BuildOptions;
use crate::pagination::Paginator;
use crate::request::RequestContext;
use std::ops::RangeInclusive;

/// Build the navigation view for `current` of `total` pages
///
/// `current` and `total` are raised to at least 1. `current` is not clamped
/// to `total`: a current page past the end yields no next link and a window
/// anchored at the last page, with no page marked active.
///
/// `window <= 0` (or `window >= total`) renders every page.
pub fn build_view<R: RequestContext + ?Sized>(
    req: &R,
    current: i64,
    total: i64,
    opts: Option<&BuildOptions>,
    window: i64,
) -> View {
    let current = current.max(1);
    let total = total.max(1);

    let resolved = match opts {
        Some(opts) => opts.resolve(req),
        None => BuildOptions::default().resolve(req),
    };
    let query = req.query();

    let prev_url = if current > 1 {
        resolved.page_url(&query, current - 1)
    } else {
        String::new()
    };
    let next_url = if current < total {
        resolved.page_url(&query, current + 1)
    } else {
        String::new()
    };

    let range = page_window(current, total, window);
    tracing::debug!(
        current,
        total,
        window,
        start = *range.start(),
        end = *range.end(),
        "Building pagination view"
    );

    let pages = range
        .map(|num| PageItem {
            num,
            url: resolved.page_url(&query, num),
            active: num == current,
        })
        .collect();

    View {
        current,
        total,
        prev_url,
        next_url,
        pages,
    }
}

/// Select the page numbers to render
///
/// With `0 < window < total`, returns `window` contiguous pages roughly
/// centered on `current`, shifted to stay within `[1, total]`. Otherwise
/// returns the full range `1..=total`.
pub fn page_window(current: i64, total: i64, window: i64) -> RangeInclusive<i64> {
    if window <= 0 || window >= total {
        return 1..=total;
    }

    // start <= last_start keeps the end within total, even at i64::MAX
    let last_start = total - window + 1;
    let half = window / 2;
    let start = current.saturating_sub(half).clamp(1, last_start);
    start..=start + (window - 1)
}

impl View {
    /// Build the view for a computed paginator
    pub fn from_paginator<R: RequestContext + ?Sized>(
        req: &R,
        paginator: &Paginator,
        opts: Option<&BuildOptions>,
        window: i64,
    ) -> Self {
        build_view(
            req,
            paginator.current_page(),
            paginator.total_pages(),
            opts,
            window,
        )
    }
}
