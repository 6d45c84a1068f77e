//! View model types

use serde::Serialize;

/// One numbered page link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageItem {
    /// Page number
    pub num: i64,
    /// Link to the page
    pub url: String,
    /// Whether this is the page being viewed
    pub active: bool,
}

/// Navigation model for rendering pagination links
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct View {
    /// Current page (at least 1)
    pub current: i64,
    /// Total pages (at least 1)
    pub total: i64,
    /// Link to the previous page, empty on the first page
    pub prev_url: String,
    /// Link to the next page, empty on the last page
    pub next_url: String,
    /// Page links in ascending order
    pub pages: Vec<PageItem>,
}

impl View {
    /// The active page link, if the current page falls inside the window
    pub fn active(&self) -> Option<&PageItem> {
        self.pages.iter().find(|p| p.active)
    }

    pub fn has_prev(&self) -> bool {
        !self.prev_url.is_empty()
    }

    pub fn has_next(&self) -> bool {
        !self.next_url.is_empty()
    }
}
