//! View module
//!
//! Assembles the navigation model a template iterates over: previous/next
//! links plus an ordered run of numbered page links, optionally limited to a
//! sliding window around the current page.

mod builder;
mod types;

pub use builder::{build_view, page_window};
pub use types::{PageItem, View};

#[cfg(test)]
mod tests;
