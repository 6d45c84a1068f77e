//! Page link module
//!
//! Rebuilds the current request URL with a single query parameter (the page
//! number) rewritten.
//!
//! # Overview
//!
//! - [`BuildOptions`] - caller-facing options, every field optional
//! - [`ResolvedOptions`] - options merged with request-derived defaults
//! - [`build_page_url`] - one link for one page number
//!
//! Other query parameters are preserved by default (first value only when a
//! key repeats) and the query is always serialized with keys sorted, so the
//! same request and page always produce the same string.

mod builder;
mod options;

pub use builder::{build_page_url, encode_query};
pub use options::{BuildOptions, ResolvedOptions, DEFAULT_PAGE_PARAM};
