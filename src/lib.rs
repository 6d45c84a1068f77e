// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # pagelinks
//!
//! Pagination metadata and page-link URLs for paged HTTP views.
//!
//! ## Features
//!
//! - **Paginator**: page count, offset, item count and neighbors from three integers
//! - **Page links**: rebuild the request URL with the page parameter rewritten,
//!   relative or absolute, honoring `X-Forwarded-Proto` / `X-Forwarded-Host`
//! - **Views**: previous/next links plus a sliding window of numbered pages
//! - **Framework-neutral**: everything reads the request through [`RequestContext`],
//!   with adapters for `http::Request` and an axum extractor
//!
//! ## Quick Start
//!
//! ```rust
//! use pagelinks::{build_view, Paginator, RequestSnapshot, View};
//!
//! let req = RequestSnapshot::from_url("http://localhost/items?q=rust&page=5").unwrap();
//!
//! let paginator = Paginator::compute(100, 5, 10);
//! assert_eq!(paginator.offset(), 40);
//!
//! let view = View::from_paginator(&req, &paginator, None, 5);
//! assert_eq!(view.prev_url, "/items?page=4&q=rust");
//! assert_eq!(view.pages.len(), 5);
//!
//! let same = build_view(&req, 5, 10, None, 5);
//! assert_eq!(view, same);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐    ┌──────────────────────────────────────┐
//! │  Paginator   │    │ RequestContext (path, query, header, │
//! │  (numbers)   │    │ is_secure, host)                     │
//! └──────┬───────┘    └──────────────────┬───────────────────┘
//!        │                               │
//!        │            ┌──────────────────┴───────────────────┐
//!        │            │ links: BuildOptions → page URL        │
//!        │            └──────────────────┬───────────────────┘
//!        │                               │
//!        └───────────────┬───────────────┘
//!                 ┌──────┴───────┐
//!                 │ view: View   │
//!                 └──────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Paginator arithmetic
pub mod pagination;

/// Request capability interface and adapters
pub mod request;

/// Page link URL building
pub mod links;

/// Navigation view assembly
pub mod view;

/// Settings for the CLI and server
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use links::{build_page_url, BuildOptions};
pub use pagination::Paginator;
pub use request::{RequestContext, RequestSnapshot};
pub use types::UrlMode;
pub use view::{build_view, PageItem, View};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
