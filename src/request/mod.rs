//! Request module
//!
//! The narrow view of an incoming HTTP request that link building needs.
//!
//! # Overview
//!
//! Link building only ever reads five things from a request: its path, its
//! query string, a header by name, whether the connection is encrypted, and
//! the declared host. [`RequestContext`] captures exactly that, so the core
//! never depends on a concrete framework type. Adapters are provided for
//! `http::Request`, `http::request::Parts`, and the owned [`RequestSnapshot`]
//! (which doubles as an axum extractor).

mod context;
mod snapshot;

pub use context::{parse_query, RequestContext, SecureTransport};
pub use snapshot::RequestSnapshot;
