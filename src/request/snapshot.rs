//! Owned request view
//!
//! `RequestSnapshot` copies the five readable pieces out of a request so they
//! can outlive it. The CLI builds one from a URL string, axum handlers receive
//! one as an extractor.

use super::context::{parse_query, RequestContext, SecureTransport};
use crate::error::Result;
use crate::types::QueryValues;
use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts};
use std::collections::HashMap;
use std::convert::Infallible;
use url::Url;

/// Owned snapshot of the request data used for link building
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestSnapshot {
    path: String,
    query: QueryValues,
    /// Keyed by lowercased header name, first value wins
    headers: HashMap<String, String>,
    secure: bool,
    host: Option<String>,
}

impl RequestSnapshot {
    /// Create a snapshot for a bare path with no query, headers or host
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    /// Build a snapshot from an absolute URL
    ///
    /// The URL's host (with any non-default port) becomes the request host,
    /// and an `https` scheme marks the connection as secure.
    pub fn from_url(raw: &str) -> Result<Self> {
        let url = Url::parse(raw)?;

        let host = url.host_str().map(|h| match url.port() {
            Some(port) => format!("{h}:{port}"),
            None => h.to_string(),
        });

        Ok(Self {
            path: url.path().to_string(),
            query: url.query().map(parse_query).unwrap_or_default(),
            headers: HashMap::new(),
            secure: url.scheme() == "https",
            host,
        })
    }

    /// Copy the relevant pieces out of request parts
    pub fn from_parts(parts: &Parts) -> Self {
        let mut headers = HashMap::new();
        for (name, value) in &parts.headers {
            if let Ok(value) = value.to_str() {
                headers
                    .entry(name.as_str().to_string())
                    .or_insert_with(|| value.to_string());
            }
        }

        let host = parts
            .headers
            .get(header::HOST)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
            .or_else(|| parts.uri.authority().map(|a| a.as_str().to_string()));

        Self {
            path: parts.uri.path().to_string(),
            query: parts.uri.query().map(parse_query).unwrap_or_default(),
            headers,
            secure: parts.uri.scheme_str() == Some("https")
                || parts.extensions.get::<SecureTransport>().is_some(),
            host,
        }
    }

    /// Replace the query with a parsed raw query string
    pub fn with_query(mut self, raw: &str) -> Self {
        self.query = parse_query(raw);
        self
    }

    /// Add a header; an existing value for the same name is kept
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers
            .entry(name.to_ascii_lowercase())
            .or_insert_with(|| value.into());
        self
    }

    /// Set the declared host
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Mark the connection as secure (or not)
    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }
}

impl RequestContext for RequestSnapshot {
    fn path(&self) -> &str {
        &self.path
    }

    fn query(&self) -> QueryValues {
        self.query.clone()
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    fn is_secure(&self) -> bool {
        self.secure
    }

    fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for RequestSnapshot
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        Ok(Self::from_parts(parts))
    }
}
