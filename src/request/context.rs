//! Request capability trait and `http` adapters

use crate::types::QueryValues;
use axum::http::{header, request::Parts, HeaderMap, Request, Uri};
use url::form_urlencoded;

/// Read-only access to the parts of a request used for link building
pub trait RequestContext {
    /// Request path, e.g. `/api/items`
    fn path(&self) -> &str;

    /// Parsed query string
    fn query(&self) -> QueryValues;

    /// Header value by name (case-insensitive)
    fn header(&self, name: &str) -> Option<&str>;

    /// Whether the request arrived over an encrypted connection
    fn is_secure(&self) -> bool;

    /// Host the request was addressed to, including any port
    fn host(&self) -> Option<&str>;
}

/// Marker extension set by a TLS-terminating layer on secure connections
///
/// `http::Request` carries no connection state of its own, so a server that
/// terminates TLS inserts this into the request extensions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SecureTransport;

/// Parse a raw query string (without the leading `?`)
pub fn parse_query(raw: &str) -> QueryValues {
    let mut values = QueryValues::new();
    for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
        values
            .entry(key.into_owned())
            .or_default()
            .push(value.into_owned());
    }
    values
}

fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

fn host_of<'a>(headers: &'a HeaderMap, uri: &'a Uri) -> Option<&'a str> {
    headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .or_else(|| uri.authority().map(|a| a.as_str()))
}

fn query_of(uri: &Uri) -> QueryValues {
    uri.query().map(parse_query).unwrap_or_default()
}

impl<B> RequestContext for Request<B> {
    fn path(&self) -> &str {
        self.uri().path()
    }

    fn query(&self) -> QueryValues {
        query_of(self.uri())
    }

    fn header(&self, name: &str) -> Option<&str> {
        header_value(self.headers(), name)
    }

    fn is_secure(&self) -> bool {
        self.uri().scheme_str() == Some("https")
            || self.extensions().get::<SecureTransport>().is_some()
    }

    fn host(&self) -> Option<&str> {
        host_of(self.headers(), self.uri())
    }
}

impl RequestContext for Parts {
    fn path(&self) -> &str {
        self.uri.path()
    }

    fn query(&self) -> QueryValues {
        query_of(&self.uri)
    }

    fn header(&self, name: &str) -> Option<&str> {
        header_value(&self.headers, name)
    }

    fn is_secure(&self) -> bool {
        self.uri.scheme_str() == Some("https")
            || self.extensions.get::<SecureTransport>().is_some()
    }

    fn host(&self) -> Option<&str> {
        host_of(&self.headers, &self.uri)
    }
}
