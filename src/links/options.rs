//! Link build options and default resolution

use crate::request::RequestContext;
use crate::types::{UrlMode, FORWARDED_HOST, FORWARDED_PROTO, SCHEME_HTTP, SCHEME_HTTPS};
use serde::{Deserialize, Serialize};

/// Query parameter carrying the page number unless overridden
pub const DEFAULT_PAGE_PARAM: &str = "page";

/// Options for building page links
///
/// Every field is optional. Unset fields (and empty strings) are filled in
/// from the request by [`BuildOptions::resolve`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildOptions {
    /// Relative or absolute links (default: relative)
    pub mode: UrlMode,

    /// Path to link to (default: the request path)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Query parameter name for the page number (default: `page`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_param: Option<String>,

    /// Scheme for absolute links (default: inferred from TLS / `X-Forwarded-Proto`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,

    /// Host for absolute links (default: `X-Forwarded-Host`, then the request host)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// Carry over the request's other query parameters (default: true)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_existing_query: Option<bool>,
}

impl BuildOptions {
    /// Create options with all defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the link mode
    pub fn mode(mut self, mode: UrlMode) -> Self {
        self.mode = mode;
        self
    }

    /// Shorthand for absolute mode
    pub fn absolute(self) -> Self {
        self.mode(UrlMode::Absolute)
    }

    /// Override the link path
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Override the page query parameter name
    pub fn page_param(mut self, param: impl Into<String>) -> Self {
        self.page_param = Some(param.into());
        self
    }

    /// Override the scheme for absolute links
    pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = Some(scheme.into());
        self
    }

    /// Override the host for absolute links
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Choose whether other query parameters are carried over
    pub fn keep_existing_query(mut self, keep: bool) -> Self {
        self.keep_existing_query = Some(keep);
        self
    }

    /// Merge these options over the defaults derived from `req`
    ///
    /// Pure: `self` is left untouched and a fresh value is returned.
    /// `scheme` and `host` stay empty in relative mode.
    pub fn resolve<R: RequestContext + ?Sized>(&self, req: &R) -> ResolvedOptions {
        let page_param = non_empty(self.page_param.as_deref())
            .unwrap_or(DEFAULT_PAGE_PARAM)
            .to_string();
        let path = non_empty(self.path.as_deref())
            .unwrap_or_else(|| req.path())
            .to_string();

        let (scheme, host) = if self.mode.is_absolute() {
            let scheme = non_empty(self.scheme.as_deref())
                .unwrap_or_else(|| detect_scheme(req))
                .to_string();
            let host = non_empty(self.host.as_deref())
                .or_else(|| non_empty(req.header(FORWARDED_HOST)))
                .or_else(|| non_empty(req.host()))
                .unwrap_or_default()
                .to_string();
            (scheme, host)
        } else {
            (String::new(), String::new())
        };

        ResolvedOptions {
            mode: self.mode,
            path,
            page_param,
            scheme,
            host,
            keep_existing_query: self.keep_existing_query.unwrap_or(true),
        }
    }
}

/// Build options with every default filled in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub mode: UrlMode,
    pub path: String,
    pub page_param: String,
    pub scheme: String,
    pub host: String,
    pub keep_existing_query: bool,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn detect_scheme<R: RequestContext + ?Sized>(req: &R) -> &'static str {
    let forwarded_https = req
        .header(FORWARDED_PROTO)
        .is_some_and(|proto| proto.eq_ignore_ascii_case(SCHEME_HTTPS));

    if req.is_secure() || forwarded_https {
        SCHEME_HTTPS
    } else {
        SCHEME_HTTP
    }
}
