//! Page URL construction

use super::options::{BuildOptions, ResolvedOptions};
use crate::request::RequestContext;
use crate::types::QueryValues;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use std::collections::BTreeMap;
use url::form_urlencoded;

/// Characters escaped in the path of an absolute link
///
/// `%` is left alone so request paths that are already escaped pass through
/// unchanged.
const PATH_ESCAPE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Build the URL for `page`, based on the current request
///
/// With `opts == None` this produces a relative link that keeps every other
/// query parameter, e.g. `/api/items?limit=20&page=3&q=test`.
pub fn build_page_url<R: RequestContext + ?Sized>(
    req: &R,
    page: i64,
    opts: Option<&BuildOptions>,
) -> String {
    let resolved = match opts {
        Some(opts) => opts.resolve(req),
        None => BuildOptions::default().resolve(req),
    };
    resolved.page_url(&req.query(), page)
}

impl ResolvedOptions {
    /// Build the URL for `page` from an already parsed query
    ///
    /// Lets callers that emit many links resolve options and parse the query
    /// once.
    pub fn page_url(&self, existing: &QueryValues, page: i64) -> String {
        let query = encode_query(existing, self, page);

        if !self.mode.is_absolute() {
            return format!("{}?{}", self.path, query);
        }

        if self.host.is_empty() {
            tracing::warn!(
                path = %self.path,
                "No host available for absolute page link; emitting URL without host"
            );
        }

        let needs_slash =
            !self.host.is_empty() && !self.path.is_empty() && !self.path.starts_with('/');
        let slash = if needs_slash { "/" } else { "" };

        let path = utf8_percent_encode(&self.path, PATH_ESCAPE);

        format!("{}://{}{}{}?{}", self.scheme, self.host, slash, path, query)
    }
}

/// Serialize the link query: sorted keys, form-urlencoded
///
/// Existing parameters are carried over (first value per key) when
/// `keep_existing_query` is set; any existing page parameter is always
/// replaced by `page`.
pub fn encode_query(existing: &QueryValues, opts: &ResolvedOptions, page: i64) -> String {
    let page = page.to_string();
    let mut pairs: BTreeMap<&str, &str> = BTreeMap::new();

    if opts.keep_existing_query {
        for (key, values) in existing {
            if *key == opts.page_param {
                continue;
            }
            if let Some(first) = values.first() {
                pairs.insert(key, first);
            }
        }
    }

    pairs.insert(&opts.page_param, &page);

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}
