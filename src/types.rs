//! Common types used throughout pagelinks
//!
//! Shared type aliases and small enums used by more than one module.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Type Aliases
// ============================================================================

/// Parsed query string: key to one-or-more values, in the order they appeared
pub type QueryValues = BTreeMap<String, Vec<String>>;

// ============================================================================
// URL Mode
// ============================================================================

/// Whether generated page links are relative or absolute
///
/// - `Relative`: `/courses?foo=bar&page=2`
/// - `Absolute`: `https://example.com/courses?foo=bar&page=2`
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum UrlMode {
    #[default]
    Relative,
    Absolute,
}

impl UrlMode {
    /// Check if this mode produces absolute URLs
    pub fn is_absolute(&self) -> bool {
        matches!(self, Self::Absolute)
    }
}

// ============================================================================
// Scheme
// ============================================================================

/// Scheme used for secure absolute links
pub const SCHEME_HTTPS: &str = "https";

/// Scheme used for plain absolute links
pub const SCHEME_HTTP: &str = "http";

/// Proxy header carrying the client-facing scheme
pub const FORWARDED_PROTO: &str = "X-Forwarded-Proto";

/// Proxy header carrying the client-facing host
pub const FORWARDED_HOST: &str = "X-Forwarded-Host";
