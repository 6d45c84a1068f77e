//! Settings for the CLI and server
//!
//! Settings are read from a YAML file. Every field has a default, so an empty
//! file (or no file at all) is valid.
//!
//! ```yaml
//! per_page: 20
//! window: 5
//! url:
//!   mode: absolute
//!   page_param: p
//! server:
//!   port: 8080
//!   max_pages: 100
//! ```

use crate::error::{Error, Result, ResultExt};
use crate::links::BuildOptions;
use crate::pagination::DEFAULT_PER_PAGE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// ============================================================================
// Top-Level Settings
// ============================================================================

/// Complete settings loaded from YAML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Page size used when a request doesn't specify one
    pub per_page: i64,

    /// Sliding window width for page links (0 = render every page)
    pub window: i64,

    /// Link building options
    pub url: BuildOptions,

    /// HTTP server settings
    pub server: ServerSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
            window: 0,
            url: BuildOptions::default(),
            server: ServerSettings::default(),
        }
    }
}

// ============================================================================
// Server Settings
// ============================================================================

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Port to listen on
    pub port: u16,

    /// Most page links one `/paginate` response may render; a wider (or
    /// unbounded) window is narrowed to this
    pub max_pages: i64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 8080,
            max_pages: 100,
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Load settings from a YAML file
pub fn load_settings(path: impl AsRef<Path>) -> Result<Settings> {
    let path = path.as_ref();
    let content = match fs::read_to_string(path) {
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }
        read => read.with_context(|| {
            format!("Failed to read settings file '{}'", path.display())
        })?,
    };
    load_settings_from_str(&content)
}

/// Load settings from a YAML string
pub fn load_settings_from_str(yaml: &str) -> Result<Settings> {
    // serde_yaml rejects an empty document, treat it as all defaults
    if yaml.trim().is_empty() {
        return Ok(Settings::default());
    }

    let settings: Settings = serde_yaml::from_str(yaml)?;
    validate_settings(&settings)?;
    Ok(settings)
}

/// Validate loaded settings
fn validate_settings(settings: &Settings) -> Result<()> {
    if settings.window < 0 {
        return Err(Error::invalid_value(
            "window",
            format!("must not be negative, got {}", settings.window),
        ));
    }

    if settings.server.max_pages < 1 {
        return Err(Error::invalid_value(
            "server.max_pages",
            format!("must be at least 1, got {}", settings.server.max_pages),
        ));
    }

    if settings.url.page_param.as_deref() == Some("") {
        return Err(Error::invalid_value("url.page_param", "must not be empty"));
    }

    Ok(())
}
