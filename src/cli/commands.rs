//! CLI commands and argument parsing

use crate::error::{Error, Result};
use crate::links::BuildOptions;
use crate::request::RequestSnapshot;
use crate::types::UrlMode;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Pagination metadata and page-link builder
#[derive(Parser, Debug)]
#[command(name = "pagelinks")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Settings file (YAML)
    #[arg(short, long, global = true)]
    pub settings: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute pagination metadata for a collection
    Compute {
        /// Total number of items in the collection
        #[arg(long, allow_negative_numbers = true)]
        total_items: i64,

        /// Requested page
        #[arg(long, default_value = "1", allow_negative_numbers = true)]
        page: i64,

        /// Items per page (default: from settings)
        #[arg(long, allow_negative_numbers = true)]
        per_page: Option<i64>,
    },

    /// Build the link to one page of a request URL
    Url {
        /// Current request URL (absolute)
        url: String,

        /// Page to link to
        #[arg(long, allow_negative_numbers = true)]
        page: i64,

        #[command(flatten)]
        link: LinkArgs,
    },

    /// Build the navigation view for a request URL
    View {
        /// Current request URL (absolute)
        url: String,

        /// Current page
        #[arg(long, allow_negative_numbers = true)]
        current: i64,

        /// Total pages
        #[arg(long, allow_negative_numbers = true)]
        total: i64,

        /// Sliding window width, 0 renders every page (default: from settings)
        #[arg(long, allow_negative_numbers = true)]
        window: Option<i64>,

        #[command(flatten)]
        link: LinkArgs,
    },

    /// Start HTTP server mode
    Serve {
        /// Port to listen on (default: from settings)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

/// Link building flags shared by `url` and `view`
#[derive(Args, Debug, Default, Clone)]
pub struct LinkArgs {
    /// Relative or absolute links
    #[arg(long, value_enum)]
    pub mode: Option<UrlMode>,

    /// Path to link to instead of the request path
    #[arg(long)]
    pub path: Option<String>,

    /// Query parameter carrying the page number
    #[arg(long)]
    pub page_param: Option<String>,

    /// Scheme for absolute links
    #[arg(long)]
    pub scheme: Option<String>,

    /// Host for absolute links
    #[arg(long)]
    pub host: Option<String>,

    /// Drop the request's other query parameters
    #[arg(long)]
    pub drop_query: bool,

    /// Request header as NAME:VALUE (repeatable)
    #[arg(short = 'H', long = "header")]
    pub headers: Vec<String>,

    /// Treat the request as arriving over TLS
    #[arg(long)]
    pub secure: bool,
}

impl LinkArgs {
    /// Layer these flags over the options from settings
    pub fn apply(&self, base: &BuildOptions) -> BuildOptions {
        let mut opts = base.clone();
        if let Some(mode) = self.mode {
            opts.mode = mode;
        }
        if let Some(path) = &self.path {
            opts.path = Some(path.clone());
        }
        if let Some(param) = &self.page_param {
            opts.page_param = Some(param.clone());
        }
        if let Some(scheme) = &self.scheme {
            opts.scheme = Some(scheme.clone());
        }
        if let Some(host) = &self.host {
            opts.host = Some(host.clone());
        }
        if self.drop_query {
            opts.keep_existing_query = Some(false);
        }
        opts
    }

    /// Build the request snapshot for `url` with the extra headers applied
    pub fn request(&self, url: &str) -> Result<RequestSnapshot> {
        let mut req = RequestSnapshot::from_url(url)?;
        if self.secure {
            req = req.secure(true);
        }
        for raw in &self.headers {
            let (name, value) = raw
                .split_once(':')
                .filter(|(name, _)| !name.trim().is_empty())
                .ok_or_else(|| Error::invalid_header(raw.as_str()))?;
            req = req.with_header(name.trim(), value.trim());
        }
        Ok(req)
    }
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one document per line)
    Json,
    /// Human-readable output
    Pretty,
}
