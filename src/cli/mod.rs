//! CLI module
//!
//! Command-line interface for computing pagination and page links.
//!
//! # Commands
//!
//! - `compute` - Paginator metadata for a collection
//! - `url` - A single page link for a request URL
//! - `view` - The full navigation view for a request URL
//! - `serve` - Start HTTP server mode

mod commands;
mod runner;
mod server;

pub use commands::{Cli, Commands, LinkArgs, OutputFormat};
pub use runner::Runner;
pub use server::{router, serve};
