//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, LinkArgs, OutputFormat};
use crate::config::{load_settings, Settings};
use crate::error::Result;
use crate::links::build_page_url;
use crate::pagination::Paginator;
use crate::view::{build_view, View};
use serde::Serialize;
use serde_json::json;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let settings = self.load_settings()?;

        match &self.cli.command {
            Commands::Compute {
                total_items,
                page,
                per_page,
            } => self.compute(&settings, *total_items, *page, *per_page),
            Commands::Url { url, page, link } => self.url(&settings, url, *page, link),
            Commands::View {
                url,
                current,
                total,
                window,
                link,
            } => self.view(&settings, url, *current, *total, *window, link),
            Commands::Serve { port } => {
                let port = port.unwrap_or(settings.server.port);
                crate::cli::serve(settings, port).await
            }
        }
    }

    /// Load settings from the `--settings` file, or use defaults
    fn load_settings(&self) -> Result<Settings> {
        match &self.cli.settings {
            Some(path) => {
                tracing::debug!("Loading settings from {}", path.display());
                load_settings(path)
            }
            None => Ok(Settings::default()),
        }
    }

    /// Compute paginator metadata
    fn compute(
        &self,
        settings: &Settings,
        total_items: i64,
        page: i64,
        per_page: Option<i64>,
    ) -> Result<()> {
        let paginator =
            Paginator::compute(total_items, page, per_page.unwrap_or(settings.per_page));

        self.emit(&paginator, || {
            format!(
                "Page {} of {} ({} items, showing {} from offset {})\nPrevious: {}\nNext: {}",
                paginator.current_page(),
                paginator.total_pages(),
                paginator.total_items(),
                paginator.item_count(),
                paginator.offset(),
                page_or_none(paginator.prev_page()),
                page_or_none(paginator.next_page()),
            )
        })
    }

    /// Build one page link
    fn url(&self, settings: &Settings, url: &str, page: i64, link: &LinkArgs) -> Result<()> {
        let req = link.request(url)?;
        let opts = link.apply(&settings.url);
        let page_url = build_page_url(&req, page, Some(&opts));

        self.emit(&json!({ "page": page, "url": page_url }), || page_url.clone())
    }

    /// Build the navigation view
    fn view(
        &self,
        settings: &Settings,
        url: &str,
        current: i64,
        total: i64,
        window: Option<i64>,
        link: &LinkArgs,
    ) -> Result<()> {
        let req = link.request(url)?;
        let opts = link.apply(&settings.url);
        let view = build_view(
            &req,
            current,
            total,
            Some(&opts),
            window.unwrap_or(settings.window),
        );

        self.emit(&view, || render_view(&view))
    }

    /// Print a value in the selected output format
    fn emit<T: Serialize>(&self, value: &T, pretty: impl FnOnce() -> String) -> Result<()> {
        match self.cli.format {
            OutputFormat::Json => println!("{}", serde_json::to_string(value)?),
            OutputFormat::Pretty => println!("{}", pretty()),
        }
        Ok(())
    }
}

fn page_or_none(page: i64) -> String {
    if page == 0 {
        "-".to_string()
    } else {
        page.to_string()
    }
}

/// Render a view as a text navigation bar followed by one link per line
fn render_view(view: &View) -> String {
    let mut bar = Vec::with_capacity(view.pages.len() + 2);
    if view.has_prev() {
        bar.push("«".to_string());
    }
    let active = view.active().map(|page| page.num);
    for page in &view.pages {
        if Some(page.num) == active {
            bar.push(format!("[{}]", page.num));
        } else {
            bar.push(page.num.to_string());
        }
    }
    if view.has_next() {
        bar.push("»".to_string());
    }

    let mut lines = vec![
        format!("Page {} of {}", view.current, view.total),
        bar.join(" "),
    ];
    if view.has_prev() {
        lines.push(format!("prev: {}", view.prev_url));
    }
    if view.has_next() {
        lines.push(format!("next: {}", view.next_url));
    }
    for page in &view.pages {
        lines.push(format!("{:>4}: {}", page.num, page.url));
    }
    lines.join("\n")
}
