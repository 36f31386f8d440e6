//! CLI for the swb web resource fetcher.

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::{Path, PathBuf};
use swb_core::config::{self, RenderMode, SwbConfig};
use swb_core::{locator, render, Fetcher};

/// Page file looked up next to the executable when nothing else is configured.
const DEFAULT_PAGE_FILE: &str = "default.html";

/// Fetch a page over http, https, file or data and print it.
#[derive(Debug, Parser)]
#[command(name = "swb")]
#[command(about = "SWB: minimal web resource fetcher", long_about = None)]
pub struct Cli {
    /// Locator to load, e.g. http://example.com/, file:///tmp/a.html, data:,hi.
    /// Defaults to the configured start page.
    pub locator: Option<String>,

    /// Print the body as received instead of stripping tags.
    #[arg(long)]
    pub raw: bool,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        cli.run(&cfg)
    }

    fn run(&self, cfg: &SwbConfig) -> Result<()> {
        let raw = match &self.locator {
            Some(raw) => raw.clone(),
            None => default_locator(cfg)?,
        };
        let locator = locator::parse(&raw).with_context(|| format!("parse {}", raw))?;
        let body = Fetcher::new()
            .retrieve(&locator)
            .with_context(|| format!("retrieve {}", locator))?;

        let mut out = io::stdout().lock();
        match self.render_mode(cfg) {
            RenderMode::Text => render::show(&body, &mut out)?,
            RenderMode::Raw => {
                io::Write::write_all(&mut out, body.as_bytes())?;
                io::Write::flush(&mut out)?;
            }
        }
        Ok(())
    }

    /// `--raw` wins over the configured mode.
    fn render_mode(&self, cfg: &SwbConfig) -> RenderMode {
        if self.raw {
            RenderMode::Raw
        } else {
            cfg.render
        }
    }
}

/// `file://` locator for the configured start page, else `default.html`
/// beside the executable.
fn default_locator(cfg: &SwbConfig) -> Result<String> {
    let page = match &cfg.default_page {
        Some(page) => page.clone(),
        None => {
            let exe = std::env::current_exe().context("locate executable")?;
            exe_dir(&exe).join(DEFAULT_PAGE_FILE)
        }
    };
    Ok(file_locator(&page))
}

fn exe_dir(exe: &Path) -> PathBuf {
    exe.parent().map(Path::to_path_buf).unwrap_or_default()
}

fn file_locator(page: &Path) -> String {
    format!("file://{}", page.display())
}
