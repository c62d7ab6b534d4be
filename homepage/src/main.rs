//! # homepage
//!
//! Offline companion to the in-page renderer: renders `home.json` the same
//! way the browser does, into a standalone preview page, and reports content
//! the renderer had to drop.
//!
//! ```bash
//! homepage render data/home.json --out preview.html
//! homepage check https://cms.example/data/home.json
//! homepage people exports/people.json
//! ```

mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the page or the report
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.parse().unwrap_or_default()),
        )
        .init();

    debug!("homepage v{}", env!("CARGO_PKG_VERSION"));

    match &cli.command {
        Command::Render { content, out } => commands::render(content, out.as_deref()).await,
        Command::Check { content, json } => commands::check(content, *json).await,
        Command::People { file, json } => commands::people(file, *json),
    }
}
