//! Noughts - terminal tic-tac-toe

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use noughts_tui::{Cli, TuiConfig};
use std::path::Path;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::load_or_default(cli.config.as_deref())?.with_overrides(&cli);

    init_tracing(config.log_file())?;

    noughts_tui::run(config).await
}

/// Sends logs to a file so they don't interfere with the TUI.
fn init_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,noughts=debug,noughts_tui=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}
