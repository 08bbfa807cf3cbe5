mod config;
mod evaluate;
mod export;
mod models;
mod money;
mod run;
mod ui;

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if run::print_info(args.get(1..).unwrap_or_default()) {
        return Ok(());
    }

    let config = config::Config::load()?;
    init_logging(&config)?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "budgetadvisor starting");

    match args.len() {
        1 => run::as_tui(&config),
        _ => run::as_cli(&args, &config),
    }
}

/// The TUI owns the terminal, so logs go to a file in the data directory.
fn init_logging(config: &config::Config) -> Result<()> {
    let log_path = config.log_path()?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file: {}", log_path.display()))?;

    let filter = EnvFilter::try_new(&config.log_filter)
        .with_context(|| format!("Invalid log filter: {}", config.log_filter))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise logging: {e}"))
}
