//! Contact Assistant - Main entry point
//!
//! Loads the address book, runs the interactive session on stdin/stdout and
//! saves the book when the session ends.

use anyhow::{Context, Result};
use contact_assistant::session::run_with_repository;
use contact_assistant::{CommandContext, Config, JsonFileBookRepository};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env();

    // Logging goes to stderr so it never mixes with the conversation on stdout
    let log_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Starting contact assistant with book at {}",
        config.address_book_path.display()
    );

    let repo = JsonFileBookRepository::new(&config.address_book_path);
    let ctx = CommandContext {
        upcoming_days: config.birthday_window_days,
        today: None,
    };

    run_with_repository(&repo, ctx, io::stdin().lock(), io::stdout().lock())
        .with_context(|| format!("session on {}", repo.path().display()))?;

    info!("Contact assistant shutdown complete");
    Ok(())
}
