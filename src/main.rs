//! Contact Book - Main entry point
//!
//! Loads the saved address book and runs the interactive command loop on
//! stdin/stdout. Logs go to stderr.

use anyhow::Result;
use contact_book::repositories::{BookRepository, JsonFileRepository};
use contact_book::{run_session, CommandRouter, Config, ConsoleView};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env();

    // Initialize logging (stderr only to keep the dialogue on stdout clean)
    let fallback_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "warn".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
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

    info!("Using data file {}", config.data_file.display());

    let repository = Arc::new(JsonFileRepository::new(config.data_file.clone()));
    let book = repository.load();

    let mut router = CommandRouter::new(book, repository).with_autosave(config.autosave);
    let mut view = ConsoleView::stdio();

    run_session(&mut router, &mut view)?;

    info!("Contact book session finished");
    Ok(())
}
