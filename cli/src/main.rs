//! CLI entrypoint for forkvote
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::Result;
use clap::Parser;
use forkvote_application::SessionService;
use forkvote_domain::{SeededTieBreak, ThreadRngTieBreak, TieBreak};
use forkvote_presentation::{Cli, ConfigLoader, ConsoleAnnouncer, SessionRepl};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    info!("Starting forkvote");

    // === Dependency Injection ===
    // Seeded tie-break for reproducible runs, thread RNG otherwise.
    let tie_break: Box<dyn TieBreak + Send> = match cli.seed {
        Some(seed) => Box::new(SeededTieBreak::from_seed(seed)),
        None => Box::new(ThreadRngTieBreak),
    };

    let service = Arc::new(SessionService::new(
        config.menu.clone(),
        tie_break,
        Arc::new(ConsoleAnnouncer),
    ));

    let speaker = cli
        .name
        .or(config.repl.speaker)
        .unwrap_or_else(|| "host".to_string());

    let repl = SessionRepl::new(service, speaker)
        .with_history_file(config.repl.history_file.map(PathBuf::from));

    repl.run().await?;

    Ok(())
}
