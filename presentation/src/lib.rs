//! Presentation layer for forkvote
//!
//! This crate contains CLI definitions, output formatters, the console
//! announcer, configuration loading, and the interactive session REPL.

pub mod chat;
pub mod cli;
pub mod config;
pub mod output;

// Re-export commonly used types
pub use chat::SessionRepl;
pub use cli::commands::Cli;
pub use config::{AppConfig, ConfigLoader, OutputConfig, ReplConfig};
pub use output::console::ConsoleAnnouncer;
pub use output::formatter::ConsoleFormatter;
