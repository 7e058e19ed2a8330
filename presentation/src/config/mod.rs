//! Presentation-level configuration
//!
//! Configuration for output formatting and REPL behavior; the menu itself
//! is configured through the domain [`Menu`](forkvote_domain::Menu) type in
//! [`loader::AppConfig`].

pub mod loader;

use serde::{Deserialize, Serialize};

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// REPL configuration for the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReplConfig {
    /// Path to history file
    pub history_file: Option<String>,
    /// Default speaker name when --name is not given
    pub speaker: Option<String>,
}

pub use loader::{AppConfig, ConfigLoader};
