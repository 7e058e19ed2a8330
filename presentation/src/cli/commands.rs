//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for forkvote
#[derive(Parser, Debug)]
#[command(name = "forkvote")]
#[command(author, version, about = "Group food decisions by instant-runoff vote")]
#[command(long_about = r#"
forkvote runs a shared two-stage food vote:
1. Cuisine vote: ranked ballots narrow the cuisine list to one winner
2. Restaurant vote: ranked ballots pick a restaurant within that cuisine
3. Ordering: everyone submits what they want from the winner

Configuration files are loaded from (in priority order):
1. --config <path>       Explicit config file
2. ./forkvote.toml       Project-level config
3. ~/.config/forkvote/config.toml   Global config

Example:
  forkvote
  forkvote --name alice
  forkvote --seed 42 -vv --config ./lunch.toml
"#)]
pub struct Cli {
    /// Speaker name used for ballots and orders until /as switches it
    #[arg(short, long, value_name = "NAME")]
    pub name: Option<String>,

    /// Seed the tie-break RNG for reproducible deadlock draws
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
