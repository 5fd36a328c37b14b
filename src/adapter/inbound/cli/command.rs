//! Command-line interface definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Betting slip over live or sample football odds
#[derive(Parser, Debug)]
#[command(name = "parlay")]
#[command(version, about)]
pub struct Cli {
    /// Path to configuration file (built-in defaults when omitted)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Skip the odds provider and use the sample matches
    #[arg(long, global = true)]
    pub offline: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Load the match list and print it
    Matches,

    /// Build a slip interactively from stdin
    Play,
}
