//! CLI module graph.

pub mod command;
pub mod input;
pub mod matches;
pub mod output;
pub mod play;
pub mod render;

use crate::error::Result;
use crate::infrastructure::bootstrap::build_odds_source;
use crate::infrastructure::config::settings::Config;
use command::{Cli, Commands};

/// Dispatch a parsed command line.
pub async fn run(cli: &Cli, config: &Config) -> Result<()> {
    let source = build_odds_source(config, cli.offline);
    match cli.command {
        Commands::Matches => matches::execute(config, source.as_ref()).await,
        Commands::Play => play::execute(config, source.as_ref()).await,
    }
}
