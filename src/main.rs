use clap::Parser;
use parlay::adapter::inbound::cli::{self, command::Cli};
use parlay::infrastructure::config::settings::Config;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match Config::load(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Failed to load config: {e}");
                std::process::exit(1);
            }
        },
        None => Config::from_env(),
    };

    config.init_logging();
    info!("parlay starting");

    tokio::select! {
        result = cli::run(&cli, &config) => {
            if let Err(e) = result {
                error!(error = %e, "Fatal error");
                std::process::exit(1);
            }
        }
        _ = signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    info!("parlay stopped");
}
