// src/main.rs — hodlbot entry point

use std::sync::Arc;

use clap::Parser;

use hodlbot::api::{self, ApiState};
use hodlbot::cli::{chat, Cli, Commands};
use hodlbot::core::orchestrator::Orchestrator;
use hodlbot::infra::config::Config;
use hodlbot::infra::logger;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logger::init_logging(&cli.log_level);

    if let Err(e) = run(cli).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = if let Some(ref path) = cli.config {
        Config::load_from(std::path::Path::new(path))?
    } else {
        Config::load()?
    };

    match cli.command {
        Some(Commands::Serve { port }) => {
            if let Some(port) = port {
                config.server.port = port;
            }
            let bot = Arc::new(Orchestrator::from_config(&config));
            api::start_server(&config, ApiState { bot }).await
        }
        Some(Commands::Chat) | None => {
            let bot = Orchestrator::from_config(&config);
            chat::run_chat(&bot)
        }
    }
}
