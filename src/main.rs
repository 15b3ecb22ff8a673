// src/main.rs - Brightside entry point

use clap::Parser;

use brightside::cli::{self, Cli, Commands};
use brightside::infra::config::Config;
use brightside::infra::logger;

#[tokio::main]
async fn main() {
    // Initialize logging (respects RUST_LOG / BRIGHTSIDE_LOG)
    logger::init_logging("warn");

    if let Err(e) = run().await {
        eprintln!("❌ error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load config (falls back to defaults if no config.toml)
    let config = if let Some(ref path) = cli.config {
        Config::load_from(std::path::Path::new(path))?
    } else {
        Config::load()?
    };

    match cli.command {
        Commands::Convert { file, format } => {
            cli::convert::run_convert(&file, format.as_deref(), &config.convert).await
        }
        Commands::Grab { url } => cli::grab::run_grab(&url, &config.grab).await,
        Commands::News { category, limit } => {
            cli::news::run_news(&category, limit, &config.news).await
        }
        Commands::NewsAdd { category, url } => {
            cli::news::run_news_add(&category, &url, &config.news)
        }
        Commands::NewsRemove { category, url } => {
            cli::news::run_news_remove(&category, &url, &config.news)
        }
        Commands::Twitch { channel } => cli::twitch::run_twitch(&channel, &config.twitch).await,
        Commands::Setup { reset, silent } => {
            cli::setup::run_setup(reset, silent, &config.setup).await
        }
        Commands::Jack => cli::jack::run_jack(&config),
    }
}
