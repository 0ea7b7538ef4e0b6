use anyhow::Result;
use clap::Parser;
use mission_store::{DocumentStore, JsonFileRepository};
use tracing::info;

mod cli;
mod config;

use cli::{Cli, Commands};
use config::AppConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    let env_filter = format!(
        "mission_cli={level},mission_web={level},mission_store={level}",
        level = log_level
    );
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(env_filter))
        .init();

    // Load configuration with CLI overrides
    let mut config = AppConfig::load(cli.config)?;
    config.apply_flags(cli.data_file, cli.host, cli.port);

    match cli.command {
        Some(Commands::Serve) | None => serve(config).await,
    }
}

async fn serve(config: AppConfig) -> Result<()> {
    info!(
        "mission control v{} using document {}",
        env!("CARGO_PKG_VERSION"),
        config.data_file.display()
    );

    let repository = JsonFileRepository::new(&config.data_file);
    let store = DocumentStore::new(repository).with_default_user(config.default_user.clone());
    let state = mission_web::build_state(store)?;

    mission_web::start_server(&config.server, state).await?;
    Ok(())
}
