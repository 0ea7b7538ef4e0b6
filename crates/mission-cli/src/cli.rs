use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mctl")]
#[command(about = "mctl - personal kanban, notes, and links with quick capture")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute (defaults to serve if not provided)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file path (defaults to ~/.config/mission-control/config.toml)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Document file path (overrides config file)
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,

    /// Bind address (overrides config file)
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Bind port (overrides config file)
    #[arg(long, global = true)]
    pub port: Option<u16>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    Serve,
}
