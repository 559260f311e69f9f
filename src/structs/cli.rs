use std::path::PathBuf;
use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "parity")]
#[clap(about = "Parity security analysis for Solana programs", version, long_about = None)]
pub struct Cli {
    /// Config file, defaults to ~/.parity/config.toml
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    /// Overrides the configured API key
    #[clap(long, global = true)]
    pub api_key: Option<String>,

    #[clap(long, global = true)]
    pub base_url: Option<String>,

    #[clap(subcommand)]
    pub command: Commands,
}
