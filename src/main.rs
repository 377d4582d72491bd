//! direwolf CLI - dispatch test suite runs against remote clouds
//!
//! Thin client over the direwolf test-orchestration REST API: list clouds,
//! kick off a suite run, and poll it to completion.

use clap::Parser;
use direwolf::commands::Commands;
use direwolf::{cli, common::logging};

#[derive(Parser)]
#[command(name = "dw", about = "Client for the direwolf test-orchestration API")]
#[command(version, long_about = None)]
struct Cli {
    /// API key (falls back to DIREWOLF_API_KEY, then the config file)
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// API host (falls back to DIREWOLF_HOST, then the config file)
    #[arg(long, global = true)]
    host: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() {
    logging::init_cli();

    let cli = Cli::parse();

    if let Err(e) = cli::dispatch(cli.command, cli.api_key, cli.host).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
