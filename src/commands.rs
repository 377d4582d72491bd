//! CLI command definitions
//!
//! Defines the clap commands for the direwolf CLI.

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// List available clouds and exit
    #[command(alias = "list-clouds")]
    Clouds,

    /// Dispatch a suite run and poll it to completion
    Run {
        /// Cloud domain to run against
        #[arg(long)]
        domain: String,

        /// Cloud region (e.g. us, eu)
        #[arg(long)]
        region: String,

        /// Suite label to run
        #[arg(long)]
        suite: String,

        /// Print the run id and exit without waiting for completion
        #[arg(long)]
        no_wait: bool,

        /// Seconds between status polls (default: 1)
        #[arg(long)]
        interval: Option<u64>,
    },

    /// Show the current status of a run
    Status {
        /// Run id as printed when the run was dispatched
        id: String,
    },

    /// Re-attach to an existing run and poll it to completion
    Watch {
        /// Run id
        id: String,

        /// Seconds between status polls (default: 1)
        #[arg(long)]
        interval: Option<u64>,
    },
}
