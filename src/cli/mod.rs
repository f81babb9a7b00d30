//! Command-line interface.

mod estimate;
mod market;
mod output;

pub use estimate::{EstimateArgs, ProposalArgs, ShareArgs};
pub use market::MarketArgs;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::estimation::PricingEngine;

#[derive(Parser, Debug)]
#[command(
    name = "freelance-estimator",
    version,
    about = "Estimate price, hours and deadline for freelance software projects"
)]
pub struct Cli {
    /// Output machine-readable JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Log computed values to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Rate table JSON file (overrides ESTIMATOR_RATE_TABLE)
    #[arg(long, global = true)]
    pub rates: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Price a project and show the breakdown
    Estimate(EstimateArgs),

    /// Price a project and write a commercial proposal
    Proposal(ProposalArgs),

    /// Price a project and print a shareable link
    Share(ShareArgs),

    /// Show the values stored in a shared link or token
    Decode {
        /// Link or bare base64 token
        reference: String,
    },

    /// Show the active rate table
    Rates,

    /// Show market reference data for a project type
    Market(MarketArgs),
}

/// Run a parsed command line.
pub async fn run(cli: Cli, mut config: Config) -> anyhow::Result<()> {
    if let Some(path) = cli.rates {
        config.rate_table_path = Some(path);
    }

    let engine = PricingEngine::new(config.rate_table()?);

    match cli.command {
        Command::Estimate(args) => estimate::run_estimate(&engine, &config, &args, cli.json),
        Command::Proposal(args) => estimate::run_proposal(&engine, &config, &args, cli.json),
        Command::Share(args) => estimate::run_share(&engine, &config, &args, cli.json),
        Command::Decode { reference } => estimate::run_decode(&reference, cli.json),
        Command::Rates => output::print_rates(engine.table(), cli.json),
        Command::Market(args) => market::run_market(&engine, &config, &args, cli.json).await,
    }
}
