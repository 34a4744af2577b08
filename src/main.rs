//! Caravan CLI - ordered multi-resource deployment
//!
//! Usage: caravan <COMMAND>
//!
//! Commands:
//!   deploy  Deploy pending resources in dependency order
//!   plan    Print the deployment order without deploying
//!   status  Show the recorded state of every resource
//!   init    Create a starter manifest and deploy script

use anyhow::Result;
use clap::Parser;

use caravan::cli::{Cli, Commands};
use caravan::commands::{cmd_deploy, cmd_init, cmd_plan, cmd_status};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Deploy {
            manifest,
            ledger,
            dry_run,
            yes,
        } => cmd_deploy(
            &manifest,
            ledger.as_deref(),
            dry_run,
            yes,
            cli.json,
            cli.verbose,
            cli.color,
        ),
        Commands::Plan { manifest, ledger } => cmd_plan(
            &manifest,
            ledger.as_deref(),
            cli.json,
            cli.verbose,
            cli.color,
        ),
        Commands::Status { manifest, ledger } => cmd_status(
            &manifest,
            ledger.as_deref(),
            cli.json,
            cli.verbose,
            cli.color,
        ),
        Commands::Init { dir, force } => cmd_init(&dir, force, cli.json, cli.color),
    }
}
