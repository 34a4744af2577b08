//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose) are inherited by all subcommands
//! - `deploy` is the only verb with side effects; `plan` and `status` are
//!   read-only companions

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Caravan - ordered multi-resource deployment
#[derive(Parser, Debug)]
#[command(name = "caravan")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Output NDJSON events for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Deploy pending resources in dependency order
    Deploy {
        /// Path to the manifest
        #[arg(short, long, default_value = "caravan.toml")]
        manifest: PathBuf,

        /// Ledger path (default: caravan.ledger next to the manifest)
        #[arg(long)]
        ledger: Option<PathBuf>,

        /// Show what would run without invoking the deployer
        #[arg(long)]
        dry_run: bool,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Print the deployment order without deploying
    Plan {
        /// Path to the manifest
        #[arg(short, long, default_value = "caravan.toml")]
        manifest: PathBuf,

        /// Ledger path (default: caravan.ledger next to the manifest)
        #[arg(long)]
        ledger: Option<PathBuf>,
    },

    /// Show the recorded state of every resource
    Status {
        /// Path to the manifest
        #[arg(short, long, default_value = "caravan.toml")]
        manifest: PathBuf,

        /// Ledger path (default: caravan.ledger next to the manifest)
        #[arg(long)]
        ledger: Option<PathBuf>,
    },

    /// Create a starter manifest and deploy script
    Init {
        /// Directory to initialize
        #[arg(long, default_value = ".")]
        dir: PathBuf,

        /// Overwrite an existing manifest
        #[arg(short, long)]
        force: bool,
    },
}
