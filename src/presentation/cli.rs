//! CLI Argument Parsing
//!
//! Global flags (--project, --config, --json, --verbose) are inherited by all
//! subcommands. Every command is read-only.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// solpipe - Solidity build and deploy configuration
#[derive(Parser, Debug)]
#[command(name = "solpipe")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Project root (holds solpipe.toml and .env)
    #[arg(long, global = true, default_value = ".")]
    pub project: PathBuf,

    /// Config file to use instead of <project>/solpipe.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format for scripts and CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List the Solidity sources that go into the production build
    Sources,

    /// Show the compiler profile and its fingerprint
    Profile,

    /// List the supported deployment networks
    Networks,

    /// Show connection and signing parameters for one network
    Target {
        /// Network name, e.g. bsc or bscTest
        network: String,
    },

    /// Show the explorer verification credential for a network or family
    VerifyKey {
        /// Network name (bscTest) or family (bsc, ethereum)
        name: String,

        /// Print the API key itself
        #[arg(long)]
        reveal: bool,
    },
}
