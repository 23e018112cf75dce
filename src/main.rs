//! solpipe CLI - Solidity build and deploy configuration
//!
//! Usage: solpipe [--project DIR] [--config FILE] [--json] [-v...] <COMMAND>
//!
//! Commands:
//!   sources     List the production source set
//!   profile     Show the compiler profile
//!   networks    List deployment networks
//!   target      Show one deployment target
//!   verify-key  Show the explorer verification credential

use is_terminal::IsTerminal;

use anyhow::Result;
use clap::Parser;
use tracing::Level;

use solpipe::presentation::{Cli, Commands, OutputFormat};

mod commands;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let format = OutputFormat::from_json_flag(cli.json);
    let project = cli.project.as_path();
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Sources => commands::sources::cmd_sources(project, config, format),
        Commands::Profile => commands::profile::cmd_profile(project, config, format),
        Commands::Networks => commands::networks::cmd_networks(project, config, format),
        Commands::Target { network } => {
            commands::target::cmd_target(project, config, &network, format)
        }
        Commands::VerifyKey { name, reveal } => {
            commands::verify_key::cmd_verify_key(project, config, &name, reveal, format)
        }
    }
}

/// Logs go to stderr so stdout stays parseable.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let stderr = std::io::stderr();
    let ansi = stderr.is_terminal();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .without_time()
        .init();
}
