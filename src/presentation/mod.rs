//! Presentation Layer
//!
//! - `cli` - argument parsing (clap)
//! - `factory` - wires infrastructure into use cases
//! - `output` - text and JSON rendering

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{Cli, Commands};
pub use output::OutputFormat;
