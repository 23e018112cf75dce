//! Error types for solpipe
//!
//! Library code returns `PipelineError` through `thiserror`; the binary wraps it in
//! `anyhow` at the command boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for solpipe operations
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Main error type for solpipe operations
#[derive(Error, Debug)]
pub enum PipelineError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed
    #[error("invalid config file {file}: {message}")]
    ConfigParse { file: PathBuf, message: String },

    /// Config value is syntactically fine but not acceptable
    #[error("invalid value for '{key}': {message}")]
    InvalidConfig { key: String, message: String },

    /// Sources directory does not exist
    #[error("sources directory not found: {path}")]
    SourcesNotFound { path: PathBuf },

    /// Include/exclude glob rejected by the matcher
    #[error("invalid source glob '{pattern}': {message}")]
    InvalidGlob { pattern: String, message: String },

    /// Network name is not in the catalog
    #[error(
        "unknown network '{}'{}; known networks: {}",
        .name,
        .suggestion.as_ref().map(|s| format!(" (did you mean '{}'?)", s)).unwrap_or_default(),
        .known.join(", ")
    )]
    UnknownNetwork {
        name: String,
        suggestion: Option<String>,
        known: Vec<String>,
    },

    /// Network family name is not recognised
    #[error("unknown network family '{name}'")]
    UnknownNetworkFamily { name: String },

    /// Two catalog entries share a name
    #[error("duplicate network name '{name}' in catalog")]
    DuplicateNetwork { name: String },

    /// Two catalog entries share a chain id
    #[error("duplicate chain id {chain_id} in catalog")]
    DuplicateChainId { chain_id: u64 },

    /// Endpoint is not a usable http(s) URL
    #[error("invalid endpoint '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },
}
