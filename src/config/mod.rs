//! Configuration module for solpipe
//!
//! Configuration is resolved once, at startup, in this order:
//! 1. Environment variables (`SOLPIPE_*` overrides, plus secrets)
//! 2. `.env` in the project root (only for keys the process env lacks)
//! 3. Project config (`solpipe.toml`)
//! 4. Built-in defaults
//!
//! The environment is read through an injected [`EnvSource`](crate::domain::ports::EnvSource);
//! nothing below this module calls `std::env` directly.

mod env;
pub mod env_validator;
mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use env::{capture_secrets, with_env_overrides, SIGNING_SECRET_VAR};
pub use loader::{load_project, LoadedConfig, CONFIG_FILE_NAME};
pub use types::{Config, OptimizerConfig, SolidityConfig, SourcesConfig};
