//! Common test utilities for solpipe CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated project directory plus a scrubbed environment
//! - Fixtures: small Solidity and config snippets

pub mod env;
pub mod fixtures;

#[allow(unused_imports)]
pub use env::*;
#[allow(unused_imports)]
pub use fixtures::*;
