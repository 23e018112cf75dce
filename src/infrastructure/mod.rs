//! Infrastructure Layer
//!
//! Concrete implementations of the domain ports.
//!
//! - `discovery` - `WalkDiscovery`, the default source-path action (file system walk)
//! - `env` - `ProcessEnv`, `DotenvFile` and `LayeredEnv` behind `EnvSource`

pub mod discovery;
pub mod env;

pub use discovery::WalkDiscovery;
pub use env::{DotenvFile, LayeredEnv, ProcessEnv};
