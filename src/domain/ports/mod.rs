//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure provides concrete implementations; tests use in-memory ones.

pub mod env_source;
pub mod source_discovery;
pub mod subtask_hook;

pub use env_source::EnvSource;
pub use source_discovery::{SourceDiscovery, SourceQuery};
pub use subtask_hook::SubtaskHook;
