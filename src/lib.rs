//! solpipe - build configuration for Solidity compile and deploy pipelines
//!
//! solpipe decides which compiler settings to use, which source files make up the
//! production compilation set, and which networks and credentials a deployment may
//! target. Compiling, signing and verifying are left to the task runner that
//! consumes this configuration.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{CompilePlan, DeployPlan, Subtask, TaskPipeline, VerifyPlan};
pub use config::{load_project, Config, LoadedConfig};
pub use domain::entities::{CompilerProfile, NetworkTarget, VerificationCredential};
pub use domain::services::{filter_sources, NetworkCatalog, SourceSetFilter, TargetRegistry};
pub use domain::value_objects::{NetworkFamily, SourcePathSet};
pub use error::{PipelineError, PipelineResult};
