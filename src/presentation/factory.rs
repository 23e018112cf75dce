//! Use Case Factory
//!
//! Wires the real environment and file system into the application layer. This
//! is the only place the process environment is read.

use std::path::Path;

use crate::application::TaskPipeline;
use crate::config::{load_project, LoadedConfig};
use crate::domain::services::{NetworkCatalog, TargetRegistry};
use crate::error::PipelineResult;
use crate::infrastructure::{DotenvFile, LayeredEnv, ProcessEnv, WalkDiscovery};

/// Process environment first, then `<project>/.env`.
pub type ProjectEnv = LayeredEnv<ProcessEnv, DotenvFile>;

pub fn project_env(project_root: &Path) -> PipelineResult<ProjectEnv> {
    let dotenv = DotenvFile::load(&project_root.join(".env"))?;
    Ok(LayeredEnv::new(ProcessEnv, dotenv))
}

/// Load configuration once for the whole run.
///
/// The project root is canonicalized, so discovered source paths are absolute.
pub fn load_config(
    project_root: &Path,
    config_path: Option<&Path>,
) -> PipelineResult<LoadedConfig> {
    let project_root = project_root.canonicalize()?;
    let env = project_env(&project_root)?;
    load_project(&project_root, config_path, &env)
}

/// Source pipeline with file-system discovery and the configured test filter.
pub fn create_pipeline(loaded: &LoadedConfig) -> TaskPipeline {
    TaskPipeline::standard(WalkDiscovery::new(), loaded.config.test_file_policy())
}

pub fn create_registry(loaded: &LoadedConfig) -> TargetRegistry {
    TargetRegistry::new(&NetworkCatalog::builtin(), &loaded.secrets)
}
