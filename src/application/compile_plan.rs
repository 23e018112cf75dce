//! Compile plan use case
//!
//! Bundles what the external compile task needs: the compiler profile and the
//! authoritative source set.

use serde::Serialize;
use tracing::info;

use crate::application::pipeline::TaskPipeline;
use crate::config::LoadedConfig;
use crate::domain::entities::CompilerProfile;
use crate::domain::value_objects::SourcePathSet;
use crate::error::PipelineResult;

#[derive(Debug, Clone, Serialize)]
pub struct CompilePlan {
    pub profile: CompilerProfile,
    pub sources: SourcePathSet,
}

impl CompilePlan {
    /// Validate the profile, then run the source-path step.
    ///
    /// An empty source set is returned as-is; reporting "nothing to compile" is
    /// the compiler's job.
    pub fn prepare(loaded: &LoadedConfig, pipeline: &TaskPipeline) -> PipelineResult<Self> {
        let profile = loaded.compiler_profile()?;
        let sources = pipeline.source_paths(&loaded.source_query())?;
        info!(
            solc = profile.version(),
            sources = sources.len(),
            "prepared compile plan"
        );
        Ok(Self { profile, sources })
    }
}
