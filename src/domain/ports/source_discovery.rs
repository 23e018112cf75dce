//! SourceDiscovery port - the default "gather compilable files" action

use std::path::PathBuf;

use crate::domain::value_objects::SourcePathSet;
use crate::error::PipelineResult;

/// What the task runner asks discovery for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceQuery {
    /// Directory holding the Solidity sources
    pub root: PathBuf,
    /// Gitignore-style globs; when non-empty only matching files are kept
    pub include: Vec<String>,
    /// Gitignore-style globs removed after `include`
    pub exclude: Vec<String>,
}

impl SourceQuery {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            include: Vec::new(),
            exclude: Vec::new(),
        }
    }
}

/// Produces every candidate source path for a compilation.
///
/// Implementations apply the project's include/exclude globs themselves. Hooks run
/// after them and only ever remove paths.
pub trait SourceDiscovery {
    fn discover(&self, query: &SourceQuery) -> PipelineResult<SourcePathSet>;
}
