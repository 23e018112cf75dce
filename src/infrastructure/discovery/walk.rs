//! File-system source discovery
//!
//! Walks the sources root and returns every `.sol` file, after applying the
//! project's include/exclude globs. Globs use gitignore syntax and are matched
//! against paths relative to the root.

use std::ffi::OsStr;
use std::path::Path;

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use ignore::WalkBuilder;
use tracing::{debug, trace};

use crate::domain::ports::{SourceDiscovery, SourceQuery};
use crate::domain::value_objects::SourcePathSet;
use crate::error::{PipelineError, PipelineResult};

const SOLIDITY_EXTENSION: &str = "sol";

/// Default implementation of the source-path step.
#[derive(Debug, Clone, Copy, Default)]
pub struct WalkDiscovery;

impl WalkDiscovery {
    pub fn new() -> Self {
        Self
    }
}

impl SourceDiscovery for WalkDiscovery {
    fn discover(&self, query: &SourceQuery) -> PipelineResult<SourcePathSet> {
        if !query.root.is_dir() {
            return Err(PipelineError::SourcesNotFound {
                path: query.root.clone(),
            });
        }

        let include = build_matcher(&query.root, &query.include)?;
        let exclude = build_matcher(&query.root, &query.exclude)?;

        // Plain walk: no hidden-file or .gitignore filtering, deterministic order.
        let walker = WalkBuilder::new(&query.root)
            .standard_filters(false)
            .sort_by_file_path(std::cmp::Ord::cmp)
            .build();

        let mut paths = SourcePathSet::new();
        for entry in walker {
            let entry = entry.map_err(|e| match e.into_io_error() {
                Some(io) => PipelineError::Io(io),
                None => PipelineError::Io(std::io::Error::other("source walk failed")),
            })?;

            let is_file = entry.file_type().is_some_and(|t| t.is_file());
            if !is_file || entry.path().extension() != Some(OsStr::new(SOLIDITY_EXTENSION)) {
                continue;
            }

            let rel = entry
                .path()
                .strip_prefix(&query.root)
                .unwrap_or(entry.path());
            if let Some(include) = &include {
                if !matches(include, rel) {
                    trace!(path = %rel.display(), "not included");
                    continue;
                }
            }
            if let Some(exclude) = &exclude {
                if matches(exclude, rel) {
                    trace!(path = %rel.display(), "excluded by glob");
                    continue;
                }
            }

            paths.insert(entry.path().to_string_lossy().into_owned());
        }

        debug!(root = %query.root.display(), found = paths.len(), "discovered sources");
        Ok(paths)
    }
}

/// `None` when there are no patterns.
fn build_matcher(root: &Path, patterns: &[String]) -> PipelineResult<Option<Gitignore>> {
    if patterns.is_empty() {
        return Ok(None);
    }

    let mut builder = GitignoreBuilder::new(root);
    for pattern in patterns {
        builder
            .add_line(None, pattern)
            .map_err(|e| PipelineError::InvalidGlob {
                pattern: pattern.clone(),
                message: e.to_string(),
            })?;
    }

    let matcher = builder.build().map_err(|e| PipelineError::InvalidGlob {
        pattern: patterns.join(", "),
        message: e.to_string(),
    })?;
    Ok(Some(matcher))
}

fn matches(matcher: &Gitignore, rel: &Path) -> bool {
    matcher.matched_path_or_any_parents(rel, false).is_ignore()
}
