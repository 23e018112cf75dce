//! `.env` file source
//!
//! Parsed with `dotenvy`: `KEY=VALUE` lines, `#` comments, an optional `export `
//! prefix, single and double quotes (escapes and multi-line values in double
//! quotes). Malformed lines are skipped with a warning.

use std::collections::HashMap;
use std::io::{self, Read};
use std::path::Path;

use tracing::{debug, warn};

use crate::domain::ports::EnvSource;
use crate::error::PipelineResult;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DotenvFile {
    values: HashMap<String, String>,
}

impl DotenvFile {
    /// Read `path`; a missing file yields an empty source.
    pub fn load(path: &Path) -> PipelineResult<Self> {
        match dotenvy::from_path_iter(path) {
            Ok(iter) => {
                let file = Self::collect(iter);
                debug!(path = %path.display(), keys = file.values.len(), "loaded .env");
                Ok(file)
            }
            Err(e) if e.not_found() => Ok(Self::default()),
            Err(e) => Err(io::Error::other(format!("{}: {}", path.display(), e)).into()),
        }
    }

    pub fn parse(content: &str) -> Self {
        Self::collect(dotenvy::from_read_iter(content.as_bytes()))
    }

    fn collect<R: Read>(iter: dotenvy::Iter<R>) -> Self {
        let mut values = HashMap::new();
        for item in iter {
            match item {
                Ok((key, value)) => {
                    values.insert(key, value);
                }
                Err(e) => warn!(error = %e, "ignoring malformed .env line"),
            }
        }
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl EnvSource for DotenvFile {
    fn var(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}
