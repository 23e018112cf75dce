//! Source path set value object

use serde::Serialize;

/// Solidity source paths produced by discovery for a single compilation.
///
/// Paths are unique and keep the order they were inserted in. The set is rebuilt on
/// every invocation and never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SourcePathSet {
    paths: Vec<String>,
}

impl SourcePathSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a path; duplicates are ignored. Returns `true` if the path was new.
    pub fn insert(&mut self, path: impl Into<String>) -> bool {
        let path = path.into();
        if self.contains(&path) {
            return false;
        }
        self.paths.push(path);
        true
    }

    pub fn contains(&self, path: &str) -> bool {
        self.paths.iter().any(|p| p == path)
    }

    /// Keep only paths matching `keep`, preserving order.
    pub fn retain<F>(mut self, mut keep: F) -> Self
    where
        F: FnMut(&str) -> bool,
    {
        self.paths.retain(|p| keep(p));
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn is_subset_of(&self, other: &SourcePathSet) -> bool {
        self.iter().all(|p| other.contains(p))
    }

    pub fn into_vec(self) -> Vec<String> {
        self.paths
    }
}

impl<S: Into<String>> FromIterator<S> for SourcePathSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = SourcePathSet::new();
        for path in iter {
            set.insert(path);
        }
        set
    }
}

impl IntoIterator for SourcePathSet {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.into_iter()
    }
}
