//! Test file policy
//!
//! Decides which discovered sources are test scaffolding rather than deployable
//! contracts. Matching is a literal suffix comparison on the path string.

use serde::{Deserialize, Serialize};

/// Suffix-based classification of test contracts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestFilePolicy {
    suffixes: Vec<String>,
}

impl TestFilePolicy {
    /// Forge-style test files: `Token.t.sol`.
    pub const DEFAULT_SUFFIX: &'static str = ".t.sol";

    /// Build a policy from explicit suffixes. Empty suffixes are dropped, since
    /// they would match every path.
    pub fn new<I, S>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            suffixes: suffixes
                .into_iter()
                .map(Into::into)
                .filter(|s: &String| !s.is_empty())
                .collect(),
        }
    }

    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    pub fn is_test_file(&self, path: &str) -> bool {
        self.suffixes.iter().any(|suffix| path.ends_with(suffix.as_str()))
    }
}

impl Default for TestFilePolicy {
    fn default() -> Self {
        Self::new([Self::DEFAULT_SUFFIX])
    }
}
