//! Source set filter
//!
//! Removes test contracts from the production compilation set. Registered as a hook
//! on the source-path step, so it always sees the output of default discovery
//! (which has already applied include/exclude globs) and never adds a path.

use tracing::debug;

use crate::domain::policies::TestFilePolicy;
use crate::domain::ports::{SourceQuery, SubtaskHook};
use crate::domain::value_objects::SourcePathSet;
use crate::error::PipelineResult;

/// Filters `discovered` with the default `.t.sol` policy.
pub fn filter_sources(discovered: SourcePathSet) -> SourcePathSet {
    SourceSetFilter::default().filter_sources(discovered)
}

#[derive(Debug, Clone, Default)]
pub struct SourceSetFilter {
    policy: TestFilePolicy,
}

impl SourceSetFilter {
    pub fn new(policy: TestFilePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &TestFilePolicy {
        &self.policy
    }

    /// Subset of `discovered` without test files, in input order.
    pub fn filter_sources(&self, discovered: SourcePathSet) -> SourcePathSet {
        let before = discovered.len();
        let kept = discovered.retain(|path| !self.policy.is_test_file(path));
        debug!(
            discovered = before,
            excluded = before - kept.len(),
            "filtered test sources"
        );
        kept
    }
}

impl SubtaskHook<SourceQuery, PipelineResult<SourcePathSet>> for SourceSetFilter {
    fn name(&self) -> &str {
        "exclude-test-sources"
    }

    fn run(
        &self,
        input: &SourceQuery,
        next: &dyn Fn(&SourceQuery) -> PipelineResult<SourcePathSet>,
    ) -> PipelineResult<SourcePathSet> {
        let discovered = next(input)?;
        Ok(self.filter_sources(discovered))
    }
}
