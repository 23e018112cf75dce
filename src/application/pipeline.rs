//! Task pipeline
//!
//! Named extension points of the external task runner, modelled explicitly. Each
//! [`Subtask`] has a default action and a stack of hooks; running it calls the most
//! recently registered hook, whose `next` reaches the one before it, and so on down
//! to the default action.
//!
//! ## Flow (source paths)
//!
//! 1. `SourceSetFilter` is called with the query
//! 2. It calls `next`, which runs default discovery (globs applied there)
//! 3. It removes test files from the result

use tracing::trace;

use crate::domain::policies::TestFilePolicy;
use crate::domain::ports::{SourceDiscovery, SourceQuery, SubtaskHook};
use crate::domain::services::SourceSetFilter;
use crate::domain::value_objects::SourcePathSet;
use crate::error::PipelineResult;

/// Extension point that gathers compilable source paths.
pub const GET_SOURCE_PATHS: &str = "compile:solidity:get-source-paths";

type Action<I, O> = Box<dyn Fn(&I) -> O>;

/// One named pipeline step with its hooks.
pub struct Subtask<I, O> {
    name: &'static str,
    action: Action<I, O>,
    hooks: Vec<Box<dyn SubtaskHook<I, O>>>,
}

impl<I, O> Subtask<I, O> {
    pub fn new<F>(name: &'static str, action: F) -> Self
    where
        F: Fn(&I) -> O + 'static,
    {
        Self {
            name,
            action: Box::new(action),
            hooks: Vec::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Register a hook around everything registered so far.
    pub fn register<H>(&mut self, hook: H)
    where
        H: SubtaskHook<I, O> + 'static,
    {
        self.hooks.push(Box::new(hook));
    }

    /// Hook names, outermost first.
    pub fn hook_names(&self) -> Vec<&str> {
        self.hooks.iter().rev().map(|h| h.name()).collect()
    }

    pub fn run(&self, input: &I) -> O {
        self.run_layer(self.hooks.len(), input)
    }

    fn run_layer(&self, depth: usize, input: &I) -> O {
        match depth.checked_sub(1) {
            None => {
                trace!(subtask = self.name, "running default action");
                (self.action)(input)
            }
            Some(idx) => {
                let hook = &self.hooks[idx];
                trace!(subtask = self.name, hook = hook.name(), "running hook");
                hook.run(input, &|i: &I| self.run_layer(idx, i))
            }
        }
    }
}

impl<I, O> std::fmt::Debug for Subtask<I, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subtask")
            .field("name", &self.name)
            .field("hooks", &self.hook_names())
            .finish()
    }
}

/// The extension points this crate configures.
#[derive(Debug)]
pub struct TaskPipeline {
    get_source_paths: Subtask<SourceQuery, PipelineResult<SourcePathSet>>,
}

impl TaskPipeline {
    /// Bare pipeline: discovery only, no hooks.
    pub fn new<D>(discovery: D) -> Self
    where
        D: SourceDiscovery + 'static,
    {
        Self {
            get_source_paths: Subtask::new(GET_SOURCE_PATHS, move |query: &SourceQuery| {
                discovery.discover(query)
            }),
        }
    }

    /// Discovery wrapped by the test-file filter.
    pub fn standard<D>(discovery: D, policy: TestFilePolicy) -> Self
    where
        D: SourceDiscovery + 'static,
    {
        let mut pipeline = Self::new(discovery);
        pipeline
            .get_source_paths
            .register(SourceSetFilter::new(policy));
        pipeline
    }

    pub fn get_source_paths_mut(
        &mut self,
    ) -> &mut Subtask<SourceQuery, PipelineResult<SourcePathSet>> {
        &mut self.get_source_paths
    }

    /// Authoritative source set for one compilation.
    pub fn source_paths(&self, query: &SourceQuery) -> PipelineResult<SourcePathSet> {
        self.get_source_paths.run(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// In-memory discovery returning a fixed set.
    struct FixedDiscovery(Vec<&'static str>);

    impl SourceDiscovery for FixedDiscovery {
        fn discover(&self, _query: &SourceQuery) -> PipelineResult<SourcePathSet> {
            Ok(self.0.iter().copied().collect())
        }
    }

    /// Records when it runs relative to `next`.
    struct Recorder {
        label: &'static str,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl SubtaskHook<SourceQuery, PipelineResult<SourcePathSet>> for Recorder {
        fn name(&self) -> &str {
            self.label
        }

        fn run(
            &self,
            input: &SourceQuery,
            next: &dyn Fn(&SourceQuery) -> PipelineResult<SourcePathSet>,
        ) -> PipelineResult<SourcePathSet> {
            self.log.borrow_mut().push(format!("{}:before", self.label));
            let out = next(input);
            self.log.borrow_mut().push(format!("{}:after", self.label));
            out
        }
    }

    #[test]
    fn bare_pipeline_returns_discovery_output() {
        let pipeline = TaskPipeline::new(FixedDiscovery(vec!["A.sol", "A.t.sol"]));
        let out = pipeline.source_paths(&SourceQuery::new("contracts")).unwrap();
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn standard_pipeline_filters_test_files() {
        let pipeline = TaskPipeline::standard(
            FixedDiscovery(vec!["A.sol", "A.t.sol", "B.sol"]),
            TestFilePolicy::default(),
        );
        let out = pipeline.source_paths(&SourceQuery::new("contracts")).unwrap();
        assert_eq!(out.into_vec(), vec!["A.sol", "B.sol"]);
    }

    #[test]
    fn later_hooks_wrap_earlier_ones() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut subtask: Subtask<SourceQuery, PipelineResult<SourcePathSet>> =
            Subtask::new(GET_SOURCE_PATHS, {
                let log = Rc::clone(&log);
                move |_: &SourceQuery| {
                    log.borrow_mut().push("default".to_string());
                    Ok(SourcePathSet::new())
                }
            });
        subtask.register(Recorder {
            label: "inner",
            log: Rc::clone(&log),
        });
        subtask.register(Recorder {
            label: "outer",
            log: Rc::clone(&log),
        });

        subtask.run(&SourceQuery::new("contracts")).unwrap();

        assert_eq!(
            *log.borrow(),
            vec![
                "outer:before",
                "inner:before",
                "default",
                "inner:after",
                "outer:after"
            ]
        );
        assert_eq!(subtask.hook_names(), vec!["outer", "inner"]);
    }

    #[test]
    fn hooks_registered_after_filter_wrap_it() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut pipeline = TaskPipeline::standard(
            FixedDiscovery(vec!["Vault.sol", "Vault.t.sol"]),
            TestFilePolicy::default(),
        );
        pipeline.get_source_paths_mut().register(Recorder {
            label: "audit",
            log: Rc::clone(&log),
        });

        let out = pipeline.source_paths(&SourceQuery::new("contracts")).unwrap();
        assert_eq!(out.into_vec(), vec!["Vault.sol"]);
        assert_eq!(*log.borrow(), vec!["audit:before", "audit:after"]);
    }
}
