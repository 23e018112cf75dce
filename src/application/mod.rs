//! Application Layer
//!
//! Use cases that orchestrate the domain for the CLI and for embedding task runners.
//!
//! ## Use Cases
//!
//! - `CompilePlan` - compiler profile plus the filtered source set
//! - `DeployPlan` - resolved network target for a deployment
//! - `VerifyPlan` - explorer credential for a network or family
//!
//! ## Pipeline
//!
//! - `TaskPipeline` / `Subtask` - named extension points with `(input, next)` hooks

mod compile_plan;
mod deploy_plan;
pub mod pipeline;
mod verify_plan;

pub use compile_plan::CompilePlan;
pub use deploy_plan::DeployPlan;
pub use pipeline::{Subtask, TaskPipeline, GET_SOURCE_PATHS};
pub use verify_plan::VerifyPlan;
