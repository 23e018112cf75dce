//! Deploy plan use case

use tracing::{info, warn};

use crate::domain::entities::NetworkTarget;
use crate::domain::services::TargetRegistry;
use crate::error::PipelineResult;

/// Connection and signing parameters for one deployment.
#[derive(Debug, Clone)]
pub struct DeployPlan {
    pub target: NetworkTarget,
}

impl DeployPlan {
    /// Resolve `network`. A target without signing keys is still returned; signing
    /// fails later inside the deploying tool.
    pub fn prepare(registry: &TargetRegistry, network: &str) -> PipelineResult<Self> {
        let target = registry.resolve_target(network)?.clone();
        if target.can_sign() {
            info!(network = %target.name, chain_id = %target.chain_id, "resolved deploy target");
        } else {
            warn!(
                network = %target.name,
                "PRIVATE_KEY is not set; transactions to this network cannot be signed"
            );
        }
        Ok(Self { target })
    }
}
