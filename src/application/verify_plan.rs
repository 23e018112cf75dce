//! Verify plan use case
//!
//! Resolves the explorer credential for a network name or a family name.

use std::str::FromStr;

use tracing::warn;

use crate::domain::entities::VerificationCredential;
use crate::domain::services::TargetRegistry;
use crate::domain::value_objects::NetworkFamily;
use crate::error::{PipelineError, PipelineResult};

#[derive(Debug, Clone)]
pub struct VerifyPlan {
    /// Set when the lookup started from a network name
    pub network: Option<String>,
    pub credential: VerificationCredential,
}

impl VerifyPlan {
    /// `name` is tried as a network first, then as a family.
    pub fn prepare(registry: &TargetRegistry, name: &str) -> PipelineResult<Self> {
        let plan = match registry.credential_for_network(name) {
            Ok(credential) => Self {
                network: Some(name.to_string()),
                credential,
            },
            Err(unknown @ PipelineError::UnknownNetwork { .. }) => {
                let family = NetworkFamily::from_str(name).map_err(|_| unknown)?;
                Self {
                    network: None,
                    credential: registry.verification_credential(family),
                }
            }
            Err(other) => return Err(other),
        };

        if !plan.credential.is_authenticated() {
            warn!(
                family = %plan.credential.family,
                "no {} API key configured; verification requests will be unauthenticated",
                plan.credential.family.explorer()
            );
        }
        Ok(plan)
    }
}
