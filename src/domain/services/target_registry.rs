//! Target registry
//!
//! Resolves a network name to everything the deploy and verify flows need. Built once
//! from the catalog and a secrets snapshot; lookups never touch the environment.

use std::collections::BTreeMap;

use tracing::debug;

use super::network_catalog::NetworkCatalog;
use super::suggest::closest_match;
use crate::domain::entities::{NetworkTarget, VerificationCredential};
use crate::domain::value_objects::{NetworkFamily, Secrets};
use crate::error::{PipelineError, PipelineResult};

#[derive(Debug, Clone)]
pub struct TargetRegistry {
    targets: Vec<NetworkTarget>,
    credentials: BTreeMap<NetworkFamily, VerificationCredential>,
}

impl TargetRegistry {
    /// Attach secrets to every catalog entry.
    ///
    /// The single signing secret, if present, becomes the only signing key of every
    /// target. Without it every target has no signing keys. Never fails: missing
    /// credentials surface when the external tool tries to use them.
    pub fn new(catalog: &NetworkCatalog, secrets: &Secrets) -> Self {
        let signing_keys: Vec<_> = secrets.signing_secret.iter().cloned().collect();

        let targets = catalog
            .iter()
            .map(|spec| NetworkTarget {
                name: spec.name.clone(),
                endpoint: spec.endpoint.clone(),
                chain_id: spec.chain_id,
                family: spec.family,
                signing_keys: signing_keys.clone(),
            })
            .collect();

        let credentials = NetworkFamily::ALL
            .into_iter()
            .map(|family| {
                let credential = VerificationCredential {
                    family,
                    api_key: secrets.api_key(family).to_string(),
                };
                (family, credential)
            })
            .collect();

        debug!(
            networks = catalog.len(),
            signer = !signing_keys.is_empty(),
            "built target registry"
        );

        Self {
            targets,
            credentials,
        }
    }

    /// Deployment lookup by exact network name.
    pub fn resolve_target(&self, name: &str) -> PipelineResult<&NetworkTarget> {
        self.targets
            .iter()
            .find(|t| t.name == name)
            .ok_or_else(|| self.unknown_network(name))
    }

    /// Verification lookup by family. Always succeeds; a missing key is `""`.
    pub fn verification_credential(&self, family: NetworkFamily) -> VerificationCredential {
        self.credentials
            .get(&family)
            .cloned()
            .unwrap_or_else(|| VerificationCredential {
                family,
                api_key: String::new(),
            })
    }

    pub fn verification_key(&self, family: NetworkFamily) -> &str {
        self.credentials
            .get(&family)
            .map(|c| c.api_key.as_str())
            .unwrap_or("")
    }

    /// Verification lookup starting from a network name.
    pub fn credential_for_network(&self, name: &str) -> PipelineResult<VerificationCredential> {
        let target = self.resolve_target(name)?;
        Ok(self.verification_credential(target.family))
    }

    /// Targets in catalog order.
    pub fn targets(&self) -> impl Iterator<Item = &NetworkTarget> {
        self.targets.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.targets.iter().map(|t| t.name.as_str())
    }

    fn unknown_network(&self, name: &str) -> PipelineError {
        PipelineError::UnknownNetwork {
            name: name.to_string(),
            suggestion: closest_match(name, self.names(), 2).map(str::to_string),
            known: self.names().map(str::to_string).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::SigningSecret;

    const KEY: &str = "0x8b3a350cf5c34c9194ca85829a2df0ec3153be0318b5e2d3348e872092edffba";

    fn registry(secrets: &Secrets) -> TargetRegistry {
        TargetRegistry::new(&NetworkCatalog::builtin(), secrets)
    }

    #[test]
    fn resolves_bsc_without_secret() {
        let registry = registry(&Secrets::default());
        let bsc = registry.resolve_target("bsc").unwrap();
        assert_eq!(bsc.endpoint.as_str(), "https://bsc-dataseed2.binance.org");
        assert_eq!(bsc.chain_id.get(), 56);
        assert!(bsc.signing_keys.is_empty());
        assert!(!bsc.can_sign());
    }

    #[test]
    fn signing_secret_is_shared_by_every_target() {
        let secrets = Secrets {
            signing_secret: Some(SigningSecret::new(KEY)),
            ..Secrets::default()
        };
        let registry = registry(&secrets);
        for target in registry.targets() {
            assert_eq!(target.signing_keys.len(), 1, "{}", target.name);
            assert_eq!(target.signing_keys[0].expose(), KEY);
        }
    }

    #[test]
    fn missing_api_key_is_empty() {
        let registry = registry(&Secrets::default());
        assert_eq!(registry.verification_key(NetworkFamily::Bsc), "");
        assert!(!registry
            .verification_credential(NetworkFamily::Bsc)
            .is_authenticated());
    }

    #[test]
    fn testnet_and_mainnet_share_credential() {
        let mut secrets = Secrets::default();
        secrets
            .api_keys
            .insert(NetworkFamily::Bsc, "BSCSCANKEY".to_string());
        let registry = registry(&secrets);

        let test = registry.credential_for_network("bscTest").unwrap();
        let main = registry.credential_for_network("bsc").unwrap();
        assert_eq!(test, main);
        assert_eq!(test.api_key, "BSCSCANKEY");

        let goerli = registry.credential_for_network("goerli").unwrap();
        assert_eq!(goerli.family, NetworkFamily::Ethereum);
        assert_eq!(goerli.api_key, "");
    }

    #[test]
    fn unknown_network_suggests_near_miss() {
        let registry = registry(&Secrets::default());
        let err = registry.resolve_target("goerly").unwrap_err();
        match err {
            PipelineError::UnknownNetwork {
                suggestion, known, ..
            } => {
                assert_eq!(suggestion.as_deref(), Some("goerli"));
                assert_eq!(known, vec!["bscTest", "bsc", "goerli", "tomoTest"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unknown_network_far_off_has_no_suggestion() {
        let registry = registry(&Secrets::default());
        let err = registry.resolve_target("arbitrum-one").unwrap_err();
        assert!(matches!(
            err,
            PipelineError::UnknownNetwork {
                suggestion: None,
                ..
            }
        ));
    }

    #[test]
    fn every_target_has_positive_chain_id_and_http_endpoint() {
        let registry = registry(&Secrets::default());
        for target in registry.targets() {
            assert!(target.chain_id.get() > 0);
            assert!(target.endpoint.as_str().starts_with("https://"));
        }
    }
}
