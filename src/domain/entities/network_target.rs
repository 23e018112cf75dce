//! Network target entity

use crate::domain::value_objects::{ChainId, Endpoint, NetworkFamily, SigningSecret};

/// A named deployment target: where to send transactions and who signs them.
///
/// `signing_keys` is empty when no signing secret was configured. The deploying tool
/// then fails when it tries to sign, not while configuration loads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkTarget {
    pub name: String,
    pub endpoint: Endpoint,
    pub chain_id: ChainId,
    pub family: NetworkFamily,
    pub signing_keys: Vec<SigningSecret>,
}

impl NetworkTarget {
    pub fn can_sign(&self) -> bool {
        !self.signing_keys.is_empty()
    }
}
