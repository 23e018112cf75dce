//! Verification credential entity

use serde::Serialize;

use crate::domain::value_objects::NetworkFamily;

/// Explorer API key used to submit sources for bytecode verification.
///
/// Keyed by family, so every network of a family shares it. An empty key means
/// verification requests go out unauthenticated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationCredential {
    pub family: NetworkFamily,
    pub api_key: String,
}

impl VerificationCredential {
    pub fn is_authenticated(&self) -> bool {
        !self.api_key.is_empty()
    }
}
