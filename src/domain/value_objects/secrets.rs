//! Secrets value object
//!
//! Snapshot of every credential the pipeline hands out, taken once at startup.

use std::collections::BTreeMap;

use super::{NetworkFamily, SigningSecret};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Secrets {
    /// Shared by every network; there is no per-network key.
    pub signing_secret: Option<SigningSecret>,
    /// Explorer API keys by family. Missing entries mean "no key".
    pub api_keys: BTreeMap<NetworkFamily, String>,
}

impl Secrets {
    pub fn api_key(&self, family: NetworkFamily) -> &str {
        self.api_keys.get(&family).map(String::as_str).unwrap_or("")
    }
}
