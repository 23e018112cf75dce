//! Network catalog
//!
//! The fixed list of networks a project may deploy to. Adding a network means
//! editing this table; nothing is discovered at runtime.

use std::collections::HashSet;

use crate::domain::value_objects::{ChainId, Endpoint, NetworkFamily};
use crate::error::{PipelineError, PipelineResult};

/// Static connection parameters for one network, before secrets are attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkSpec {
    pub name: String,
    pub endpoint: Endpoint,
    pub chain_id: ChainId,
    pub family: NetworkFamily,
}

const fn chain(id: u64) -> ChainId {
    match ChainId::new(id) {
        Some(id) => id,
        None => panic!("chain id must be non-zero"),
    }
}

const BUILTIN: [(&str, &str, ChainId, NetworkFamily); 4] = [
    (
        "bscTest",
        "https://bsc-testnet.public.blastapi.io",
        chain(97),
        NetworkFamily::Bsc,
    ),
    (
        "bsc",
        "https://bsc-dataseed2.binance.org",
        chain(56),
        NetworkFamily::Bsc,
    ),
    (
        "goerli",
        "https://goerli.infura.io/v3/9aa3d95b3bc440fa88ea12eaa4456161",
        chain(5),
        NetworkFamily::Ethereum,
    ),
    (
        "tomoTest",
        "https://rpc.testnet.tomochain.com",
        chain(89),
        NetworkFamily::TomoChain,
    ),
];

/// Ordered set of networks with unique names and chain ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkCatalog {
    networks: Vec<NetworkSpec>,
}

impl NetworkCatalog {
    /// Validate uniqueness of names and chain ids.
    pub fn new(networks: Vec<NetworkSpec>) -> PipelineResult<Self> {
        let mut names = HashSet::new();
        let mut chain_ids = HashSet::new();
        for network in &networks {
            if !names.insert(network.name.as_str()) {
                return Err(PipelineError::DuplicateNetwork {
                    name: network.name.clone(),
                });
            }
            if !chain_ids.insert(network.chain_id) {
                return Err(PipelineError::DuplicateChainId {
                    chain_id: network.chain_id.get(),
                });
            }
        }
        Ok(Self { networks })
    }

    /// The supported networks: BSC testnet and mainnet, Goerli, TomoChain testnet.
    pub fn builtin() -> Self {
        Self {
            networks: BUILTIN
                .iter()
                .map(|&(name, url, chain_id, family)| NetworkSpec {
                    name: name.to_string(),
                    endpoint: Endpoint::from_static(url),
                    chain_id,
                    family,
                })
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&NetworkSpec> {
        self.networks.iter().find(|n| n.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.networks.iter().map(|n| n.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &NetworkSpec> {
        self.networks.iter()
    }

    pub fn len(&self) -> usize {
        self.networks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }
}

impl Default for NetworkCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
