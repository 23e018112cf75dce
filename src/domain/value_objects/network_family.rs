//! Network family value object
//!
//! A family groups networks that share one block explorer, and therefore one
//! source-verification API key (a testnet and its mainnet, for example).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PipelineError;

/// Explorer family a network belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkFamily {
    /// BNB Smart Chain (BscScan)
    Bsc,
    /// Ethereum mainnet and testnets (Etherscan)
    Ethereum,
    /// TomoChain (no verification service configured)
    TomoChain,
}

impl NetworkFamily {
    pub const ALL: [NetworkFamily; 3] = [
        NetworkFamily::Bsc,
        NetworkFamily::Ethereum,
        NetworkFamily::TomoChain,
    ];

    /// Environment variable holding this family's explorer API key, if any.
    pub fn api_key_var(&self) -> Option<&'static str> {
        match self {
            NetworkFamily::Bsc => Some("TBSC_API_KEY"),
            NetworkFamily::Ethereum => Some("ETH_API_KEY"),
            NetworkFamily::TomoChain => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkFamily::Bsc => "bsc",
            NetworkFamily::Ethereum => "ethereum",
            NetworkFamily::TomoChain => "tomochain",
        }
    }

    /// Explorer whose verification API the key authenticates against.
    pub fn explorer(&self) -> &'static str {
        match self {
            NetworkFamily::Bsc => "BscScan",
            NetworkFamily::Ethereum => "Etherscan",
            NetworkFamily::TomoChain => "TomoScan",
        }
    }
}

impl fmt::Display for NetworkFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for NetworkFamily {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bsc" | "bnb" => Ok(NetworkFamily::Bsc),
            "ethereum" | "eth" => Ok(NetworkFamily::Ethereum),
            "tomochain" | "tomo" => Ok(NetworkFamily::TomoChain),
            _ => Err(PipelineError::UnknownNetworkFamily {
                name: s.to_string(),
            }),
        }
    }
}
