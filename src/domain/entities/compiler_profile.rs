//! Compiler profile entity
//!
//! The solc settings every compilation in a project shares. Built once while loading
//! configuration and only read afterwards.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{PipelineError, PipelineResult};

/// Which metadata hash solc appends to the bytecode.
///
/// `None` turns hash inclusion off, which keeps bytecode identical across
/// machines with different source paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BytecodeHash {
    #[default]
    None,
    Ipfs,
    Bzzr1,
}

impl BytecodeHash {
    pub const VALID_VALUES: [&'static str; 3] = ["none", "ipfs", "bzzr1"];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "none" => Some(BytecodeHash::None),
            "ipfs" => Some(BytecodeHash::Ipfs),
            "bzzr1" => Some(BytecodeHash::Bzzr1),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BytecodeHash::None => "none",
            BytecodeHash::Ipfs => "ipfs",
            BytecodeHash::Bzzr1 => "bzzr1",
        }
    }

    pub fn includes_hash(&self) -> bool {
        !matches!(self, BytecodeHash::None)
    }
}

/// Optimizer section of the solc settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizerSettings {
    pub enabled: bool,
    /// Expected number of executions per opcode over the contract's lifetime.
    /// Higher values favour cheaper calls over smaller deployment size.
    pub runs: NonZeroU32,
}

/// Compiler settings handed to the external compile task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilerProfile {
    version: String,
    bytecode_hash: BytecodeHash,
    optimizer: OptimizerSettings,
}

impl CompilerProfile {
    pub const DEFAULT_VERSION: &'static str = "0.8.19";
    pub const DEFAULT_RUNS: NonZeroU32 = match NonZeroU32::new(1_000_000) {
        Some(runs) => runs,
        None => panic!("optimizer runs must be non-zero"),
    };

    pub fn new(
        version: impl Into<String>,
        bytecode_hash: BytecodeHash,
        optimizer: OptimizerSettings,
    ) -> PipelineResult<Self> {
        let version = version.into();
        if !is_release_version(&version) {
            return Err(PipelineError::InvalidConfig {
                key: "solidity.version".to_string(),
                message: format!("'{}' is not a MAJOR.MINOR.PATCH compiler version", version),
            });
        }
        Ok(Self {
            version,
            bytecode_hash,
            optimizer,
        })
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn bytecode_hash(&self) -> BytecodeHash {
        self.bytecode_hash
    }

    pub fn optimizer(&self) -> OptimizerSettings {
        self.optimizer
    }

    /// Solc standard-JSON `settings` object for this profile.
    pub fn solc_settings(&self) -> serde_json::Value {
        serde_json::json!({
            "metadata": { "bytecodeHash": self.bytecode_hash },
            "optimizer": {
                "enabled": self.optimizer.enabled,
                "runs": self.optimizer.runs.get(),
            },
        })
    }

    /// SHA-256 of the canonical JSON form. Changes whenever any setting changes, so
    /// callers can key compile caches on it.
    pub fn fingerprint(&self) -> String {
        let canonical = serde_json::json!({
            "version": self.version,
            "settings": self.solc_settings(),
        });
        let digest = Sha256::digest(canonical.to_string().as_bytes());
        digest.iter().map(|b| format!("{:02x}", b)).collect()
    }
}

impl Default for CompilerProfile {
    fn default() -> Self {
        Self {
            version: Self::DEFAULT_VERSION.to_string(),
            bytecode_hash: BytecodeHash::None,
            optimizer: OptimizerSettings {
                enabled: true,
                runs: Self::DEFAULT_RUNS,
            },
        }
    }
}

fn is_release_version(version: &str) -> bool {
    let parts: Vec<&str> = version.split('.').collect();
    parts.len() == 3
        && parts
            .iter()
            .all(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit()))
}
