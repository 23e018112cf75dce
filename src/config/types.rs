//! Configuration type definitions

use std::num::NonZeroU32;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::{BytecodeHash, CompilerProfile, OptimizerSettings};
use crate::domain::policies::TestFilePolicy;
use crate::domain::ports::{EnvSource, SourceQuery};
use crate::domain::value_objects::ConfigWarning;
use crate::error::{PipelineError, PipelineResult};

use super::loader;

/// `[solidity]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolidityConfig {
    #[serde(default = "default_version")]
    pub version: String,

    #[serde(default)]
    pub bytecode_hash: BytecodeHash,

    #[serde(default)]
    pub optimizer: OptimizerConfig,
}

impl Default for SolidityConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            bytecode_hash: BytecodeHash::default(),
            optimizer: OptimizerConfig::default(),
        }
    }
}

fn default_version() -> String {
    CompilerProfile::DEFAULT_VERSION.to_string()
}

/// `[solidity.optimizer]` section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizerConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_runs")]
    pub runs: u32,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            runs: default_runs(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_runs() -> u32 {
    CompilerProfile::DEFAULT_RUNS.get()
}

/// `[sources]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcesConfig {
    /// Relative paths are resolved against the project root.
    #[serde(default = "default_sources_root")]
    pub root: PathBuf,

    #[serde(default)]
    pub include: Vec<String>,

    #[serde(default)]
    pub exclude: Vec<String>,

    #[serde(default = "default_test_suffixes")]
    pub test_suffixes: Vec<String>,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            root: default_sources_root(),
            include: Vec::new(),
            exclude: Vec::new(),
            test_suffixes: default_test_suffixes(),
        }
    }
}

fn default_sources_root() -> PathBuf {
    PathBuf::from("contracts")
}

fn default_test_suffixes() -> Vec<String> {
    vec![TestFilePolicy::DEFAULT_SUFFIX.to_string()]
}

/// Main configuration structure (`solpipe.toml`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub solidity: SolidityConfig,

    #[serde(default)]
    pub sources: SourcesConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> PipelineResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> PipelineResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Apply `SOLPIPE_*` overrides from `env`
    pub fn with_env_overrides(self, env: &dyn EnvSource) -> Self {
        super::env::with_env_overrides(self, env)
    }

    /// Validated compiler profile for this configuration.
    pub fn compiler_profile(&self) -> PipelineResult<CompilerProfile> {
        let runs = NonZeroU32::new(self.solidity.optimizer.runs).ok_or_else(|| {
            PipelineError::InvalidConfig {
                key: "solidity.optimizer.runs".to_string(),
                message: "must be a positive integer".to_string(),
            }
        })?;
        CompilerProfile::new(
            self.solidity.version.clone(),
            self.solidity.bytecode_hash,
            OptimizerSettings {
                enabled: self.solidity.optimizer.enabled,
                runs,
            },
        )
    }

    pub fn test_file_policy(&self) -> TestFilePolicy {
        TestFilePolicy::new(self.sources.test_suffixes.iter().cloned())
    }

    /// Discovery query for this project, with `sources.root` resolved.
    pub fn source_query(&self, project_root: &Path) -> SourceQuery {
        SourceQuery {
            root: project_root.join(&self.sources.root),
            include: self.sources.include.clone(),
            exclude: self.sources.exclude.clone(),
        }
    }
}
