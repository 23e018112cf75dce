//! Environment-sourced settings
//!
//! Two kinds of values come from the environment: `SOLPIPE_*` overrides of
//! `solpipe.toml`, and the credentials the deploy and verify flows hand out.

use tracing::debug;

use crate::domain::entities::{BytecodeHash, CompilerProfile};
use crate::domain::ports::EnvSource;
use crate::domain::value_objects::{NetworkFamily, Secrets, SigningSecret};

use super::env_validator::EnvVarValidator;
use super::types::Config;

/// Private key shared by every network.
pub const SIGNING_SECRET_VAR: &str = "PRIVATE_KEY";

/// Snapshot the signing secret and the explorer API keys.
///
/// A set-but-empty `PRIVATE_KEY` still counts as set. Absent API keys are left out,
/// which the registry reports as `""`.
pub fn capture_secrets(env: &dyn EnvSource) -> Secrets {
    let signing_secret = env.var(SIGNING_SECRET_VAR).map(SigningSecret::new);

    let api_keys = NetworkFamily::ALL
        .into_iter()
        .filter_map(|family| {
            let var = family.api_key_var()?;
            env.var(var).map(|key| (family, key))
        })
        .collect();

    let secrets = Secrets {
        signing_secret,
        api_keys,
    };
    debug!(
        signer = secrets.signing_secret.is_some(),
        api_keys = secrets.api_keys.len(),
        "captured secrets"
    );
    secrets
}

/// Apply environment variable overrides (`SOLPIPE_*` prefix)
pub fn with_env_overrides(mut config: Config, env: &dyn EnvSource) -> Config {
    // SOLPIPE_SOLC_VERSION
    if let Some(version) = env.var("SOLPIPE_SOLC_VERSION") {
        let validator = EnvVarValidator::new("SOLPIPE_SOLC_VERSION", &[]);
        config.solidity.version = validator.parse(
            &version,
            |v| {
                let v = v.trim();
                CompilerProfile::new(v, BytecodeHash::None, CompilerProfile::default().optimizer())
                    .ok()
                    .map(|_| v.to_string())
            },
            config.solidity.version,
        );
    }

    // SOLPIPE_OPTIMIZER
    if let Some(enabled) = env.var("SOLPIPE_OPTIMIZER") {
        let validator = EnvVarValidator::new("SOLPIPE_OPTIMIZER", &["true", "false"]);
        config.solidity.optimizer.enabled = validator.parse(
            &enabled,
            |v| match v.trim().to_lowercase().as_str() {
                "true" | "1" | "on" => Some(true),
                "false" | "0" | "off" => Some(false),
                _ => None,
            },
            config.solidity.optimizer.enabled,
        );
    }

    // SOLPIPE_OPTIMIZER_RUNS
    if let Some(runs) = env.var("SOLPIPE_OPTIMIZER_RUNS") {
        let validator = EnvVarValidator::new("SOLPIPE_OPTIMIZER_RUNS", &[]);
        config.solidity.optimizer.runs = validator.parse(
            &runs,
            |v| v.trim().replace('_', "").parse::<u32>().ok().filter(|n| *n > 0),
            config.solidity.optimizer.runs,
        );
    }

    // SOLPIPE_BYTECODE_HASH
    if let Some(hash) = env.var("SOLPIPE_BYTECODE_HASH") {
        let validator =
            EnvVarValidator::new("SOLPIPE_BYTECODE_HASH", &BytecodeHash::VALID_VALUES);
        config.solidity.bytecode_hash =
            validator.parse(&hash, BytecodeHash::parse, config.solidity.bytecode_hash);
    }

    config
}
