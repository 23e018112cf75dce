//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::entities::CompilerProfile;
use crate::domain::ports::{EnvSource, SourceQuery};
use crate::domain::services::closest_match;
use crate::domain::value_objects::{ConfigWarning, Secrets};
use crate::error::{PipelineError, PipelineResult};

use super::env::capture_secrets;
use super::types::Config;

/// Project config file looked up in the project root.
pub const CONFIG_FILE_NAME: &str = "solpipe.toml";

/// Everything loaded at startup, handed by reference to the rest of the program.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub project_root: PathBuf,
    /// The file that was read, if any
    pub config_file: Option<PathBuf>,
    pub config: Config,
    pub secrets: Secrets,
    pub warnings: Vec<ConfigWarning>,
}

impl LoadedConfig {
    pub fn compiler_profile(&self) -> PipelineResult<CompilerProfile> {
        self.config.compiler_profile()
    }

    pub fn source_query(&self) -> SourceQuery {
        self.config.source_query(&self.project_root)
    }
}

/// Load configuration for the project rooted at `project_root`.
///
/// `config_path` overrides the default `<root>/solpipe.toml`; an explicit path must
/// exist, the default one may be absent. Env overrides and secrets come from `env`.
pub fn load_project(
    project_root: &Path,
    config_path: Option<&Path>,
    env: &dyn EnvSource,
) -> PipelineResult<LoadedConfig> {
    let (config_file, config, warnings) = match config_path {
        Some(path) => {
            let (config, warnings) = load_with_warnings(path)?;
            (Some(path.to_path_buf()), config, warnings)
        }
        None => {
            let default_path = project_root.join(CONFIG_FILE_NAME);
            if default_path.is_file() {
                let (config, warnings) = load_with_warnings(&default_path)?;
                (Some(default_path), config, warnings)
            } else {
                debug!(
                    root = %project_root.display(),
                    "no {} found, using defaults",
                    CONFIG_FILE_NAME
                );
                (None, Config::default(), Vec::new())
            }
        }
    };

    for warning in &warnings {
        warn!("{}", warning);
    }

    let config = config.with_env_overrides(env);
    let secrets = capture_secrets(env);

    Ok(LoadedConfig {
        project_root: project_root.to_path_buf(),
        config_file,
        config,
        secrets,
        warnings,
    })
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> PipelineResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| PipelineError::ConfigParse {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &path_str),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Line of the key or table header whose dotted path is `key_path`.
///
/// Keys are matched inside the table they belong to, so `run` under `[sources]`
/// is not confused with `runs` under `[solidity.optimizer]`.
fn find_line_number(content: &str, key_path: &str) -> Option<usize> {
    let mut table = String::new();

    for (idx, line) in content.lines().enumerate() {
        let line = line.trim();
        if let Some(header) = header_name(line) {
            let unknown_table = header
                .strip_prefix(key_path)
                .is_some_and(|rest| rest.is_empty() || rest.starts_with('.'));
            if unknown_table {
                return Some(idx + 1);
            }
            table = header;
            continue;
        }
        let Some(key) = assigned_key(line) else {
            continue;
        };
        let full = if table.is_empty() {
            key
        } else {
            format!("{}.{}", table, key)
        };
        if full == key_path {
            return Some(idx + 1);
        }
    }
    None
}

/// `[a.b]` or `[[a.b]]` -> `a.b`
fn header_name(line: &str) -> Option<String> {
    let inner = line.strip_prefix('[')?.trim_start_matches('[');
    let end = inner.find(']')?;
    Some(normalize_key(&inner[..end]))
}

/// `a.b = 1` -> `a.b`
fn assigned_key(line: &str) -> Option<String> {
    if line.starts_with('#') {
        return None;
    }
    let (key, _) = line.split_once('=')?;
    let key = normalize_key(key);
    (!key.is_empty()).then_some(key)
}

fn normalize_key(raw: &str) -> String {
    raw.split('.')
        .map(|part| part.trim().trim_matches('"').trim_matches('\''))
        .collect::<Vec<_>>()
        .join(".")
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "solidity",
        "version",
        "bytecode_hash",
        "optimizer",
        "enabled",
        "runs",
        "sources",
        "root",
        "include",
        "exclude",
        "test_suffixes",
    ];

    closest_match(unknown, CANDIDATES.iter().copied(), 2)
        .filter(|candidate| *candidate != unknown)
        .map(str::to_string)
}
