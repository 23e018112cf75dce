//! Output Rendering
//!
//! Text for people, one JSON object per command for scripts. Signing secrets are
//! never rendered; API keys only when explicitly revealed.

use std::io::Write;
use std::path::Path;

use serde_json::{json, Value};

use crate::application::{CompilePlan, DeployPlan, VerifyPlan};
use crate::domain::entities::{CompilerProfile, NetworkTarget};
use crate::domain::services::TargetRegistry;
use crate::domain::value_objects::SourcePathSet;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Write one JSON document followed by a newline.
pub fn emit_json<W: Write>(writer: &mut W, value: &Value) -> std::io::Result<()> {
    serde_json::to_writer(&mut *writer, value)?;
    writeln!(writer)
}

fn envelope(command: &str, mut body: Value) -> Value {
    if let Value::Object(map) = &mut body {
        map.insert("event".to_string(), json!("data"));
        map.insert("command".to_string(), json!(command));
    }
    body
}

// === sources ===

/// One path per line, shown relative to `project_root` when possible.
pub fn render_sources(sources: &SourcePathSet, project_root: &Path) -> String {
    let mut out = String::new();
    for path in sources.iter() {
        let shown = Path::new(path)
            .strip_prefix(project_root)
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_else(|_| path.to_string());
        out.push_str(&shown);
        out.push('\n');
    }
    out
}

pub fn sources_json(plan: &CompilePlan, project_root: &Path) -> Value {
    envelope(
        "sources",
        json!({
            "project": project_root.to_string_lossy(),
            "count": plan.sources.len(),
            "sources": plan.sources,
        }),
    )
}

// === profile ===

pub fn render_profile(profile: &CompilerProfile) -> String {
    let optimizer = profile.optimizer();
    let optimizer = if optimizer.enabled {
        format!("enabled ({} runs)", optimizer.runs)
    } else {
        "disabled".to_string()
    };
    format!(
        "solc:           {}\nbytecode hash:  {}\noptimizer:      {}\nfingerprint:    {}\n",
        profile.version(),
        profile.bytecode_hash().as_str(),
        optimizer,
        profile.fingerprint()
    )
}

pub fn profile_json(profile: &CompilerProfile) -> Value {
    envelope(
        "profile",
        json!({
            "version": profile.version(),
            "settings": profile.solc_settings(),
            "fingerprint": profile.fingerprint(),
        }),
    )
}

// === networks ===

/// Fixed-width table of every target in catalog order.
pub fn render_networks(registry: &TargetRegistry) -> String {
    let name_width = registry
        .names()
        .map(str::len)
        .chain(std::iter::once("NETWORK".len()))
        .max()
        .unwrap_or_default();

    let mut out = format!(
        "{:<name_width$}  {:>8}  {:<9}  {:<6}  {}\n",
        "NETWORK", "CHAIN ID", "FAMILY", "SIGNER", "ENDPOINT"
    );
    for target in registry.targets() {
        out.push_str(&format!(
            "{:<name_width$}  {:>8}  {:<9}  {:<6}  {}\n",
            target.name,
            target.chain_id,
            target.family,
            if target.can_sign() { "yes" } else { "no" },
            target.endpoint
        ));
    }
    out
}

pub fn networks_json(registry: &TargetRegistry) -> Value {
    let networks: Vec<Value> = registry.targets().map(target_value).collect();
    envelope("networks", json!({ "networks": networks }))
}

// === target ===

pub fn render_target(plan: &DeployPlan) -> String {
    let target = &plan.target;
    let signer = match target.signing_keys.first() {
        Some(key) => key.masked(),
        None => "none (PRIVATE_KEY not set)".to_string(),
    };
    format!(
        "network:   {}\nchain id:  {}\nfamily:    {}\nendpoint:  {}\nsigner:    {}\n",
        target.name, target.chain_id, target.family, target.endpoint, signer
    )
}

pub fn target_json(plan: &DeployPlan) -> Value {
    envelope("target", target_value(&plan.target))
}

fn target_value(target: &NetworkTarget) -> Value {
    json!({
        "name": target.name,
        "chain_id": target.chain_id,
        "family": target.family,
        "endpoint": target.endpoint,
        "signing_keys": target.signing_keys.len(),
        "signer": target.signing_keys.first().map(|k| k.masked()),
    })
}

// === verify-key ===

pub fn render_verify(plan: &VerifyPlan, reveal: bool) -> String {
    let credential = &plan.credential;
    let key = if !credential.is_authenticated() {
        "(not set)".to_string()
    } else if reveal {
        credential.api_key.clone()
    } else {
        "(set)".to_string()
    };

    let mut out = String::new();
    if let Some(network) = &plan.network {
        out.push_str(&format!("network:   {}\n", network));
    }
    out.push_str(&format!(
        "family:    {}\nexplorer:  {}\napi key:   {}\n",
        credential.family,
        credential.family.explorer(),
        key
    ));
    out
}

pub fn verify_json(plan: &VerifyPlan, reveal: bool) -> Value {
    let credential = &plan.credential;
    let mut body = json!({
        "network": plan.network,
        "family": credential.family,
        "explorer": credential.family.explorer(),
        "api_key_set": credential.is_authenticated(),
    });
    if reveal {
        body["api_key"] = json!(credential.api_key);
    }
    envelope("verify-key", body)
}
