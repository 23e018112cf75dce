//! Target command handler
//!
//! Prints what a deploy task needs for one network. The signing key is masked.

use std::path::Path;

use anyhow::Result;

use solpipe::application::DeployPlan;
use solpipe::presentation::{factory, output, OutputFormat};

pub fn cmd_target(
    project: &Path,
    config: Option<&Path>,
    network: &str,
    format: OutputFormat,
) -> Result<()> {
    let loaded = factory::load_config(project, config)?;
    let registry = factory::create_registry(&loaded);
    let plan = DeployPlan::prepare(&registry, network)?;

    match format {
        OutputFormat::Json => {
            output::emit_json(&mut std::io::stdout(), &output::target_json(&plan))?
        }
        OutputFormat::Text => print!("{}", output::render_target(&plan)),
    }
    Ok(())
}
