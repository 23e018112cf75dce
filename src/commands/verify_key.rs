//! Verify-key command handler

use std::path::Path;

use anyhow::Result;

use solpipe::application::VerifyPlan;
use solpipe::presentation::{factory, output, OutputFormat};

pub fn cmd_verify_key(
    project: &Path,
    config: Option<&Path>,
    name: &str,
    reveal: bool,
    format: OutputFormat,
) -> Result<()> {
    let loaded = factory::load_config(project, config)?;
    let registry = factory::create_registry(&loaded);
    let plan = VerifyPlan::prepare(&registry, name)?;

    match format {
        OutputFormat::Json => {
            output::emit_json(&mut std::io::stdout(), &output::verify_json(&plan, reveal))?
        }
        OutputFormat::Text => print!("{}", output::render_verify(&plan, reveal)),
    }
    Ok(())
}
