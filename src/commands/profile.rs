use std::path::Path;

use anyhow::Result;

use solpipe::presentation::{factory, output, OutputFormat};

pub fn cmd_profile(project: &Path, config: Option<&Path>, format: OutputFormat) -> Result<()> {
    let loaded = factory::load_config(project, config)?;
    let profile = loaded.compiler_profile()?;

    match format {
        OutputFormat::Json => {
            output::emit_json(&mut std::io::stdout(), &output::profile_json(&profile))?
        }
        OutputFormat::Text => print!("{}", output::render_profile(&profile)),
    }
    Ok(())
}
