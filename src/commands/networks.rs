use std::path::Path;

use anyhow::Result;

use solpipe::presentation::{factory, output, OutputFormat};

pub fn cmd_networks(project: &Path, config: Option<&Path>, format: OutputFormat) -> Result<()> {
    let loaded = factory::load_config(project, config)?;
    let registry = factory::create_registry(&loaded);

    match format {
        OutputFormat::Json => {
            output::emit_json(&mut std::io::stdout(), &output::networks_json(&registry))?
        }
        OutputFormat::Text => print!("{}", output::render_networks(&registry)),
    }
    Ok(())
}
