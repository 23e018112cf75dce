use std::path::Path;

use anyhow::Result;

use solpipe::application::CompilePlan;
use solpipe::presentation::{factory, output, OutputFormat};

pub fn cmd_sources(project: &Path, config: Option<&Path>, format: OutputFormat) -> Result<()> {
    let loaded = factory::load_config(project, config)?;
    let pipeline = factory::create_pipeline(&loaded);
    let plan = CompilePlan::prepare(&loaded, &pipeline)?;

    let root = loaded.project_root.as_path();
    match format {
        OutputFormat::Json => {
            output::emit_json(&mut std::io::stdout(), &output::sources_json(&plan, root))?
        }
        OutputFormat::Text => print!("{}", output::render_sources(&plan.sources, root)),
    }
    Ok(())
}
