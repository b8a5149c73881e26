//! Inspect command implementation.
//!
//! Prints what `generate` would produce for one file, without writing it.

use std::io::Write;
use std::path::Path;

use storygen::{Generator, GeneratorConfig, render_component};

use crate::cli::{InspectArgs, InspectFormat};
use crate::error::{CliError, Result};

/// Execute the inspect command.
pub async fn execute(args: InspectArgs) -> Result<()> {
    if !args.file.is_file() {
        return Err(CliError::FileNotFound(args.file));
    }

    let config = GeneratorConfig::load(args.config.as_deref())?;
    config.validate()?;

    let output = render(&Generator::new(config), &args.file, args.format)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Analyze `path` and render it in the requested format.
pub fn render(generator: &Generator, path: &Path, format: InspectFormat) -> Result<String> {
    let component = generator.describe(path)?;
    match format {
        InspectFormat::Story => Ok(render_component(
            &component,
            &generator.config().render_options(),
        )),
        InspectFormat::Json => render_json(&component),
    }
}

#[cfg(feature = "json")]
fn render_json(component: &storygen::ComponentDescriptor) -> Result<String> {
    let mut json = storygen::render_json(component)?;
    json.push('\n');
    Ok(json)
}

#[cfg(not(feature = "json"))]
fn render_json(_component: &storygen::ComponentDescriptor) -> Result<String> {
    Err(CliError::InvalidArgument(
        "--format json requires the `json` feature".to_string(),
    ))
}
