//! Generate command implementation.

use std::time::Instant;

use figment::providers::Serialized;
use storygen::{GenerationSummary, Generator, GeneratorConfig, StorygenError};
use tracing::debug;

use crate::cli::GenerateArgs;
use crate::error::{CliError, Result};
use crate::ui;

/// Execute the generate command.
///
/// # Steps
///
/// 1. Resolve configuration (defaults, config file, environment, flags)
/// 2. Run the batch on a blocking thread, printing each event
/// 3. Print the summary
///
/// # Errors
///
/// Configuration and pattern errors abort the command. Per-file failures
/// only do so with `--fail-on-error`.
pub async fn execute(args: GenerateArgs, quiet: bool) -> Result<()> {
    let config = resolve_config(&args)?;
    let dry_run = config.dry_run;

    if !quiet {
        ui::info(&format!("Generating stories for '{}'", config.pattern));
    }

    let started = Instant::now();
    let summary = run(config, ui::TerminalSink::new(quiet)).await?;

    if !quiet {
        ui::print_summary(&summary, dry_run, started.elapsed());
    }

    if args.fail_on_error && !summary.is_clean() {
        return Err(CliError::GenerationFailed {
            failed: summary.error_count,
            total: summary.total(),
        });
    }
    Ok(())
}

/// Run the batch for `config.pattern`, reporting to `sink`.
pub async fn run(config: GeneratorConfig, mut sink: ui::TerminalSink) -> Result<GenerationSummary> {
    let summary = tokio::task::spawn_blocking(move || {
        let pattern = config.pattern.clone();
        Generator::new(config).run_with_sink(&pattern, &mut sink)
    })
    .await??;
    Ok(summary)
}

/// Layer command-line flags over the loaded configuration and validate it.
pub fn resolve_config(args: &GenerateArgs) -> Result<GeneratorConfig> {
    let mut figment = GeneratorConfig::figment(args.config.as_deref())?;

    if let Some(pattern) = &args.pattern {
        figment = figment.merge(Serialized::default("pattern", pattern));
    }
    if let Some(suffix) = &args.output_suffix {
        figment = figment.merge(Serialized::default("output_suffix", suffix));
    }
    if let Some(prefix) = &args.title_prefix {
        figment = figment.merge(Serialized::default("title_prefix", prefix));
    }
    if args.dry_run {
        figment = figment.merge(Serialized::default("dry_run", true));
    }

    let config: GeneratorConfig = figment
        .extract()
        .map_err(|error| StorygenError::config("configuration", error.to_string()))?;
    config.validate()?;
    debug!("resolved configuration: {config:?}");
    Ok(config)
}
