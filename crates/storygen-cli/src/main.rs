//! Storygen CLI - Storybook stories for decorator-annotated web components.
//!
//! This is the main entry point. It handles command-line argument parsing,
//! logging initialization, and command dispatch.

use clap::Parser;
use miette::Result;
use storygen_cli::{cli, commands, error, logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let result = match args.command {
        cli::Command::Generate(generate_args) => {
            commands::generate_execute(generate_args, args.quiet).await
        }
        cli::Command::Inspect(inspect_args) => commands::inspect_execute(inspect_args).await,
    };

    result.map_err(error::cli_error_to_miette)
}
