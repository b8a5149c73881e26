//! Command-line interface definition for Storygen.
//!
//! # Command Structure
//!
//! - `storygen generate` - Write a story beside every matching component
//! - `storygen inspect` - Print the story or JSON descriptor for one file

mod commands;
#[cfg(test)]
mod tests;

use clap::Parser;

pub use commands::{Command, GenerateArgs, InspectArgs, InspectFormat};

/// Storygen - Storybook stories for web components
#[derive(Parser, Debug)]
#[command(
    name = "storygen",
    version,
    about = "Generate Storybook stories for decorator-annotated web components",
    long_about = "Storygen scans TypeScript component sources for a customElement registration\n\
                  and @property/@state fields, then writes a Storybook story module beside\n\
                  each component."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
