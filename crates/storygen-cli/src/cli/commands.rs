use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

/// Available Storygen subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate stories for every component matching a pattern
    ///
    /// Each matching file that registers a custom element gets a
    /// `<name>.stories.ts` file written next to it. Files that fail are
    /// reported and skipped; the rest of the batch still runs.
    Generate(GenerateArgs),

    /// Print the story (or JSON descriptor) for a single component
    ///
    /// Nothing is written to disk.
    Inspect(InspectArgs),
}

/// Arguments for the generate command
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Glob selecting component sources
    ///
    /// Brace groups are expanded, e.g. `src/{atoms,molecules}/**/*.ce.ts`.
    /// Defaults to the configured pattern (`src/**/*.ce.ts`).
    #[arg(value_name = "PATTERN")]
    pub pattern: Option<String>,

    /// Path to a storygen.toml or storygen.config.json file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Suffix of generated story files
    #[arg(long, value_name = "SUFFIX")]
    pub output_suffix: Option<String>,

    /// Prefix of the Storybook title
    #[arg(long, value_name = "PREFIX")]
    pub title_prefix: Option<String>,

    /// Render stories without writing them
    #[arg(long)]
    pub dry_run: bool,

    /// Exit with an error when any file fails
    #[arg(long)]
    pub fail_on_error: bool,
}

/// Arguments for the inspect command
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Component source to analyze
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Path to a storygen.toml or storygen.config.json file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "story")]
    pub format: InspectFormat,
}

/// What `inspect` prints
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InspectFormat {
    /// The story module that `generate` would write
    #[default]
    Story,
    /// The analyzed component as JSON
    Json,
}
