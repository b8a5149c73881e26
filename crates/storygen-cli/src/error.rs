//! Error handling for the Storygen CLI.
//!
//! Library failures arrive as [`StorygenError`] and keep their diagnostic
//! codes; everything the CLI itself detects is a [`CliError`] variant with an
//! actionable hint.

mod miette;

use std::path::PathBuf;

use storygen::StorygenError;
use thiserror::Error;

pub use self::miette::cli_error_to_miette;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Errors from the storygen library (config, pattern, parse, I/O)
    #[error(transparent)]
    Storygen(#[from] StorygenError),

    /// Invalid command-line arguments or options
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Input file passed on the command line does not exist
    #[error("File not found: {}\n\nHint: Check the path passed to `storygen inspect`", .0.display())]
    FileNotFound(PathBuf),

    /// `--fail-on-error` was given and at least one file failed
    #[error("{failed} of {total} component file(s) failed\n\nHint: Re-run with --verbose to see each failure")]
    GenerationFailed {
        /// Files that produced no story
        failed: usize,
        /// Files matched by the pattern
        total: usize,
    },

    /// I/O errors writing to the terminal
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The blocking generation task panicked or was cancelled
    #[error("Generation task failed: {0}")]
    Task(String),
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

impl From<tokio::task::JoinError> for CliError {
    fn from(error: tokio::task::JoinError) -> Self {
        CliError::Task(error.to_string())
    }
}
