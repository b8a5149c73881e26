use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type alias for story generation operations.
pub type Result<T> = std::result::Result<T, StorygenError>;

/// Error variants for component analysis and story generation.
#[derive(Debug, Error, Diagnostic)]
pub enum StorygenError {
    /// Failed to read or write a file.
    #[error("I/O error on '{path}': {error}")]
    #[diagnostic(code(storygen::io))]
    Io {
        /// Path of the file that caused the error.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        error: std::io::Error,
    },

    /// Parsing the component source with OXC failed.
    #[error("failed to parse source: {message}")]
    #[diagnostic(
        code(storygen::parse),
        help("only TypeScript class components with decorators are supported")
    )]
    Parse {
        /// Aggregated parser error message.
        message: String,
    },

    /// The file-matching pattern could not be expanded.
    #[error("invalid file pattern '{pattern}': {message}")]
    #[diagnostic(code(storygen::pattern))]
    Pattern {
        /// Pattern as supplied by the caller.
        pattern: String,
        /// Reason reported by the glob engine.
        message: String,
    },

    /// A component source has no registration call.
    #[error("no registration call found in '{path}'")]
    #[diagnostic(
        code(storygen::missing_tag),
        help("register the component with a tag name, e.g. @customElement('my-element')")
    )]
    MissingTag {
        /// Source file without a tag.
        path: PathBuf,
    },

    /// The story would be written over its own source.
    #[error("story output for '{path}' would overwrite the source")]
    #[diagnostic(
        code(storygen::output_collision),
        help("choose an output suffix that differs from the source extension")
    )]
    OutputCollision {
        /// Source file that would be replaced.
        path: PathBuf,
    },

    /// Configuration could not be loaded or is invalid.
    #[error("invalid configuration for '{field}': {message}")]
    #[diagnostic(code(storygen::config))]
    Config {
        /// Offending configuration key.
        field: String,
        /// What is wrong with it.
        message: String,
    },

    /// Generic error variant.
    #[error("{message}")]
    #[diagnostic(code(storygen::other))]
    Other {
        /// Human-readable error message.
        message: String,
    },
}

impl StorygenError {
    /// Helper to create a parse error from multiple diagnostic strings.
    pub fn parse_error(diagnostics: &[String]) -> Self {
        Self::Parse {
            message: diagnostics.join("; "),
        }
    }

    /// Helper to attach a path to an I/O error.
    pub fn io(path: impl Into<PathBuf>, error: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            error,
        }
    }

    pub fn config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Config {
            field: field.into(),
            message: message.into(),
        }
    }
}
