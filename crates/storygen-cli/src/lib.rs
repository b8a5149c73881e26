//! Storygen CLI - Storybook stories for decorator-annotated web components.
//!
//! This crate provides the command-line interface for the `storygen` library.
//!
//! # Architecture
//!
//! - [`cli`] - clap argument definitions
//! - `commands` - `generate` and `inspect` implementations
//! - [`error`] - CLI error type and miette conversion
//! - [`logger`] - Structured logging with tracing
//! - [`ui`] - Colored status lines and the run summary
//!
//! # Example
//!
//! ```rust,no_run
//! use storygen_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result};
