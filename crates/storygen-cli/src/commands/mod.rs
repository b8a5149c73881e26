//! Command implementations for the Storygen CLI.
//!
//! - [`generate`] - Batch story generation
//! - [`inspect`] - Single-file preview
//!
//! Each command provides an `execute` function that takes the parsed
//! arguments and returns a Result.

pub mod generate;
pub mod inspect;

pub use generate::execute as generate_execute;
pub use inspect::execute as inspect_execute;
