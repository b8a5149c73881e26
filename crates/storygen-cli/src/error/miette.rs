//! Miette diagnostic conversion for CLI errors.

use miette::Report;

use crate::error::CliError;

/// Convert a [`CliError`] into a miette report.
///
/// Library errors already implement `Diagnostic` and keep their codes.
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Storygen(error) => Report::new(error),
        other => miette::miette!("{}", other),
    }
}
