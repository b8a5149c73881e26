//! Logging infrastructure for the Storygen CLI.
//!
//! Library events reach the terminal through `tracing`. The filter is chosen
//! from the global flags, with `RUST_LOG` taking over when neither
//! `--verbose` nor `--quiet` is given.
//!
//! # Example
//!
//! ```rust,no_run
//! use storygen_cli::logger::init_logger;
//! use tracing::info;
//!
//! init_logger(false, false, false);
//! info!("Generating stories");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "storygen=debug,storygen_cli=debug";
const QUIET_FILTER: &str = "storygen=error,storygen_cli=error";
const DEFAULT_FILTER: &str = "storygen=info,storygen_cli=info";

/// Initialize the tracing subscriber.
///
/// Must be called once, before any logging occurs.
///
/// # Verbosity Levels
///
/// 1. `--verbose`: DEBUG for storygen crates
/// 2. `--quiet`: ERROR only
/// 3. `RUST_LOG` environment variable
/// 4. Default: INFO for storygen crates
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    init_logger_with_filter(filter_for(verbose, quiet), no_color);
}

/// Initialize the logger with an explicit filter.
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .with_writer(std::io::stderr)
        .compact();

    // A second initialization (tests, embedders) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

fn filter_for(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_wins_over_quiet() {
        assert!(filter_for(true, true).to_string().contains("debug"));
    }

    #[test]
    fn quiet_filter_is_errors_only() {
        let filter = filter_for(false, true).to_string();
        assert!(filter.contains("storygen=error"));
        assert!(!filter.contains("info"));
    }

    #[test]
    fn repeated_initialization_does_not_panic() {
        init_logger(false, true, true);
        init_logger(false, true, true);
    }
}
