//! Formatting for durations and the run summary.

use std::time::Duration;

use owo_colors::OwoColorize;
use storygen::GenerationSummary;

use super::colors_enabled;

/// Format a duration in the most readable unit.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use storygen_cli::ui::format_duration;
///
/// assert_eq!(format_duration(Duration::from_millis(50)), "50ms");
/// assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
/// assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let total_ms = duration.as_millis();

    if total_ms < 1000 {
        format!("{total_ms}ms")
    } else if total_ms < 60_000 {
        format!("{:.2}s", duration.as_secs_f64())
    } else {
        let secs = duration.as_secs();
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

/// Print the closing summary of a `generate` run to stderr.
pub fn print_summary(summary: &GenerationSummary, dry_run: bool, duration: Duration) {
    let verb = if dry_run { "rendered" } else { "generated" };
    let line = summary_line(summary, verb, duration);

    eprintln!();
    if !colors_enabled() {
        eprintln!("{line}");
    } else if summary.is_clean() {
        eprintln!("{}", line.green().bold());
    } else {
        eprintln!("{}", line.yellow().bold());
    }
}

fn summary_line(summary: &GenerationSummary, verb: &str, duration: Duration) -> String {
    format!(
        "Stories {verb}: {} succeeded, {} failed in {}",
        summary.success_count,
        summary.error_count,
        format_duration(duration)
    )
}
