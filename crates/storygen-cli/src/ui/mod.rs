//! Terminal UI: colored status lines and the run summary.
//!
//! All output goes to stderr so that `storygen inspect` can be piped.
//!
//! # Examples
//!
//! ```no_run
//! use storygen_cli::ui;
//!
//! ui::init_colors(false);
//! ui::success("generated src/widget.stories.ts");
//! ui::warning("no registration call in src/loose.ce.ts, skipping");
//! ```

mod format;
mod messages;
mod sink;

use std::sync::atomic::{AtomicBool, Ordering};

pub use format::{format_duration, print_summary};
pub use messages::{error, info, success, warning};
pub use sink::TerminalSink;

static COLORS_ENABLED: AtomicBool = AtomicBool::new(true);

/// Check if color output should be enabled.
///
/// Respects `NO_COLOR` and `FORCE_COLOR`, then falls back to terminal
/// detection on stderr.
pub fn should_use_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }
    console::user_attended_stderr()
}

/// Decide once whether status lines are colored. `--no-color` always wins.
pub fn init_colors(no_color: bool) {
    COLORS_ENABLED.store(!no_color && should_use_color(), Ordering::Relaxed);
}

pub(crate) fn colors_enabled() -> bool {
    COLORS_ENABLED.load(Ordering::Relaxed)
}
