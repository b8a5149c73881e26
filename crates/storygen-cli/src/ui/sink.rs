use storygen::{DiagnosticSink, GenerationEvent, Severity};
use tracing::debug;

use super::messages;

/// Prints generation events as status lines.
///
/// In quiet mode only errors are printed. The closing
/// [`GenerationEvent::Finished`] is left to [`super::print_summary`].
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalSink {
    quiet: bool,
}

impl TerminalSink {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl DiagnosticSink for TerminalSink {
    fn emit(&mut self, event: GenerationEvent) {
        debug!(severity = ?event.severity(), "{event}");

        let message = event.to_string();
        match (&event, event.severity()) {
            (GenerationEvent::Finished { .. }, _) => {}
            (_, Severity::Error) => messages::error(&message),
            _ if self.quiet => {}
            (GenerationEvent::Generated { .. }, _) => messages::success(&message),
            (_, Severity::Warning) => messages::warning(&message),
            (_, Severity::Info) => messages::info(&message),
        }
    }
}
