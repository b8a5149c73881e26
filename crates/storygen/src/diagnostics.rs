//! Diagnostic events emitted while generating stories.
//!
//! The generator never prints. It reports progress and per-file outcomes as
//! [`GenerationEvent`]s to a caller-supplied [`DiagnosticSink`]; the default
//! [`TracingSink`] forwards them to `tracing`.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{error, info, warn};

use crate::generator::GenerationSummary;

/// How serious an event is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// Something that happened during a generation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GenerationEvent {
    /// The pattern matched `count` files.
    Discovered { pattern: String, count: usize },
    /// The pattern matched nothing.
    NoMatches { pattern: String },
    /// A source failed to parse; extraction continues as "nothing found".
    ParseFailed { path: PathBuf, message: String },
    /// A source has no registration call and was skipped.
    MissingTag { path: PathBuf },
    /// A story was rendered (and written unless this is a dry run).
    Generated {
        source: PathBuf,
        output: PathBuf,
        written: bool,
    },
    /// Processing a file failed.
    FileFailed { path: PathBuf, error: String },
    /// The batch is done.
    Finished { summary: GenerationSummary },
}

impl GenerationEvent {
    pub fn severity(&self) -> Severity {
        match self {
            Self::Discovered { .. } | Self::Generated { .. } | Self::Finished { .. } => {
                Severity::Info
            }
            Self::NoMatches { .. } | Self::ParseFailed { .. } | Self::MissingTag { .. } => {
                Severity::Warning
            }
            Self::FileFailed { .. } => Severity::Error,
        }
    }

    /// Source file the event refers to, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::ParseFailed { path, .. }
            | Self::MissingTag { path }
            | Self::FileFailed { path, .. } => Some(path),
            Self::Generated { source, .. } => Some(source),
            Self::Discovered { .. } | Self::NoMatches { .. } | Self::Finished { .. } => None,
        }
    }
}

impl fmt::Display for GenerationEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Discovered { pattern, count } => {
                write!(f, "found {count} component file(s) matching '{pattern}'")
            }
            Self::NoMatches { pattern } => write!(f, "no files match '{pattern}'"),
            Self::ParseFailed { path, message } => {
                write!(f, "failed to parse {}: {message}", path.display())
            }
            Self::MissingTag { path } => {
                write!(f, "no registration call in {}, skipping", path.display())
            }
            Self::Generated {
                output,
                written: true,
                ..
            } => write!(f, "generated {}", output.display()),
            Self::Generated {
                output,
                written: false,
                ..
            } => write!(f, "would generate {}", output.display()),
            Self::FileFailed { path, error } => {
                write!(f, "error processing {}: {error}", path.display())
            }
            Self::Finished { summary } => write!(
                f,
                "story generation finished: {} succeeded, {} failed",
                summary.success_count, summary.error_count
            ),
        }
    }
}

/// Receives generation events.
pub trait DiagnosticSink {
    fn emit(&mut self, event: GenerationEvent);
}

impl<F> DiagnosticSink for F
where
    F: FnMut(GenerationEvent),
{
    fn emit(&mut self, event: GenerationEvent) {
        self(event)
    }
}

/// Forwards events to `tracing` at the matching level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&mut self, event: GenerationEvent) {
        match event.severity() {
            Severity::Info => info!("{event}"),
            Severity::Warning => warn!("{event}"),
            Severity::Error => error!("{event}"),
        }
    }
}

/// Keeps every event in memory.
#[derive(Debug, Default, Clone)]
pub struct CollectingSink {
    events: Vec<GenerationEvent>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[GenerationEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<GenerationEvent> {
        self.events
    }

    /// Number of collected events with the given severity.
    pub fn count(&self, severity: Severity) -> usize {
        self.events
            .iter()
            .filter(|event| event.severity() == severity)
            .count()
    }
}

impl DiagnosticSink for CollectingSink {
    fn emit(&mut self, event: GenerationEvent) {
        self.events.push(event);
    }
}
