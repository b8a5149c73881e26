//! Batch story generation.
//!
//! Files are discovered once, then processed one at a time in discovery
//! order. A failing file is reported and counted; it never stops the batch.
//! Only an invalid configuration or pattern makes [`Generator::run`] return
//! an error.

use std::fs;
use std::path::{Path, PathBuf};

use glob::MatchOptions;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::GeneratorConfig;
use crate::diagnostics::{DiagnosticSink, GenerationEvent, TracingSink};
use crate::error::{Result, StorygenError};
use crate::extract::{ExtractOptions, try_extract_properties, try_extract_tag};
use crate::generators::story::{RenderOptions, render};
use crate::model::ComponentDescriptor;

/// Aggregate outcome of a batch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationSummary {
    pub success_count: usize,
    pub error_count: usize,
}

impl GenerationSummary {
    pub fn total(&self) -> usize {
        self.success_count + self.error_count
    }

    /// Returns `true` when no file failed.
    pub fn is_clean(&self) -> bool {
        self.error_count == 0
    }
}

/// Generates Storybook stories next to component sources.
#[derive(Debug, Clone)]
pub struct Generator {
    config: GeneratorConfig,
    extract: ExtractOptions,
    render: RenderOptions,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        let extract = config.extract_options();
        let render = config.render_options();
        Self {
            config,
            extract,
            render,
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Run over `pattern`, reporting through `tracing`.
    pub fn run(&self, pattern: &str) -> Result<GenerationSummary> {
        self.run_with_sink(pattern, &mut TracingSink)
    }

    /// Run over `pattern`, reporting to `sink`.
    pub fn run_with_sink(
        &self,
        pattern: &str,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<GenerationSummary> {
        self.config.validate()?;
        let files = discover(pattern)?;
        let mut summary = GenerationSummary::default();

        if files.is_empty() {
            sink.emit(GenerationEvent::NoMatches {
                pattern: pattern.to_string(),
            });
            sink.emit(GenerationEvent::Finished { summary });
            return Ok(summary);
        }

        sink.emit(GenerationEvent::Discovered {
            pattern: pattern.to_string(),
            count: files.len(),
        });

        for path in &files {
            match self.process_file(path, sink) {
                Ok(output) => {
                    summary.success_count += 1;
                    sink.emit(GenerationEvent::Generated {
                        source: path.clone(),
                        output,
                        written: !self.config.dry_run,
                    });
                }
                Err(StorygenError::MissingTag { path }) => {
                    summary.error_count += 1;
                    sink.emit(GenerationEvent::MissingTag { path });
                }
                Err(error) => {
                    summary.error_count += 1;
                    sink.emit(GenerationEvent::FileFailed {
                        path: path.clone(),
                        error: error.to_string(),
                    });
                }
            }
        }

        sink.emit(GenerationEvent::Finished { summary });
        Ok(summary)
    }

    /// Analyze, render and write the story for one source. Returns the output path.
    pub fn process_file(&self, path: &Path, sink: &mut dyn DiagnosticSink) -> Result<PathBuf> {
        let component = self.analyze(path, sink)?;
        let output = self.output_path(path, &component.component_name);
        if output == path {
            return Err(StorygenError::OutputCollision {
                path: path.to_path_buf(),
            });
        }
        let story = render(
            &component.component_name,
            &component.tag_name,
            &component.properties,
            &self.render,
        );

        if self.config.dry_run {
            debug!("dry run, not writing {}", output.display());
        } else {
            fs::write(&output, story).map_err(|error| StorygenError::io(&output, error))?;
        }
        Ok(output)
    }

    /// Build the [`ComponentDescriptor`] for one source, logging through `tracing`.
    pub fn describe(&self, path: &Path) -> Result<ComponentDescriptor> {
        self.analyze(path, &mut TracingSink)
    }

    fn analyze(&self, path: &Path, sink: &mut dyn DiagnosticSink) -> Result<ComponentDescriptor> {
        let source = fs::read_to_string(path).map_err(|error| StorygenError::io(path, error))?;
        let component_name = self.component_name(path)?;

        let tag_name = try_extract_tag(&source, &self.extract)
            .unwrap_or_else(|error| {
                report_parse_failure(sink, path, &error);
                None
            })
            .ok_or_else(|| StorygenError::MissingTag {
                path: path.to_path_buf(),
            })?;

        let properties = try_extract_properties(&source, &self.extract).unwrap_or_else(|error| {
            report_parse_failure(sink, path, &error);
            Default::default()
        });

        Ok(ComponentDescriptor::new(component_name, tag_name, properties))
    }

    /// File stem with the source marker removed: `widget.ce.ts` -> `widget`.
    pub fn component_name(&self, path: &Path) -> Result<String> {
        let stem = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .ok_or_else(|| StorygenError::Other {
                message: format!("cannot derive a component name from {}", path.display()),
            })?;

        let marker = self.config.source_marker.as_str();
        Ok(match stem.strip_suffix(marker) {
            Some(name) if !marker.is_empty() && !name.is_empty() => name.to_string(),
            _ => stem,
        })
    }

    /// Story path beside the source.
    pub fn output_path(&self, source: &Path, component_name: &str) -> PathBuf {
        source.with_file_name(format!("{component_name}{}", self.config.output_suffix))
    }
}

fn report_parse_failure(sink: &mut dyn DiagnosticSink, path: &Path, error: &StorygenError) {
    sink.emit(GenerationEvent::ParseFailed {
        path: path.to_path_buf(),
        message: error.to_string(),
    });
}

/// Expand `pattern` into a deduplicated file list, in match order.
///
/// Brace groups (`{a,b}`) are expanded first, each alternative is then handed
/// to the glob engine. Wildcards do not match a leading dot, so hidden files
/// and directories are only found when named literally. Unreadable
/// directories are skipped with a warning.
pub fn discover(pattern: &str) -> Result<Vec<PathBuf>> {
    let options = MatchOptions {
        case_sensitive: true,
        require_literal_separator: false,
        require_literal_leading_dot: true,
    };
    let mut files = IndexSet::new();
    for alternative in expand_braces(pattern) {
        let paths =
            glob::glob_with(&alternative, options).map_err(|error| StorygenError::Pattern {
                pattern: pattern.to_string(),
                message: error.to_string(),
            })?;
        for entry in paths {
            match entry {
                Ok(path) => {
                    files.insert(path);
                }
                Err(error) => warn!("skipping unreadable path: {error}"),
            }
        }
    }
    Ok(files.into_iter().collect())
}

/// `src/{a,b}/*.ts` -> `["src/a/*.ts", "src/b/*.ts"]`. Groups without a
/// top-level comma are kept literally.
pub(crate) fn expand_braces(pattern: &str) -> Vec<String> {
    let Some((open, close)) = find_brace_group(pattern) else {
        return vec![pattern.to_string()];
    };
    let prefix = &pattern[..open];
    let body = &pattern[open + 1..close];
    let suffix = &pattern[close + 1..];

    let alternatives = split_top_level(body);
    if alternatives.len() < 2 {
        return expand_braces(suffix)
            .into_iter()
            .map(|rest| format!("{prefix}{{{body}}}{rest}"))
            .collect();
    }

    alternatives
        .into_iter()
        .flat_map(|alternative| expand_braces(&format!("{prefix}{alternative}{suffix}")))
        .collect()
}

fn find_brace_group(pattern: &str) -> Option<(usize, usize)> {
    let open = pattern.find('{')?;
    let mut depth = 0usize;
    for (offset, ch) in pattern[open..].char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some((open, open + offset));
                }
            }
            _ => {}
        }
    }
    None
}

fn split_top_level(body: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (index, ch) in body.char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&body[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }
    parts.push(&body[start..]);
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_brace_groups() {
        assert_eq!(
            expand_braces("src/{a,b}/*.ce.ts"),
            vec!["src/a/*.ce.ts", "src/b/*.ce.ts"]
        );
        assert_eq!(
            expand_braces("{x,y}/{1,2}"),
            vec!["x/1", "x/2", "y/1", "y/2"]
        );
        assert_eq!(expand_braces("a/{b,{c,d}}"), vec!["a/b", "a/c", "a/d"]);
    }

    #[test]
    fn keeps_literal_and_unbalanced_braces() {
        assert_eq!(expand_braces("no/braces/*.ts"), vec!["no/braces/*.ts"]);
        assert_eq!(expand_braces("lit/{one}/*.ts"), vec!["lit/{one}/*.ts"]);
        assert_eq!(expand_braces("open/{a,b"), vec!["open/{a,b"]);
    }

    #[test]
    fn component_name_strips_extension_then_marker() {
        let generator = Generator::new(GeneratorConfig::default());
        let name = |p: &str| generator.component_name(Path::new(p)).unwrap();
        assert_eq!(name("src/widget.ce.ts"), "widget");
        assert_eq!(name("src/my-button.ce.ts"), "my-button");
        assert_eq!(name("src/plain.ts"), "plain");
        assert_eq!(name("src/.ce.ts"), ".ce");
    }

    #[test]
    fn output_path_sits_beside_source() {
        let generator = Generator::new(GeneratorConfig::default());
        assert_eq!(
            generator.output_path(Path::new("src/ui/widget.ce.ts"), "widget"),
            PathBuf::from("src/ui/widget.stories.ts")
        );
    }

    #[test]
    fn invalid_pattern_is_an_error() {
        let err = discover("src/[*.ts").unwrap_err();
        assert!(matches!(err, StorygenError::Pattern { .. }));
    }

    #[test]
    fn wildcards_skip_hidden_entries() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(".cache")).unwrap();
        std::fs::write(dir.path().join(".cache/stale.ce.ts"), "").unwrap();
        std::fs::write(dir.path().join(".draft.ce.ts"), "").unwrap();
        std::fs::write(dir.path().join("visible.ce.ts"), "").unwrap();

        let files = discover(&format!("{}/**/*.ce.ts", dir.path().display())).unwrap();
        assert_eq!(files, vec![dir.path().join("visible.ce.ts")]);
    }

    #[test]
    fn summary_helpers() {
        let summary = GenerationSummary {
            success_count: 2,
            error_count: 1,
        };
        assert_eq!(summary.total(), 3);
        assert!(!summary.is_clean());
    }
}
