use std::fs;
use std::path::Path;

use storygen::{
    CollectingSink, GenerationEvent, GenerationSummary, Generator, GeneratorConfig, Severity,
};
use tempfile::TempDir;

const WIDGET: &str = r#"
@customElement('my-widget')
export class Widget extends LitElement {
  @property() label: string = 'Hi';
  @state() count: number = 0;
}
"#;

fn write(dir: &Path, name: &str, contents: impl AsRef<[u8]>) {
    fs::write(dir.join(name), contents).unwrap();
}

fn pattern(dir: &TempDir) -> String {
    format!("{}/*.ce.ts", dir.path().display())
}

#[test]
fn generates_story_beside_source() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "widget.ce.ts", WIDGET);

    let generator = Generator::new(GeneratorConfig::default());
    let summary = generator.run(&pattern(&dir)).unwrap();
    assert_eq!(
        summary,
        GenerationSummary {
            success_count: 1,
            error_count: 0
        }
    );

    let story = fs::read_to_string(dir.path().join("widget.stories.ts")).unwrap();
    assert!(story.contains("import './widget.ce';"));
    assert!(story.contains("title: 'Components/Widget',"));
    assert!(story.contains("component: 'my-widget',"));
    assert!(story.contains("tags: ['autodocs'],"));
    assert!(story.contains(
        "    label: {\n      control: 'text',\n      description: 'label property',\n"
    ));
    assert!(story.contains("type: { summary: 'string' },"));
    assert!(story.contains("defaultValue: { summary: '\"Hi\"' },"));
    assert!(story.contains("    count: {\n      control: 'number',"));
    assert!(story.contains("defaultValue: { summary: '0' },"));
    assert!(story.contains("  args: {\n    label: \"Hi\",\n    count: 0,\n  },"));
}

#[test]
fn source_without_registration_is_counted_as_error() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "loose.ce.ts",
        "export class Loose { @property() a: string; }",
    );

    let mut sink = CollectingSink::new();
    let generator = Generator::new(GeneratorConfig::default());
    let summary = generator.run_with_sink(&pattern(&dir), &mut sink).unwrap();

    assert_eq!(summary.success_count, 0);
    assert_eq!(summary.error_count, 1);
    assert!(!dir.path().join("loose.stories.ts").exists());
    assert!(
        sink.events()
            .iter()
            .any(|event| matches!(event, GenerationEvent::MissingTag { .. }))
    );
}

#[test]
fn one_bad_file_does_not_stop_the_batch() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "a.ce.ts", WIDGET);
    write(dir.path(), "b.ce.ts", [0xffu8, 0xfe, 0x00, 0xc3]);
    write(dir.path(), "c.ce.ts", WIDGET.replace("my-widget", "my-other"));

    let mut sink = CollectingSink::new();
    let generator = Generator::new(GeneratorConfig::default());
    let summary = generator.run_with_sink(&pattern(&dir), &mut sink).unwrap();

    assert_eq!(summary.success_count, 2);
    assert_eq!(summary.error_count, 1);
    assert!(dir.path().join("a.stories.ts").exists());
    assert!(!dir.path().join("b.stories.ts").exists());
    assert!(dir.path().join("c.stories.ts").exists());
    assert_eq!(sink.count(Severity::Error), 1);
    assert!(matches!(
        sink.events().last(),
        Some(GenerationEvent::Finished { summary: last }) if *last == summary
    ));
}

#[test]
fn empty_match_reports_warning() {
    let dir = TempDir::new().unwrap();

    let mut sink = CollectingSink::new();
    let generator = Generator::new(GeneratorConfig::default());
    let summary = generator.run_with_sink(&pattern(&dir), &mut sink).unwrap();

    assert_eq!(summary, GenerationSummary::default());
    assert!(matches!(
        sink.events().first(),
        Some(GenerationEvent::NoMatches { .. })
    ));
}

#[test]
fn existing_story_is_overwritten() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "widget.ce.ts", WIDGET);
    write(dir.path(), "widget.stories.ts", "stale");

    let generator = Generator::new(GeneratorConfig::default());
    generator.run(&pattern(&dir)).unwrap();

    let story = fs::read_to_string(dir.path().join("widget.stories.ts")).unwrap();
    assert!(story.starts_with("import type { Meta, StoryObj }"));
}

#[test]
fn dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "widget.ce.ts", WIDGET);

    let config = GeneratorConfig {
        dry_run: true,
        ..GeneratorConfig::default()
    };
    let mut sink = CollectingSink::new();
    let summary = Generator::new(config)
        .run_with_sink(&pattern(&dir), &mut sink)
        .unwrap();

    assert_eq!(summary.success_count, 1);
    assert!(!dir.path().join("widget.stories.ts").exists());
    assert!(sink.events().iter().any(|event| matches!(
        event,
        GenerationEvent::Generated { written: false, .. }
    )));
}

#[test]
fn brace_patterns_cover_several_directories() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("atoms")).unwrap();
    fs::create_dir(dir.path().join("molecules")).unwrap();
    write(&dir.path().join("atoms"), "chip.ce.ts", WIDGET);
    write(&dir.path().join("molecules"), "card.ce.ts", WIDGET);

    let pattern = format!("{}/{{atoms,molecules}}/*.ce.ts", dir.path().display());
    let summary = Generator::new(GeneratorConfig::default())
        .run(&pattern)
        .unwrap();

    assert_eq!(summary.success_count, 2);
    assert!(dir.path().join("atoms/chip.stories.ts").exists());
    assert!(dir.path().join("molecules/card.stories.ts").exists());
}

#[test]
fn custom_output_suffix_is_used() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "widget.ce.ts", WIDGET);

    let config = GeneratorConfig {
        output_suffix: ".story.ts".into(),
        ..GeneratorConfig::default()
    };
    Generator::new(config).run(&pattern(&dir)).unwrap();

    assert!(dir.path().join("widget.story.ts").exists());
    assert!(!dir.path().join("widget.stories.ts").exists());
}

#[test]
fn story_never_replaces_its_own_source() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "button.ts", WIDGET);

    let config = GeneratorConfig {
        output_suffix: ".ts".into(),
        ..GeneratorConfig::default()
    };
    let mut sink = CollectingSink::new();
    let summary = Generator::new(config)
        .run_with_sink(&format!("{}/*.ts", dir.path().display()), &mut sink)
        .unwrap();

    assert_eq!(summary.success_count, 0);
    assert_eq!(summary.error_count, 1);
    assert_eq!(
        fs::read_to_string(dir.path().join("button.ts")).unwrap(),
        WIDGET
    );
    assert_eq!(sink.count(Severity::Error), 1);
}

#[test]
fn invalid_config_is_rejected_before_any_file_is_touched() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "widget.ce.ts", WIDGET);

    let config = GeneratorConfig {
        output_suffix: String::new(),
        ..GeneratorConfig::default()
    };
    let err = Generator::new(config).run(&pattern(&dir)).unwrap_err();

    assert!(matches!(err, storygen::StorygenError::Config { .. }));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}
