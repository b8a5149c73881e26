use std::path::PathBuf;

use clap::{CommandFactory, Parser};

use super::*;

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn generate_defaults() {
    let cli = Cli::try_parse_from(["storygen", "generate"]).unwrap();
    let Command::Generate(args) = cli.command else {
        panic!("expected generate");
    };
    assert_eq!(args.pattern, None);
    assert!(!args.dry_run);
    assert!(!args.fail_on_error);
}

#[test]
fn generate_overrides() {
    let cli = Cli::try_parse_from([
        "storygen",
        "generate",
        "lib/**/*.ce.ts",
        "--config",
        "custom.toml",
        "--output-suffix",
        ".story.ts",
        "--dry-run",
    ])
    .unwrap();
    let Command::Generate(args) = cli.command else {
        panic!("expected generate");
    };
    assert_eq!(args.pattern.as_deref(), Some("lib/**/*.ce.ts"));
    assert_eq!(args.config, Some(PathBuf::from("custom.toml")));
    assert_eq!(args.output_suffix.as_deref(), Some(".story.ts"));
    assert!(args.dry_run);
}

#[test]
fn inspect_requires_a_file() {
    assert!(Cli::try_parse_from(["storygen", "inspect"]).is_err());

    let cli = Cli::try_parse_from(["storygen", "inspect", "a.ce.ts", "-f", "json"]).unwrap();
    let Command::Inspect(args) = cli.command else {
        panic!("expected inspect");
    };
    assert_eq!(args.file, PathBuf::from("a.ce.ts"));
    assert_eq!(args.format, InspectFormat::Json);
}

#[test]
fn verbose_conflicts_with_quiet() {
    assert!(Cli::try_parse_from(["storygen", "-v", "-q", "generate"]).is_err());
}
