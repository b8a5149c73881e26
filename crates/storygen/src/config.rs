//! Generator configuration with multi-source loading.
//!
//! Priority: caller overrides > `STORYGEN_*` environment > config file > defaults.

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Json, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::error::{Result, StorygenError};
use crate::extract::{
    DEFAULT_REACTIVE_DECORATORS, DEFAULT_REGISTRATION_FUNCTION, ExtractOptions, ReactiveMarkers,
};
use crate::generators::story::RenderOptions;

/// Config files looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILES: [&str; 2] = ["storygen.toml", "storygen.config.json"];

/// Prefix of environment overrides (`STORYGEN_OUTPUT_SUFFIX`, ...).
pub const ENV_PREFIX: &str = "STORYGEN_";

/// Keys read from the environment. Other `STORYGEN_*` variables are ignored.
const ENV_KEYS: [&str; 9] = [
    "pattern",
    "source_marker",
    "output_suffix",
    "registration_function",
    "reactive_decorators",
    "title_prefix",
    "docs_tag",
    "framework",
    "dry_run",
];

/// Settings for a generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Glob selecting component sources.
    pub pattern: String,
    /// Marker stripped from the file stem to get the component name.
    pub source_marker: String,
    /// Suffix of the generated story file.
    pub output_suffix: String,
    /// Callee of the registration call.
    pub registration_function: String,
    /// Decorators marking reactive fields.
    pub reactive_decorators: Vec<String>,
    pub title_prefix: String,
    pub docs_tag: String,
    /// Module the `Meta` and `StoryObj` types are imported from.
    pub framework: String,
    /// Render without writing files.
    pub dry_run: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        let render = RenderOptions::default();
        Self {
            pattern: "src/**/*.ce.ts".to_string(),
            source_marker: render.source_marker,
            output_suffix: ".stories.ts".to_string(),
            registration_function: DEFAULT_REGISTRATION_FUNCTION.to_string(),
            reactive_decorators: DEFAULT_REACTIVE_DECORATORS
                .iter()
                .map(ToString::to_string)
                .collect(),
            title_prefix: render.title_prefix,
            docs_tag: render.docs_tag,
            framework: render.framework,
            dry_run: false,
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from defaults, an optional TOML/JSON file and the environment.
    ///
    /// Without an explicit path, the first of [`DEFAULT_CONFIG_FILES`] found in
    /// the working directory is used. An explicit path must exist.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        Self::figment(config_path)?.extract().map_err(|error| {
            StorygenError::config("configuration", error.to_string())
        })
    }

    /// The layered figment, so callers can merge their own overrides on top.
    pub fn figment(config_path: Option<&Path>) -> Result<Figment> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        match config_path {
            Some(path) if !path.exists() => {
                return Err(StorygenError::config(
                    "config",
                    format!("config file not found: {}", path.display()),
                ));
            }
            Some(path) => figment = merge_file(figment, path),
            None => {
                if let Some(path) = DEFAULT_CONFIG_FILES
                    .iter()
                    .map(Path::new)
                    .find(|path| path.exists())
                {
                    figment = merge_file(figment, path);
                }
            }
        }

        Ok(figment.merge(Env::prefixed(ENV_PREFIX).only(&ENV_KEYS)))
    }

    /// Check invariants the generator relies on.
    pub fn validate(&self) -> Result<()> {
        if self.output_suffix.is_empty() {
            return Err(StorygenError::config(
                "output_suffix",
                "must not be empty, generated files would overwrite sources",
            ));
        }
        if self.output_suffix.contains(['/', '\\']) {
            return Err(StorygenError::config(
                "output_suffix",
                "must not contain path separators",
            ));
        }
        if self.reactive_decorators.is_empty() {
            return Err(StorygenError::config(
                "reactive_decorators",
                "at least one decorator name is required",
            ));
        }
        if let Some(name) = self
            .reactive_decorators
            .iter()
            .find(|name| !is_identifier(name))
        {
            return Err(StorygenError::config(
                "reactive_decorators",
                format!("'{name}' is not a valid identifier"),
            ));
        }
        if !is_identifier(&self.registration_function) {
            return Err(StorygenError::config(
                "registration_function",
                format!("'{}' is not a valid identifier", self.registration_function),
            ));
        }
        Ok(())
    }

    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            registration_function: self.registration_function.clone(),
            markers: ReactiveMarkers::new(self.reactive_decorators.iter().cloned()),
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            source_marker: self.source_marker.clone(),
            title_prefix: self.title_prefix.clone(),
            docs_tag: self.docs_tag.clone(),
            framework: self.framework.clone(),
        }
    }
}

fn merge_file(figment: Figment, path: &Path) -> Figment {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => figment.merge(Json::file(path)),
        _ => figment.merge(Toml::file(path)),
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' || first == '$' => {
            chars.all(|ch| ch.is_alphanumeric() || ch == '_' || ch == '$')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = GeneratorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.output_suffix, ".stories.ts");
        assert_eq!(config.source_marker, ".ce");
        assert_eq!(config.reactive_decorators, vec!["property", "state"]);
    }

    #[test]
    fn rejects_empty_output_suffix() {
        let config = GeneratorConfig {
            output_suffix: String::new(),
            ..GeneratorConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("output_suffix"));
    }

    #[test]
    fn rejects_bad_registration_name() {
        let config = GeneratorConfig {
            registration_function: "custom-element".into(),
            ..GeneratorConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storygen.toml");
        std::fs::write(
            &path,
            "output_suffix = \".story.ts\"\nreactive_decorators = [\"prop\"]\n",
        )
        .unwrap();

        let config = GeneratorConfig::load(Some(&path)).expect("should load");
        assert_eq!(config.output_suffix, ".story.ts");
        assert_eq!(config.reactive_decorators, vec!["prop"]);
        assert_eq!(config.source_marker, ".ce");
    }

    #[test]
    fn json_files_are_supported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.json");
        std::fs::write(&path, r#"{ "title_prefix": "Atoms", "dry_run": true }"#).unwrap();

        let config = GeneratorConfig::load(Some(&path)).expect("should load");
        assert_eq!(config.title_prefix, "Atoms");
        assert!(config.dry_run);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storygen.toml");
        std::fs::write(&path, "outptu_suffix = \".x.ts\"\n").unwrap();
        assert!(GeneratorConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = GeneratorConfig::load(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn unrelated_env_variables_are_ignored() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("STORYGEN_HOME", "/opt/storygen");
            jail.set_env("STORYGEN_OUTPUT_SUFFIX", ".story.ts");

            let config = GeneratorConfig::load(None).map_err(|err| err.to_string())?;
            assert_eq!(config.output_suffix, ".story.ts");
            assert_eq!(config.pattern, "src/**/*.ce.ts");
            Ok(())
        });
    }

    #[test]
    fn options_follow_config() {
        let config = GeneratorConfig {
            reactive_decorators: vec!["prop".into()],
            title_prefix: "Design System".into(),
            ..GeneratorConfig::default()
        };
        assert!(config.extract_options().markers.contains("prop"));
        assert!(!config.extract_options().markers.contains("state"));
        assert_eq!(config.render_options().title_prefix, "Design System");
    }
}
