use std::borrow::Cow;
use std::future::Future;

use tracing::error;

use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::generator::Generator;

/// A step a host build pipeline runs while resolving its configuration.
///
/// Implementations may perform side effects but must hand the configuration
/// back exactly as received.
pub trait BuildHook {
    fn name(&self) -> Cow<'static, str>;

    fn config<C: Send>(&self, config: C) -> impl Future<Output = C> + Send;
}

/// Generates stories whenever the host resolves its configuration.
#[derive(Debug, Clone)]
pub struct StoriesHook {
    generator: Generator,
    pattern: String,
}

impl StoriesHook {
    /// Hook using `config.pattern` as the file pattern.
    pub fn new(config: GeneratorConfig) -> Self {
        let pattern = config.pattern.clone();
        Self {
            generator: Generator::new(config),
            pattern,
        }
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Like [`BuildHook::config`], but a pattern error is returned instead of logged.
    pub async fn try_config<C: Send>(&self, config: C) -> Result<C> {
        self.generator.run(&self.pattern)?;
        Ok(config)
    }
}

impl Default for StoriesHook {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

impl BuildHook for StoriesHook {
    fn name(&self) -> Cow<'static, str> {
        "storygen-stories".into()
    }

    fn config<C: Send>(&self, config: C) -> impl Future<Output = C> + Send {
        async move {
            if let Err(err) = self.generator.run(&self.pattern) {
                error!("story generation aborted: {err}");
            }
            config
        }
    }
}
