//! Layered construction of [`ExpandConfig`].

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::schema::ExpandConfig;
use crate::error::Result;

/// Builds an [`ExpandConfig`] from defaults, a file, the environment and
/// programmatic overrides, in increasing order of precedence.
///
/// # Examples
///
/// ```
/// use shapepaths::config::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .skip_env()
///     .with_range_key("@")
///     .with_max_depth(16)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.range_key, "@");
/// assert_eq!(config.max_depth, Some(16));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    file: Option<PathBuf>,
    skip_env: bool,
    range_key: Option<String>,
    max_depth: Option<usize>,
}

impl ConfigBuilder {
    /// Creates a builder that starts from the defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads settings from a YAML file.
    #[must_use]
    pub fn with_file(mut self, path: &Path) -> Self {
        self.file = Some(path.to_path_buf());
        self
    }

    /// Ignores `SHAPEPATHS_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Overrides the range key.
    #[must_use]
    pub fn with_range_key(mut self, range_key: impl Into<String>) -> Self {
        self.range_key = Some(range_key.into());
        self
    }

    /// Overrides the depth limit.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Merges all sources and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be loaded, an environment variable
    /// is malformed, or the merged configuration fails validation.
    pub fn build(self) -> Result<ExpandConfig> {
        let mut config = match &self.file {
            Some(path) => ConfigLoader::load_file(path)?,
            None => ExpandConfig::default(),
        };

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(range_key) = self.range_key {
            config.range_key = range_key;
        }
        if let Some(max_depth) = self.max_depth {
            config.max_depth = Some(max_depth);
        }

        config.validate()?;
        Ok(config)
    }
}
