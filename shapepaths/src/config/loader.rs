//! Configuration file loading.

use std::fs;
use std::path::Path;

use log::debug;

use crate::config::schema::ExpandConfig;
use crate::error::Result;

/// Loads expansion settings from YAML files.
///
/// # Examples
///
/// ```no_run
/// use shapepaths::config::ConfigLoader;
/// use std::path::Path;
///
/// let config = ConfigLoader::load_file(Path::new("shapepaths.yaml")).unwrap();
/// println!("range key: {}", config.range_key);
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and parse a YAML configuration file.
    ///
    /// The result is not validated; [`ConfigBuilder`](crate::config::ConfigBuilder)
    /// validates after all sources are merged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if the file cannot be read, or
    /// [`Error::Configuration`](crate::Error::Configuration) if the YAML is
    /// invalid.
    pub fn load_file(path: &Path) -> Result<ExpandConfig> {
        debug!("loading configuration from {}", path.display());
        let contents = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&contents)?)
    }
}
