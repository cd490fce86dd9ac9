//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::shape::RANGE_KEY;

/// Settings controlling how shapes are expanded.
///
/// Every field has a default, so an empty YAML document is a valid
/// configuration.
///
/// # Examples
///
/// ```
/// use shapepaths::config::ExpandConfig;
///
/// let config: ExpandConfig = serde_yaml::from_str("max_depth: 8\n").unwrap();
/// assert_eq!(config.range_key, "$");
/// assert_eq!(config.max_depth, Some(8));
/// config.validate().unwrap();
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ExpandConfig {
    /// Key under which shape documents hold `[selector, shape]` range
    /// entries. Only parsing looks at it.
    pub range_key: String,

    /// Maximum number of nested shape levels; unbounded when absent.
    pub max_depth: Option<usize>,
}

impl Default for ExpandConfig {
    fn default() -> Self {
        Self {
            range_key: RANGE_KEY.to_string(),
            max_depth: None,
        }
    }
}

impl ExpandConfig {
    /// Checks that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the range key is empty or the depth
    /// limit is zero.
    pub fn validate(&self) -> Result<()> {
        if self.range_key.is_empty() {
            return Err(Error::Validation {
                field: "range_key".into(),
                message: "must be non-empty".into(),
            });
        }

        if self.max_depth == Some(0) {
            return Err(Error::Validation {
                field: "max_depth".into(),
                message: "must be at least 1".into(),
            });
        }

        Ok(())
    }
}
