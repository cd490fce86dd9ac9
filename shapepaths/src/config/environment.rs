//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `SHAPEPATHS_*` environment variables that
//! override configuration file values.

use std::env;

use crate::config::schema::ExpandConfig;
use crate::error::{Error, Result};

/// Environment variable overriding the range key.
pub const RANGE_KEY_VAR: &str = "SHAPEPATHS_RANGE_KEY";

/// Environment variable overriding the depth limit.
pub const MAX_DEPTH_VAR: &str = "SHAPEPATHS_MAX_DEPTH";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use shapepaths::config::{EnvironmentConfig, ExpandConfig};
///
/// let mut config = ExpandConfig::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if `SHAPEPATHS_MAX_DEPTH` is not a non-negative
    /// integer.
    pub fn apply_overrides(config: &mut ExpandConfig) -> Result<()> {
        if let Ok(range_key) = env::var(RANGE_KEY_VAR) {
            config.range_key = range_key;
        }

        if let Ok(depth) = env::var(MAX_DEPTH_VAR) {
            config.max_depth = Some(depth.trim().parse().map_err(|_| Error::Validation {
                field: MAX_DEPTH_VAR.into(),
                message: format!("Must be a positive integer, got '{depth}'"),
            })?);
        }

        Ok(())
    }
}
