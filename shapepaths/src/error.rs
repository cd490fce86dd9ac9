//! Error types for the shapepaths library.
//!
//! This module provides the error hierarchy for shape parsing, expansion and
//! configuration, using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Result type alias for operations that may fail with a shapepaths error.
///
/// # Examples
///
/// ```
/// use shapepaths::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the shapepaths library.
#[derive(Debug, Error)]
pub enum Error {
    /// A resolver returned something other than `true` or a nested shape.
    #[error("`resolver` must return `true` or an object (key '{key}' resolved to {found})")]
    InvalidResolverResult {
        /// The key whose resolvable was being resolved.
        key: String,
        /// The kind of value the resolver produced.
        found: &'static str,
    },

    /// A shape document holds something other than a `[selector, shape]`
    /// pair under the range key.
    #[error("malformed range entry at '{key}': {reason}")]
    MalformedRange {
        /// Dotted location of the malformed entry.
        key: String,
        /// Why the entry could not be expanded.
        reason: String,
    },

    /// A shape document could not be converted into a shape.
    #[error("invalid shape at '{path}': {reason}")]
    InvalidShape {
        /// Dotted location of the offending value.
        path: String,
        /// The reason the value was rejected.
        reason: String,
    },

    /// Expansion descended deeper than the configured limit.
    #[error("shape nesting exceeds maximum depth of {limit}")]
    DepthExceeded {
        /// The configured depth limit.
        limit: usize,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A JSON error occurred.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if error was caused by a misbehaving resolver.
    ///
    /// # Examples
    ///
    /// ```
    /// use shapepaths::Error;
    ///
    /// let err = Error::InvalidResolverResult { key: "name".to_string(), found: "a range" };
    /// assert!(err.is_resolver_error());
    /// ```
    #[must_use]
    pub fn is_resolver_error(&self) -> bool {
        matches!(self, Self::InvalidResolverResult { .. })
    }
}
