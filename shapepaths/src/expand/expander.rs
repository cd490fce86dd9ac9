//! The recursive shape-to-path-set expansion.

use log::{debug, trace};

use crate::config::ExpandConfig;
use crate::error::{Error, Result};
use crate::expand::path_set::{PathElement, PathSet};
use crate::expand::resolver::{CallResolver, Resolver};
use crate::shape::{Shape, ShapeParser, ShapeValue};

/// Expands shapes into path sets.
///
/// Keys are visited depth-first in shape order, so the produced path sets
/// follow the declaration order of the shape at every level. Resolvables are
/// handed to the resolver lazily, exactly once each, when their key is
/// reached.
///
/// A [`ShapeValue::Range`] entry is expanded with its selector in place of
/// the key it is stored under, whatever that key is. The configured range
/// key only tells [`parser`](Self::parser) where range entries sit in a
/// document.
///
/// # Examples
///
/// ```
/// use shapepaths::{RangeSelector, Shape, ShapeExpander};
///
/// let shape = Shape::new().nested(
///     "people",
///     Shape::new()
///         .leaf("length")
///         .range(RangeSelector::range(0, 100), Shape::new().leaf("name")),
/// );
///
/// let paths = ShapeExpander::new().expand(&shape).unwrap();
/// let rendered: Vec<String> = paths.iter().map(ToString::to_string).collect();
/// assert_eq!(
///     rendered,
///     [r#"["people","length"]"#, r#"["people",{"from":0,"to":100},"name"]"#]
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct ShapeExpander {
    config: ExpandConfig,
}

impl ShapeExpander {
    /// Creates an expander with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an expander from a configuration, validating it first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the configuration is invalid.
    pub fn from_config(config: ExpandConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &ExpandConfig {
        &self.config
    }

    /// Returns a parser that recognizes this expander's range key.
    #[must_use]
    pub fn parser(&self) -> ShapeParser {
        ShapeParser::new(self.config.range_key.as_str())
    }

    /// Expands `shape`, calling resolvables directly.
    ///
    /// # Errors
    ///
    /// See [`expand_with`](Self::expand_with).
    pub fn expand(&self, shape: &Shape) -> Result<Vec<PathSet>> {
        self.expand_with(shape, &mut CallResolver)
    }

    /// Expands `shape`, materializing resolvables through `resolver`.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidResolverResult`] if the resolver returns anything
    ///   other than `True` or a nested shape
    /// - [`Error::DepthExceeded`] if a depth limit is configured and the
    ///   shape nests deeper than it
    ///
    /// No partial result is returned on error.
    pub fn expand_with<R>(&self, shape: &Shape, resolver: &mut R) -> Result<Vec<PathSet>>
    where
        R: Resolver + ?Sized,
    {
        let paths = self.expand_level(shape, resolver, 1)?;
        debug!("expanded shape into {} path set(s)", paths.len());
        Ok(paths)
    }

    fn expand_level<R>(&self, shape: &Shape, resolver: &mut R, depth: usize) -> Result<Vec<PathSet>>
    where
        R: Resolver + ?Sized,
    {
        if let Some(limit) = self.config.max_depth {
            if depth > limit {
                return Err(Error::DepthExceeded { limit });
            }
        }

        let mut paths = Vec::new();

        for (key, value) in shape {
            let resolved;
            let value = match value {
                ShapeValue::Resolvable(resolvable) => {
                    debug!("resolving deferred value for key '{key}'");
                    resolved = resolver.resolve(resolvable, shape, key);
                    if let ShapeValue::Range(..) = resolved {
                        return Err(invalid_result(key, &resolved));
                    }
                    &resolved
                }
                other => other,
            };

            match value {
                ShapeValue::True => {
                    trace!("leaf '{key}'");
                    paths.push(PathSet::leaf(key));
                }
                ShapeValue::Range(selector, sub_shape) => {
                    for path in self.expand_level(sub_shape, resolver, depth + 1)? {
                        paths.push(PathSet::prefixed(
                            PathElement::Selector(selector.clone()),
                            path,
                        ));
                    }
                }
                ShapeValue::Shape(sub_shape) => {
                    for path in self.expand_level(sub_shape, resolver, depth + 1)? {
                        paths.push(PathSet::prefixed(PathElement::from(key), path));
                    }
                }
                // Only a resolver handing back another resolvable gets here.
                ShapeValue::Resolvable(_) => return Err(invalid_result(key, value)),
            }
        }

        Ok(paths)
    }
}

fn invalid_result(key: &str, value: &ShapeValue) -> Error {
    Error::InvalidResolverResult {
        key: key.to_string(),
        found: value.kind(),
    }
}
