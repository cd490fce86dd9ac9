//! Resolvers materialize deferred shape values during expansion.
//!
//! A resolver is consulted once for every key whose value is a
//! [`Resolvable`], at the moment expansion reaches that key. It receives the
//! resolvable, the shape holding the key (so it can look at siblings) and the
//! key itself, and must hand back `True` or a nested `Shape`.

use crate::shape::{Resolvable, Shape, ShapeValue};

/// Materializes resolvables into shape values.
///
/// Any `FnMut(&Resolvable, &Shape, &str) -> ShapeValue` closure is a
/// resolver.
///
/// # Examples
///
/// ```
/// use shapepaths::{expand_with, PathSet, Resolvable, Shape, ShapeValue};
///
/// let shape = Shape::new()
///     .leaf("id")
///     .deferred("details", || ShapeValue::True);
///
/// // Expand deferred values only when their sibling "id" is requested.
/// let mut resolver = |resolvable: &Resolvable, parent: &Shape, _key: &str| {
///     if parent.contains_key("id") {
///         Shape::new().leaf("summary").into()
///     } else {
///         resolvable.call()
///     }
/// };
///
/// let paths = expand_with(&shape, &mut resolver).unwrap();
/// assert_eq!(paths[1].to_string(), r#"["details","summary"]"#);
/// ```
pub trait Resolver {
    /// Resolves the deferred value found under `key` in `parent`.
    fn resolve(&mut self, resolvable: &Resolvable, parent: &Shape, key: &str) -> ShapeValue;
}

impl<F> Resolver for F
where
    F: FnMut(&Resolvable, &Shape, &str) -> ShapeValue,
{
    fn resolve(&mut self, resolvable: &Resolvable, parent: &Shape, key: &str) -> ShapeValue {
        self(resolvable, parent, key)
    }
}

/// The default resolver: calls the resolvable and uses whatever it returns.
#[derive(Debug, Clone, Copy, Default)]
pub struct CallResolver;

impl Resolver for CallResolver {
    fn resolve(&mut self, resolvable: &Resolvable, _parent: &Shape, _key: &str) -> ShapeValue {
        resolvable.call()
    }
}
