//! Deferred shape values.

use std::fmt;
use std::sync::Arc;

use crate::shape::ShapeValue;

/// A no-argument computation producing a [`ShapeValue`] on demand.
///
/// Resolvables are shared: cloning one clones the handle, not the closure,
/// and two resolvables compare equal only when they share the same closure.
///
/// # Examples
///
/// ```
/// use shapepaths::{Resolvable, Shape, ShapeValue};
///
/// let name = Resolvable::new(|| Shape::new().leaf("first").leaf("last").into());
/// assert!(matches!(name.call(), ShapeValue::Shape(_)));
/// assert_eq!(name, name.clone());
/// ```
#[derive(Clone)]
pub struct Resolvable(Arc<dyn Fn() -> ShapeValue + Send + Sync>);

impl Resolvable {
    /// Wraps a closure as a resolvable.
    #[must_use]
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() -> ShapeValue + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Runs the deferred computation.
    #[must_use]
    pub fn call(&self) -> ShapeValue {
        (self.0)()
    }
}

impl fmt::Debug for Resolvable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Resolvable(..)")
    }
}

impl PartialEq for Resolvable {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}
