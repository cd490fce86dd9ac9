//! Expansion of shapes into path sets.
//!
//! Expansion walks a [`Shape`] depth-first and emits one [`PathSet`] per
//! terminal field. Nested shapes prepend their key to every path beneath
//! them; range entries prepend their selector instead of the range key.
//!
//! # Examples
//!
//! ```
//! use shapepaths::{expand, Shape};
//!
//! let shape = Shape::new()
//!     .nested("name", Shape::new().leaf("first").leaf("last"))
//!     .leaf("age");
//!
//! let paths = expand(&shape).unwrap();
//! let rendered: Vec<String> = paths.iter().map(ToString::to_string).collect();
//! assert_eq!(rendered, [r#"["name","first"]"#, r#"["name","last"]"#, r#"["age"]"#]);
//! ```
//!
//! Deferred values go through a [`Resolver`]; by default they are simply
//! called:
//!
//! ```
//! use shapepaths::{expand, Shape};
//!
//! let shape = Shape::new().deferred("name", || Shape::new().leaf("first").into());
//! assert_eq!(expand(&shape).unwrap()[0].to_string(), r#"["name","first"]"#);
//! ```

mod expander;
mod path_set;
mod resolver;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use expander::ShapeExpander;
pub use path_set::{to_json, PathElement, PathSet};
pub use resolver::{CallResolver, Resolver};

use crate::error::Result;
use crate::shape::Shape;

/// Expands `shape` with the default configuration and resolver.
///
/// # Errors
///
/// See [`ShapeExpander::expand_with`].
pub fn expand(shape: &Shape) -> Result<Vec<PathSet>> {
    ShapeExpander::new().expand(shape)
}

/// Expands `shape` with the default configuration and a caller resolver.
///
/// # Errors
///
/// See [`ShapeExpander::expand_with`].
pub fn expand_with<R>(shape: &Shape, resolver: &mut R) -> Result<Vec<PathSet>>
where
    R: Resolver + ?Sized,
{
    ShapeExpander::new().expand_with(shape, resolver)
}
