//! Shape descriptions: the nested input of an expansion.
//!
//! A [`Shape`] is an ordered mapping from field names to [`ShapeValue`]s.
//! Each value either terminates a path (`True`), nests a sub-shape, selects a
//! range of collection members (stored under the range key `"$"`), or defers
//! the decision to a [`Resolvable`] computed on demand.
//!
//! # Examples
//!
//! Building a shape in code:
//!
//! ```
//! use shapepaths::{RangeSelector, Shape};
//!
//! let shape = Shape::new().nested(
//!     "people",
//!     Shape::new()
//!         .leaf("length")
//!         .range(RangeSelector::range(0, 100), Shape::new().leaf("name")),
//! );
//! assert_eq!(shape.len(), 1);
//! ```
//!
//! Parsing the same shape from JSON:
//!
//! ```
//! use shapepaths::Shape;
//!
//! let shape = Shape::from_json_str(
//!     r#"{"people": {"length": true, "$": [{"from": 0, "to": 100}, {"name": true}]}}"#,
//! ).unwrap();
//! assert!(shape.contains_key("people"));
//! ```

mod parse;
mod resolvable;
mod selector;
mod types;

pub use parse::ShapeParser;
pub use resolvable::Resolvable;
pub use selector::RangeSelector;
pub use types::{Shape, ShapeValue};

/// The key under which a `[selector, shape]` range entry is stored.
pub const RANGE_KEY: &str = "$";
