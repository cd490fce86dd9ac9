#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # shapepaths
//!
//! A library for expanding nested shape descriptions into flat path sets.
//!
//! A caller describes the data it wants as a nested [`Shape`]; expansion
//! enumerates every path from the root to a terminal field, ready to be
//! handed to a data-fetching or graph-traversal layer.
//!
//! ## Core Types
//!
//! - [`Shape`] and [`ShapeValue`]: The nested description being expanded
//! - [`RangeSelector`]: Opaque collection selectors placed under the `"$"` key
//! - [`Resolvable`] and [`Resolver`]: Deferred values and how they are materialized
//! - [`PathSet`] and [`PathElement`]: The expansion output
//! - [`ShapeExpander`] and [`ExpandConfig`]: Configurable expansion
//! - [`Error`] and [`Result`]: Error handling types
//!
//! ## Examples
//!
//! ```
//! use shapepaths::{expand, Shape};
//!
//! let shape = Shape::from_json_str(
//!     r#"{"people": {"length": true, "$": [{"from": 0, "to": 100}, {"name": true}]}}"#,
//! ).unwrap();
//!
//! let paths = expand(&shape).unwrap();
//! assert_eq!(paths[0].to_string(), r#"["people","length"]"#);
//! assert_eq!(paths[1].to_string(), r#"["people",{"from":0,"to":100},"name"]"#);
//! ```

pub mod config;
pub mod error;
pub mod expand;
pub mod shape;

// Re-export key types at crate root for convenience
pub use config::{ConfigBuilder, ExpandConfig};
pub use error::{Error, Result};
pub use expand::{
    expand, expand_with, to_json, CallResolver, PathElement, PathSet, Resolver, ShapeExpander,
};
pub use shape::{RangeSelector, Resolvable, Shape, ShapeParser, ShapeValue, RANGE_KEY};
