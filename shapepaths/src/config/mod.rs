//! Configuration for shape expansion.
//!
//! Settings are merged from several sources, highest precedence first:
//!
//! 1. Programmatic overrides (via [`ConfigBuilder`])
//! 2. Environment variables (`SHAPEPATHS_*`)
//! 3. A YAML configuration file
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```
//! use shapepaths::config::ConfigBuilder;
//! use shapepaths::ShapeExpander;
//!
//! let config = ConfigBuilder::new().skip_env().with_max_depth(32).build().unwrap();
//! let expander = ShapeExpander::from_config(config).unwrap();
//! assert_eq!(expander.config().max_depth, Some(32));
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod schema;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::ConfigLoader;
pub use schema::ExpandConfig;
