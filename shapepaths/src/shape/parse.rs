//! Building shapes from JSON and YAML documents.
//!
//! Documents map onto shapes as follows:
//!
//! - `true` becomes a terminal field
//! - an object becomes a nested shape
//! - under the range key, a two-element array `[selector, object]` becomes a
//!   range entry; the selector is kept as an opaque [`RangeSelector`]
//!
//! A range-key entry that is not such a pair is rejected with
//! [`Error::MalformedRange`]; every other value is rejected with
//! [`Error::InvalidShape`]. Both name the dotted location of the offending
//! value. Key order is preserved.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::shape::{RangeSelector, Shape, ShapeValue, RANGE_KEY};

/// Converts shape documents into [`Shape`]s.
///
/// # Examples
///
/// ```
/// use shapepaths::ShapeParser;
///
/// let parser = ShapeParser::new("@");
/// let shape = parser.parse_json(r#"{"items": {"@": [[1, 2], {"title": true}]}}"#).unwrap();
/// assert!(shape.contains_key("items"));
/// ```
#[derive(Debug, Clone)]
pub struct ShapeParser {
    range_key: String,
}

impl Default for ShapeParser {
    fn default() -> Self {
        Self::new(RANGE_KEY)
    }
}

impl ShapeParser {
    /// Creates a parser that recognizes range entries under `range_key`.
    #[must_use]
    pub fn new(range_key: impl Into<String>) -> Self {
        Self {
            range_key: range_key.into(),
        }
    }

    /// Returns the range key this parser recognizes.
    #[must_use]
    pub fn range_key(&self) -> &str {
        &self.range_key
    }

    /// Parses a shape from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if the text is not JSON, or
    /// [`Error::InvalidShape`] / [`Error::MalformedRange`] if the document is
    /// not a valid shape.
    pub fn parse_json(&self, text: &str) -> Result<Shape> {
        let value: Value = serde_json::from_str(text)?;
        self.parse_value(value)
    }

    /// Parses a shape from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidShape`] if the text is not YAML with string
    /// keys, or if the document is not a valid shape.
    pub fn parse_yaml(&self, text: &str) -> Result<Shape> {
        let value: Value = serde_yaml::from_str(text).map_err(|e| Error::InvalidShape {
            path: String::new(),
            reason: e.to_string(),
        })?;
        self.parse_value(value)
    }

    /// Loads a shape from a file, choosing the format by extension.
    ///
    /// `.yaml` and `.yml` files are read as YAML, everything else as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, or a parse error as
    /// for [`parse_json`](Self::parse_json) and [`parse_yaml`](Self::parse_yaml).
    pub fn load_file(&self, path: &Path) -> Result<Shape> {
        let contents = fs::read_to_string(path)?;
        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

        if is_yaml {
            self.parse_yaml(&contents)
        } else {
            self.parse_json(&contents)
        }
    }

    /// Converts a JSON value into a shape.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidShape`] if the value is not an object or any
    /// nested value is not a valid shape value.
    pub fn parse_value(&self, value: Value) -> Result<Shape> {
        match value {
            Value::Object(map) => self.convert_map(map, ""),
            other => Err(invalid("", format!("expected an object, found {}", describe(&other)))),
        }
    }

    fn convert_map(&self, map: Map<String, Value>, path: &str) -> Result<Shape> {
        let mut shape = Shape::with_capacity(map.len());
        for (key, value) in map {
            let location = join(path, &key);
            let converted = if key == self.range_key {
                self.convert_range(value, &location)?
            } else {
                self.convert_value(value, &location)?
            };
            shape.insert(key, converted);
        }
        Ok(shape)
    }

    fn convert_value(&self, value: Value, path: &str) -> Result<ShapeValue> {
        match value {
            Value::Bool(true) => Ok(ShapeValue::True),
            Value::Object(map) => Ok(ShapeValue::Shape(self.convert_map(map, path)?)),
            other => Err(invalid(
                path,
                format!("expected `true` or an object, found {}", describe(&other)),
            )),
        }
    }

    fn convert_range(&self, value: Value, path: &str) -> Result<ShapeValue> {
        match value {
            // A terminal range key is kept; it expands to the key itself.
            Value::Bool(true) => Ok(ShapeValue::True),
            Value::Array(items) if items.len() == 2 => {
                let mut items = items.into_iter();
                let (Some(selector), Some(sub_shape)) = (items.next(), items.next()) else {
                    return Err(malformed(path, "expected a [selector, shape] pair".to_string()));
                };
                match sub_shape {
                    Value::Object(map) => {
                        let shape = self.convert_map(map, &join(path, "1"))?;
                        Ok(ShapeValue::Range(RangeSelector::from(selector), shape))
                    }
                    other => Err(malformed(
                        &join(path, "1"),
                        format!("expected an object, found {}", describe(&other)),
                    )),
                }
            }
            other => Err(malformed(
                path,
                format!("expected a [selector, shape] pair, found {}", describe(&other)),
            )),
        }
    }
}

impl Shape {
    /// Parses a shape from JSON text using the default range key.
    ///
    /// # Errors
    ///
    /// See [`ShapeParser::parse_json`].
    pub fn from_json_str(text: &str) -> Result<Self> {
        ShapeParser::default().parse_json(text)
    }

    /// Parses a shape from YAML text using the default range key.
    ///
    /// # Errors
    ///
    /// See [`ShapeParser::parse_yaml`].
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        ShapeParser::default().parse_yaml(text)
    }
}

impl TryFrom<Value> for Shape {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        ShapeParser::default().parse_value(value)
    }
}

fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}

fn invalid(path: &str, reason: String) -> Error {
    Error::InvalidShape {
        path: path.to_string(),
        reason,
    }
}

fn malformed(path: &str, reason: String) -> Error {
    Error::MalformedRange {
        key: path.to_string(),
        reason,
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(true) => "true",
        Value::Bool(false) => "false",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
