//! Core shape types.

use indexmap::IndexMap;
use serde::ser::{Error as _, SerializeMap, SerializeTuple};
use serde::{Serialize, Serializer};

use crate::shape::{RangeSelector, Resolvable, RANGE_KEY};

/// A value stored under a key of a [`Shape`].
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeValue {
    /// Terminal field; expansion stops here.
    True,
    /// A sub-shape expanded beneath the current key.
    Shape(Shape),
    /// A `[selector, shape]` pair; the selector takes the place of its key.
    Range(RangeSelector, Shape),
    /// A value computed on demand during expansion.
    Resolvable(Resolvable),
}

impl ShapeValue {
    /// Short description of the variant, used in error messages.
    ///
    /// # Examples
    ///
    /// ```
    /// use shapepaths::ShapeValue;
    ///
    /// assert_eq!(ShapeValue::True.kind(), "true");
    /// ```
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::True => "true",
            Self::Shape(_) => "a shape",
            Self::Range(..) => "a range",
            Self::Resolvable(_) => "a resolvable",
        }
    }

    /// Returns `true` for the terminal marker.
    #[must_use]
    pub const fn is_true(&self) -> bool {
        matches!(self, Self::True)
    }

    /// Returns `true` if the value has to go through a resolver.
    #[must_use]
    pub const fn is_resolvable(&self) -> bool {
        matches!(self, Self::Resolvable(_))
    }
}

impl From<Shape> for ShapeValue {
    fn from(shape: Shape) -> Self {
        Self::Shape(shape)
    }
}

impl From<Resolvable> for ShapeValue {
    fn from(resolvable: Resolvable) -> Self {
        Self::Resolvable(resolvable)
    }
}

/// An ordered mapping from keys to [`ShapeValue`]s.
///
/// Keys keep the order in which they were first inserted. Inserting a key
/// that is already present replaces its value without moving it.
///
/// # Examples
///
/// ```
/// use shapepaths::{Shape, ShapeValue};
///
/// let mut shape = Shape::new().leaf("name").leaf("age");
/// shape.insert("name", Shape::new().leaf("first").into());
///
/// let keys: Vec<&str> = shape.keys().collect();
/// assert_eq!(keys, ["name", "age"]);
/// assert!(matches!(shape.get("name"), Some(ShapeValue::Shape(_))));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Shape {
    entries: IndexMap<String, ShapeValue>,
}

impl Shape {
    /// Creates an empty shape.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty shape with room for `capacity` keys.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Inserts a value, returning the previous value for the key if any.
    pub fn insert(&mut self, key: impl Into<String>, value: ShapeValue) -> Option<ShapeValue> {
        self.entries.insert(key.into(), value)
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ShapeValue> {
        self.entries.get(key)
    }

    /// Returns `true` if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Removes `key`, preserving the order of the remaining keys.
    pub fn remove(&mut self, key: &str) -> Option<ShapeValue> {
        self.entries.shift_remove(key)
    }

    /// Number of keys at this level.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the shape has no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ShapeValue)> {
        self.into_iter()
    }

    /// Iterates over keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Adds a terminal field.
    #[must_use]
    pub fn leaf(mut self, key: impl Into<String>) -> Self {
        self.insert(key, ShapeValue::True);
        self
    }

    /// Adds a nested sub-shape.
    #[must_use]
    pub fn nested(mut self, key: impl Into<String>, shape: Shape) -> Self {
        self.insert(key, ShapeValue::Shape(shape));
        self
    }

    /// Adds a range entry under [`RANGE_KEY`].
    #[must_use]
    pub fn range(mut self, selector: impl Into<RangeSelector>, shape: Shape) -> Self {
        self.insert(RANGE_KEY, ShapeValue::Range(selector.into(), shape));
        self
    }

    /// Adds a value that is computed when expansion reaches `key`.
    #[must_use]
    pub fn deferred<F>(mut self, key: impl Into<String>, f: F) -> Self
    where
        F: Fn() -> ShapeValue + Send + Sync + 'static,
    {
        self.insert(key, ShapeValue::Resolvable(Resolvable::new(f)));
        self
    }
}

impl<K: Into<String>> FromIterator<(K, ShapeValue)> for Shape {
    fn from_iter<I: IntoIterator<Item = (K, ShapeValue)>>(iter: I) -> Self {
        let mut shape = Self::new();
        for (key, value) in iter {
            shape.insert(key, value);
        }
        shape
    }
}

impl<'a> IntoIterator for &'a Shape {
    type Item = (&'a str, &'a ShapeValue);
    type IntoIter = std::iter::Map<
        indexmap::map::Iter<'a, String, ShapeValue>,
        fn((&'a String, &'a ShapeValue)) -> (&'a str, &'a ShapeValue),
    >;

    fn into_iter(self) -> Self::IntoIter {
        self.entries
            .iter()
            .map(entry_ref as fn((&'a String, &'a ShapeValue)) -> (&'a str, &'a ShapeValue))
    }
}

fn entry_ref<'a>((key, value): (&'a String, &'a ShapeValue)) -> (&'a str, &'a ShapeValue) {
    (key.as_str(), value)
}

// Two shapes are equal only if they list the same entries in the same order.
impl PartialEq for Shape {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len() && self.entries.iter().eq(other.entries.iter())
    }
}

impl Serialize for Shape {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl Serialize for ShapeValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::True => serializer.serialize_bool(true),
            Self::Shape(shape) => shape.serialize(serializer),
            Self::Range(selector, shape) => {
                let mut pair = serializer.serialize_tuple(2)?;
                pair.serialize_element(selector)?;
                pair.serialize_element(shape)?;
                pair.end()
            }
            Self::Resolvable(_) => Err(S::Error::custom(
                "resolvable values cannot be serialized",
            )),
        }
    }
}
