//! Path sets: the flat output of an expansion.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::shape::RangeSelector;

/// One element of a path: a field key or a range selector.
///
/// Deserialization is not lossless: a JSON string always comes back as a
/// [`Key`](Self::Key), even if it was written from a string
/// [`RangeSelector::Token`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathElement {
    /// A field name.
    Key(String),
    /// A range selector substituted for the range key.
    Selector(RangeSelector),
}

impl PathElement {
    /// Returns the key if this element is one.
    #[must_use]
    pub fn as_key(&self) -> Option<&str> {
        match self {
            Self::Key(key) => Some(key.as_str()),
            Self::Selector(_) => None,
        }
    }
}

impl From<&str> for PathElement {
    fn from(key: &str) -> Self {
        Self::Key(key.to_string())
    }
}

impl From<String> for PathElement {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

impl From<RangeSelector> for PathElement {
    fn from(selector: RangeSelector) -> Self {
        Self::Selector(selector)
    }
}

/// A fully enumerated path from the shape root to one terminal field.
///
/// Path sets serialize as plain JSON arrays, with selectors rendered
/// verbatim.
///
/// # Examples
///
/// ```
/// use shapepaths::{PathElement, PathSet, RangeSelector};
///
/// let path = PathSet::new(vec![
///     PathElement::from("people"),
///     PathElement::from(RangeSelector::range(0, 100)),
///     PathElement::from("name"),
/// ]);
/// assert_eq!(path.len(), 3);
/// assert_eq!(path.to_string(), r#"["people",{"from":0,"to":100},"name"]"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathSet(Vec<PathElement>);

impl PathSet {
    /// Creates a path set from its elements.
    #[must_use]
    pub fn new(elements: Vec<PathElement>) -> Self {
        Self(elements)
    }

    /// Creates a single-element path set for a terminal key.
    #[must_use]
    pub fn leaf(key: &str) -> Self {
        Self(vec![PathElement::from(key)])
    }

    /// Returns a new path set with `head` followed by the elements of `rest`.
    #[must_use]
    pub fn prefixed(head: PathElement, rest: Self) -> Self {
        let mut elements = Vec::with_capacity(rest.0.len() + 1);
        elements.push(head);
        elements.extend(rest.0);
        Self(elements)
    }

    /// Number of elements in the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the path has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The elements of the path, root first.
    #[must_use]
    pub fn elements(&self) -> &[PathElement] {
        &self.0
    }

    /// Iterates over the elements, root first.
    pub fn iter(&self) -> std::slice::Iter<'_, PathElement> {
        self.0.iter()
    }

    /// Consumes the path set, returning its elements.
    #[must_use]
    pub fn into_elements(self) -> Vec<PathElement> {
        self.0
    }
}

impl From<Vec<PathElement>> for PathSet {
    fn from(elements: Vec<PathElement>) -> Self {
        Self(elements)
    }
}

impl<'a> IntoIterator for &'a PathSet {
    type Item = &'a PathElement;
    type IntoIter = std::slice::Iter<'a, PathElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for PathSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

/// Renders an expansion result as a JSON array of path sets.
///
/// # Errors
///
/// Returns [`Error::Json`](crate::Error::Json) if serialization fails.
///
/// # Examples
///
/// ```
/// use shapepaths::{expand, to_json, Shape};
///
/// let paths = expand(&Shape::new().leaf("name").leaf("age")).unwrap();
/// assert_eq!(to_json(&paths).unwrap(), r#"[["name"],["age"]]"#);
/// ```
pub fn to_json(paths: &[PathSet]) -> Result<String> {
    Ok(serde_json::to_string(paths)?)
}
