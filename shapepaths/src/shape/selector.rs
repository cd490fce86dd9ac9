//! Range selectors: opaque path segments substituted for the range key.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// An opaque segment selecting members of a collection.
///
/// Selectors are carried verbatim into the produced path sets; their bounds
/// are never checked. Well-known forms get their own variants so callers can
/// match on them, anything else is kept as a raw [`Value`].
///
/// # Examples
///
/// ```
/// use shapepaths::RangeSelector;
///
/// let range = RangeSelector::range(0, 100);
/// assert_eq!(range.to_string(), r#"{"from":0,"to":100}"#);
///
/// let indices = RangeSelector::from(vec![0, 1, 2, 3]);
/// assert_eq!(indices.to_string(), "[0,1,2,3]");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RangeSelector {
    /// A bounded range record.
    Range {
        /// First index of the range.
        from: i64,
        /// Last index of the range.
        to: i64,
    },
    /// An explicit list of indices.
    Indices(Vec<i64>),
    /// Any other token the downstream consumer understands.
    Token(Value),
}

impl RangeSelector {
    /// Creates a bounded range selector.
    #[must_use]
    pub const fn range(from: i64, to: i64) -> Self {
        Self::Range { from, to }
    }

    /// Returns the selector as a JSON value.
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Self::Range { from, to } => serde_json::json!({ "from": from, "to": to }),
            Self::Indices(indices) => Value::from(indices.clone()),
            Self::Token(value) => value.clone(),
        }
    }
}

impl From<Value> for RangeSelector {
    fn from(value: Value) -> Self {
        if let Some(range) = as_range(&value) {
            return range;
        }
        if let Some(indices) = as_indices(&value) {
            return Self::Indices(indices);
        }
        Self::Token(value)
    }
}

impl From<Vec<i64>> for RangeSelector {
    fn from(indices: Vec<i64>) -> Self {
        Self::Indices(indices)
    }
}

impl<'de> Deserialize<'de> for RangeSelector {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Self::from)
    }
}

impl fmt::Display for RangeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_value())
    }
}

// Only an object holding exactly integer `from` then `to` is a range record.
// Extra fields or another key order keep it a token, so it is written back
// exactly as it was read.
fn as_range(value: &Value) -> Option<RangeSelector> {
    let object = value.as_object()?;
    if !object.keys().map(String::as_str).eq(["from", "to"]) {
        return None;
    }
    let from = object.get("from")?.as_i64()?;
    let to = object.get("to")?.as_i64()?;
    Some(RangeSelector::Range { from, to })
}

fn as_indices(value: &Value) -> Option<Vec<i64>> {
    value.as_array()?.iter().map(Value::as_i64).collect()
}
