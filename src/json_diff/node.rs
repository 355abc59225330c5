// Copyright 2024 The DocAssert Authors
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use serde_json::{Map, Value};
use std::fmt;

use super::NumericMode;

/// Borrowed view of a JSON value, tagged by its shape.
///
/// Every value of a parsed document is exactly one of these, so a pair of
/// nodes can be dispatched with a single exhaustive `match`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Node<'a> {
    /// A JSON object.
    Map(&'a Map<String, Value>),
    /// A JSON array.
    Sequence(&'a [Value]),
    /// A string, number, boolean or null.
    Scalar(&'a Value),
}

impl<'a> From<&'a Value> for Node<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::Object(map) => Node::Map(map),
            Value::Array(items) => Node::Sequence(items),
            scalar => Node::Scalar(scalar),
        }
    }
}

impl<'a> Node<'a> {
    /// Returns `true` for a map, or for a sequence whose first item is a map.
    pub(crate) fn opens_with_map(&self) -> bool {
        match self {
            Node::Map(_) => true,
            Node::Sequence(items) => matches!(items.first(), Some(Value::Object(_))),
            Node::Scalar(_) => false,
        }
    }

    /// Returns `true` for a map, or for a sequence with a map anywhere in it.
    pub(crate) fn holds_map(&self) -> bool {
        match self {
            Node::Map(_) => true,
            Node::Sequence(items) => items.iter().any(Value::is_object),
            Node::Scalar(_) => false,
        }
    }
}

/// Compares two scalars of the same JSON type.
///
/// Returns `None` when the scalars are of different types (or either value
/// is not a scalar at all).
pub(crate) fn scalar_eq(lhs: &Value, rhs: &Value, numeric_mode: NumericMode) -> Option<bool> {
    match (lhs, rhs) {
        (Value::Null, Value::Null) => Some(true),
        (Value::Bool(lhs), Value::Bool(rhs)) => Some(lhs == rhs),
        (Value::String(lhs), Value::String(rhs)) => Some(lhs == rhs),
        (Value::Number(lhs), Value::Number(rhs)) => Some(match numeric_mode {
            NumericMode::Strict => lhs == rhs,
            NumericMode::AssumeFloat => lhs.as_f64() == rhs.as_f64(),
        }),
        _ => None,
    }
}

impl<'a> fmt::Display for Node<'a> {
    /// Compact JSON, or pretty-printed JSON with `{:#}`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let pretty = f.alternate();
        let text = match (self, pretty) {
            (Node::Scalar(value), false) => return write!(f, "{}", value),
            (Node::Scalar(value), true) => return write!(f, "{:#}", value),
            (Node::Map(map), false) => serde_json::to_string(map),
            (Node::Map(map), true) => serde_json::to_string_pretty(map),
            (Node::Sequence(items), false) => serde_json::to_string(items),
            (Node::Sequence(items), true) => serde_json::to_string_pretty(items),
        };

        f.write_str(&text.map_err(|_| fmt::Error)?)
    }
}
