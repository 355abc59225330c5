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

use regex::Regex;
use std::fmt;
use std::num::ParseIntError;

const JSONPATH_PATTERN: &str = r"^\$\.?(([a-zA-Z_][a-zA-Z0-9_]*)*(\[\d+\]|\[\d*:\d*\]|(\[\*\]))?)(\.((([a-zA-Z_][a-zA-Z0-9_]*)(\[\d+\]|\[\d*:\d*\]|(\[\*\]))?)|\*))*$";

/// Errors raised while parsing an ignore pattern.
#[derive(Debug, thiserror::Error)]
pub enum PathError {
    #[error("invalid JSONPath: {0}")]
    Invalid(String),
    #[error("invalid index in JSONPath: {0}")]
    Index(#[from] ParseIntError),
    #[error(transparent)]
    Regex(#[from] regex::Error),
}

/// Location inside a JSON document, or a pattern over such locations.
///
/// An empty path is the document root, displayed as `$`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path<'a> {
    keys: Vec<Key<'a>>,
}

/// One step of a [`Path`].
///
/// Only `Idx` and `Field` appear in the location of a difference; the range
/// and wildcard keys come from ignore patterns.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Key<'a> {
    Idx(usize),
    IdxRange(usize, usize),
    IdxRangeStart(usize),
    IdxRangeEnd(usize),
    Wildcard,
    WildcardArray,
    Field(&'a str),
}

// FromStr can't hand out a Path borrowing from the input string.
pub trait JSONPath {
    fn jsonpath(&self) -> Result<Path<'_>, PathError>;
}

impl JSONPath for str {
    fn jsonpath(&self) -> Result<Path<'_>, PathError> {
        Path::from_jsonpath(self)
    }
}

impl<'a> Key<'a> {
    fn parse(token: &'a str) -> Result<Self, PathError> {
        let Some(inner) = token.strip_suffix(']') else {
            return Ok(match token {
                "*" => Key::Wildcard,
                field => Key::Field(field),
            });
        };

        if inner == "*" || inner == ":" {
            return Ok(Key::WildcardArray);
        }

        match inner.split_once(':') {
            None => Ok(Key::Idx(inner.parse()?)),
            Some((start, "")) => Ok(Key::IdxRangeStart(start.parse()?)),
            Some(("", end)) => Ok(Key::IdxRangeEnd(end.parse()?)),
            Some((start, end)) => Ok(Key::IdxRange(start.parse()?, end.parse()?)),
        }
    }

    /// Whether this pattern key matches the concrete key `other`.
    fn matches(&self, other: &Key) -> bool {
        match (self, other) {
            (Key::Wildcard, Key::Field(_)) => true,
            (Key::WildcardArray, Key::Idx(_)) => true,
            (Key::IdxRange(start, end), Key::Idx(idx)) => start <= idx && idx < end,
            (Key::IdxRangeStart(start), Key::Idx(idx)) => start <= idx,
            (Key::IdxRangeEnd(end), Key::Idx(idx)) => idx < end,
            (pattern, other) => pattern == other,
        }
    }
}

impl<'a> fmt::Display for Key<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Key::Idx(idx) => write!(f, "[{}]", idx),
            Key::Field(key) if is_identifier(key) => write!(f, ".{}", key),
            Key::Field(key) => {
                let quoted = serde_json::to_string(key).map_err(|_| fmt::Error)?;
                write!(f, "[{}]", quoted)
            }
            Key::IdxRange(start, end) => write!(f, "[{}:{}]", start, end),
            Key::IdxRangeStart(start) => write!(f, "[{}:]", start),
            Key::IdxRangeEnd(end) => write!(f, "[:{}]", end),
            Key::Wildcard => write!(f, ".*"),
            Key::WildcardArray => write!(f, "[*]"),
        }
    }
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl<'a> Path<'a> {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn keys(&self) -> &[Key<'a>] {
        &self.keys
    }

    pub fn is_root(&self) -> bool {
        self.keys.is_empty()
    }

    pub(crate) fn append(&self, next: Key<'a>) -> Path<'a> {
        let mut keys = Vec::with_capacity(self.keys.len() + 1);
        keys.extend_from_slice(&self.keys);
        keys.push(next);
        Path { keys }
    }

    /// Whether this pattern covers `location` or one of its ancestors.
    pub(crate) fn covers(&self, location: &[Key]) -> bool {
        self.keys.len() <= location.len()
            && self
                .keys
                .iter()
                .zip(location)
                .all(|(pattern, key)| pattern.matches(key))
    }

    pub fn from_jsonpath(jsonpath: &'a str) -> Result<Self, PathError> {
        let re = Regex::new(JSONPATH_PATTERN)?;
        if !re.is_match(jsonpath) {
            return Err(PathError::Invalid(jsonpath.to_string()));
        }

        let keys = jsonpath
            .trim_start_matches('$')
            .split(|c| c == '.' || c == '[')
            .filter(|token| !token.is_empty())
            .map(Key::parse)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Path { keys })
    }
}

impl<'a> From<&[Key<'a>]> for Path<'a> {
    fn from(keys: &[Key<'a>]) -> Self {
        Path {
            keys: keys.to_vec(),
        }
    }
}

impl<'a> fmt::Display for Path<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "$")?;
        for key in &self.keys {
            write!(f, "{}", key)?;
        }
        Ok(())
    }
}
