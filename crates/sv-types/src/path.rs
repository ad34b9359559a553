//! Dot-delimited paths addressing a location inside a document.
//!
//! A [`FieldPath`] joins property names with `.`: `system.health.value` names
//! the `value` key inside `health` inside `system`. Paths are the join key
//! between the differ, merge decisions, and the applicator.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// The delimiter between path segments.
pub const PATH_DELIMITER: char = '.';

/// A dot-delimited path into a document.
///
/// Segments are property names. A key that itself contains `.` cannot be
/// addressed individually; exports from supported tools do not produce them.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FieldPath(String);

impl FieldPath {
    /// Parse a dotted path string.
    ///
    /// Rejects empty input and empty segments (`"a..b"`, `".a"`, `"a."`).
    pub fn parse(s: &str) -> Result<Self, TypeError> {
        if s.is_empty() {
            return Err(TypeError::InvalidPath {
                path: s.to_string(),
                reason: "path must not be empty".into(),
            });
        }
        if s.split(PATH_DELIMITER).any(str::is_empty) {
            return Err(TypeError::InvalidPath {
                path: s.to_string(),
                reason: "path segments must not be empty".into(),
            });
        }
        Ok(Self(s.to_string()))
    }

    /// A single-segment path for a top-level key.
    ///
    /// Tree traversal uses this with keys exactly as they appear in a
    /// document, without the validation applied to externally supplied paths.
    pub fn key(key: &str) -> Self {
        Self(key.to_string())
    }

    /// Extend this path with a child key.
    pub fn child(&self, key: &str) -> Self {
        let mut joined = String::with_capacity(self.0.len() + key.len() + 1);
        joined.push_str(&self.0);
        joined.push(PATH_DELIMITER);
        joined.push_str(key);
        Self(joined)
    }

    /// The dotted string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterate over the path's segments in order.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(PATH_DELIMITER)
    }

    /// Number of segments.
    pub fn depth(&self) -> usize {
        self.segments().count()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldPath({:?})", self.0)
    }
}

impl FromStr for FieldPath {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for FieldPath {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<FieldPath> for String {
    fn from(path: FieldPath) -> String {
        path.0
    }
}
