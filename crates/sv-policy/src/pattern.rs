//! Path patterns matched against dotted divergence paths.

use serde::{Deserialize, Serialize};
use sv_types::PATH_DELIMITER;

/// A pattern matched against a dotted field path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathPattern {
    /// Matches exactly one path.
    Exact(String),
    /// Matches a path and everything below it.
    ///
    /// Prefix matching is segment-aware: `Prefix("system.currency")` matches
    /// `system.currency` and `system.currency.caps`, never
    /// `system.currencyRates`.
    Prefix(String),
}

impl PathPattern {
    /// Returns `true` if `path` matches this pattern.
    pub fn matches(&self, path: &str) -> bool {
        match self {
            PathPattern::Exact(target) => path == target,
            PathPattern::Prefix(prefix) => {
                path == prefix
                    || path
                        .strip_prefix(prefix.as_str())
                        .is_some_and(|rest| rest.starts_with(PATH_DELIMITER))
            }
        }
    }
}
