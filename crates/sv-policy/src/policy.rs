//! The merge policy: an ordered rule table plus the always-imported key list.

use serde::{Deserialize, Serialize};
use sv_types::{DivergenceAction, FieldPath, Resolution};

use crate::pattern::PathPattern;

/// One classification rule: paths matching `pattern` default to `resolution`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyRule {
    /// The pattern matched against the divergence path.
    pub pattern: PathPattern,
    /// The default resolution for matching paths.
    pub resolution: Resolution,
}

impl PolicyRule {
    /// Shorthand constructor.
    pub fn new(pattern: PathPattern, resolution: Resolution) -> Self {
        Self {
            pattern,
            resolution,
        }
    }
}

/// The classification policy consulted by the differ and the auto-resolver.
///
/// Classification is a pure function of the path string; document content is
/// never inspected. Rules are checked in order and the first match wins; a
/// path matching no rule is a conflict requiring an explicit decision.
///
/// The policy is plain data and serializes cleanly, so deployments can swap
/// the table without touching traversal logic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergePolicy {
    /// Ordered `(pattern, resolution)` rules; first match wins.
    pub rules: Vec<PolicyRule>,
    /// Object keys whose subtree is always taken verbatim from the import,
    /// bypassing classification entirely. Matched against the bare key at
    /// every nesting depth.
    pub always_imported: Vec<String>,
}

impl MergePolicy {
    /// A policy with no rules: every divergence is a conflict and every
    /// conflict auto-resolves to the imported value.
    pub fn empty() -> Self {
        Self {
            rules: Vec::new(),
            always_imported: Vec::new(),
        }
    }

    /// The stock table for character-sheet exports.
    ///
    /// State a player mutates between imports (attributes, current health,
    /// conditions, currency, luck, radiation, body-part injuries) keeps the
    /// local value; display metadata (name, image, type) follows the import;
    /// tool-managed subtrees (`_stats`, `flags`, `effects`, `prototypeToken`)
    /// are always taken verbatim from the import.
    pub fn standard() -> Self {
        use PathPattern::{Exact, Prefix};
        use Resolution::{KeepLocal, UseImported};

        Self {
            rules: vec![
                PolicyRule::new(Prefix("system.attributes".into()), KeepLocal),
                PolicyRule::new(Exact("system.health.value".into()), KeepLocal),
                PolicyRule::new(Prefix("system.conditions".into()), KeepLocal),
                PolicyRule::new(Prefix("system.currency".into()), KeepLocal),
                PolicyRule::new(Exact("system.luckPoints".into()), KeepLocal),
                PolicyRule::new(Exact("system.radiation".into()), KeepLocal),
                PolicyRule::new(Prefix("system.body_parts".into()), KeepLocal),
                PolicyRule::new(Exact("name".into()), UseImported),
                PolicyRule::new(Exact("img".into()), UseImported),
                PolicyRule::new(Exact("type".into()), UseImported),
            ],
            always_imported: vec![
                "_stats".into(),
                "flags".into(),
                "effects".into(),
                "prototypeToken".into(),
            ],
        }
    }

    /// Classify a divergence path.
    ///
    /// The first matching rule's resolution becomes the action; a path
    /// matching no rule is a [`DivergenceAction::Conflict`].
    pub fn classify(&self, path: &FieldPath) -> DivergenceAction {
        match self.first_match(path) {
            Some(resolution) => resolution.into(),
            None => DivergenceAction::Conflict,
        }
    }

    /// Resolve a conflict path during auto-resolution.
    ///
    /// Same table lookup as [`classify`](Self::classify), with the imported
    /// value as the fallback for paths matching no rule.
    pub fn resolve(&self, path: &FieldPath) -> Resolution {
        self.first_match(path).unwrap_or(Resolution::UseImported)
    }

    /// Returns `true` if `key` names a subtree taken verbatim from the
    /// import.
    pub fn is_always_imported(&self, key: &str) -> bool {
        self.always_imported.iter().any(|k| k == key)
    }

    fn first_match(&self, path: &FieldPath) -> Option<Resolution> {
        self.rules
            .iter()
            .find(|rule| rule.pattern.matches(path.as_str()))
            .map(|rule| rule.resolution)
    }
}

impl Default for MergePolicy {
    fn default() -> Self {
        Self::standard()
    }
}
