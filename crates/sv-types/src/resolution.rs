//! Resolution actions attached to divergences and merge decisions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::path::FieldPath;

/// The action provisionally attached to a divergence by the differ.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DivergenceAction {
    /// Keep the locally stored value.
    KeepLocal,
    /// Take the value from the imported document.
    UseImported,
    /// Neither side wins by rule; an explicit decision is required.
    Conflict,
}

impl DivergenceAction {
    /// The final resolution this action implies, if it is already decided.
    pub fn resolution(self) -> Option<Resolution> {
        match self {
            DivergenceAction::KeepLocal => Some(Resolution::KeepLocal),
            DivergenceAction::UseImported => Some(Resolution::UseImported),
            DivergenceAction::Conflict => None,
        }
    }

    /// Returns `true` for [`DivergenceAction::Conflict`].
    pub fn is_conflict(self) -> bool {
        matches!(self, DivergenceAction::Conflict)
    }
}

impl fmt::Display for DivergenceAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DivergenceAction::KeepLocal => "keep_local",
            DivergenceAction::UseImported => "use_imported",
            DivergenceAction::Conflict => "conflict",
        };
        f.write_str(s)
    }
}

/// The final keep-local / use-imported verdict for one divergence path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    /// Leave the stored value in place.
    KeepLocal,
    /// Overwrite with the imported value.
    UseImported,
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Resolution::KeepLocal => "keep_local",
            Resolution::UseImported => "use_imported",
        };
        f.write_str(s)
    }
}

impl From<Resolution> for DivergenceAction {
    fn from(resolution: Resolution) -> Self {
        match resolution {
            Resolution::KeepLocal => DivergenceAction::KeepLocal,
            Resolution::UseImported => DivergenceAction::UseImported,
        }
    }
}

/// A caller-supplied verdict for one path, taking precedence over
/// auto-resolution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeDecision {
    /// The divergence path this decision covers.
    pub path: FieldPath,
    /// The verdict for that path.
    pub resolution: Resolution,
}

impl MergeDecision {
    /// Create a decision for `path`.
    pub fn new(path: FieldPath, resolution: Resolution) -> Self {
        Self { path, resolution }
    }
}
