//! The result of comparing two documents.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sv_types::{DivergenceAction, FieldPath};

/// A single path where the local and imported documents differ.
///
/// `old` holds the local value and `new` the imported one; `Null` stands in
/// for a side where the path is absent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Divergence {
    /// Where the two documents differ.
    pub path: FieldPath,
    /// The value in the locally stored document.
    pub old: Value,
    /// The value in the imported document.
    pub new: Value,
    /// The provisional resolution assigned during diffing.
    pub action: DivergenceAction,
}

/// The ordered divergence list produced by comparing two documents.
///
/// Paths are unique; order is the traversal order (local keys in their
/// declared order per level, then imported-only keys, depth-first).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentDiff {
    /// The list of divergences.
    pub divergences: Vec<Divergence>,
}

impl DocumentDiff {
    /// Create an empty diff.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the two documents were equal.
    pub fn is_empty(&self) -> bool {
        self.divergences.is_empty()
    }

    /// Number of divergences.
    pub fn len(&self) -> usize {
        self.divergences.len()
    }

    /// Number of divergences requiring an explicit decision.
    pub fn conflicts(&self) -> usize {
        self.divergences
            .iter()
            .filter(|d| d.action.is_conflict())
            .count()
    }

    /// Number of divergences the differ already decided.
    pub fn auto_resolvable(&self) -> usize {
        self.len() - self.conflicts()
    }

    /// Iterate over the divergences in order.
    pub fn iter(&self) -> impl Iterator<Item = &Divergence> {
        self.divergences.iter()
    }

    /// One-line human-readable summary of the diff.
    pub fn summary(&self) -> String {
        format!(
            "{} changes detected ({} conflicts, {} auto-resolved)",
            self.len(),
            self.conflicts(),
            self.auto_resolvable()
        )
    }
}
