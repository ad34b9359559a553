//! Outcomes reported by import and merge operations.

use std::fmt;

use serde::{Deserialize, Serialize};
use sv_diff::Divergence;
use sv_store::StoredCharacter;
use sv_types::RecordId;

/// Result of importing an export.
#[derive(Clone, Debug, PartialEq)]
pub enum ImportOutcome {
    /// No record matched the export's source id; a new record was created.
    Created(StoredCharacter),
    /// A matching record exists and the documents are identical.
    Unchanged(StoredCharacter),
    /// A matching record exists and the documents differ. The caller
    /// presents the divergences, gathers decisions for the conflicts it
    /// cares about, and calls `merge_import`.
    NeedsMerge {
        record: StoredCharacter,
        divergences: Vec<Divergence>,
    },
}

/// How the decision map of a merge was produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeStrategy {
    /// The caller supplied at least one explicit decision.
    UserGuided,
    /// Every decision came from auto-resolution.
    Automatic,
}

impl fmt::Display for MergeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MergeStrategy::UserGuided => "user_guided",
            MergeStrategy::Automatic => "automatic",
        };
        f.write_str(s)
    }
}

/// Summary returned after a merge is persisted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImportReport {
    /// The merged record.
    pub record: RecordId,
    /// Divergences detected between stored and imported documents.
    pub changes_detected: usize,
    /// Caller-supplied decisions applied.
    pub changes_applied: usize,
    /// How the decision map was produced.
    pub strategy: MergeStrategy,
    /// The record's version after the write.
    pub version: u64,
}
