//! Audit entries recording how a character record changed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sv_diff::Divergence;
use sv_types::{FieldPath, PrincipalId, RecordId};

/// Upper bound on the number of divergences kept in a merge entry.
pub const DIVERGENCE_SAMPLE_LIMIT: usize = 50;

/// What happened to the record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChangeEvent {
    /// The record was created from a first-time import.
    Created {
        /// The character's display name at creation.
        name: String,
    },
    /// A single field was edited in place.
    FieldUpdated {
        path: FieldPath,
        old: Value,
        new: Value,
    },
    /// A re-import was merged into the stored document.
    Merged {
        /// Divergences detected between stored and imported documents.
        changes_detected: usize,
        /// Caller-supplied decisions applied during the merge.
        changes_applied: usize,
        /// The first [`DIVERGENCE_SAMPLE_LIMIT`] divergences.
        sample: Vec<Divergence>,
    },
    /// The record was deleted.
    Deleted,
}

/// One audit-log entry: an event, the record it applies to, and the acting
/// principal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChangeEntry {
    /// The record the change applies to.
    pub record: RecordId,
    /// The user who made the change.
    pub principal: PrincipalId,
    /// When the change was recorded.
    pub at: DateTime<Utc>,
    /// The change itself.
    pub event: ChangeEvent,
    /// Free-form description.
    pub note: Option<String>,
}

impl ChangeEntry {
    /// Create an entry timestamped now.
    pub fn new(record: RecordId, principal: PrincipalId, event: ChangeEvent) -> Self {
        Self {
            record,
            principal,
            at: Utc::now(),
            event,
            note: None,
        }
    }

    /// Attach a free-form note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// A merge entry with its divergence sample truncated to
    /// [`DIVERGENCE_SAMPLE_LIMIT`].
    pub fn merged(
        record: RecordId,
        principal: PrincipalId,
        divergences: &[Divergence],
        changes_applied: usize,
    ) -> Self {
        let sample = divergences
            .iter()
            .take(DIVERGENCE_SAMPLE_LIMIT)
            .cloned()
            .collect();
        Self::new(
            record,
            principal,
            ChangeEvent::Merged {
                changes_detected: divergences.len(),
                changes_applied,
                sample,
            },
        )
    }
}
