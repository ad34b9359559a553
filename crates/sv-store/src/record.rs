//! Character record shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sv_types::{Document, PrincipalId, RecordId};

/// Whether a document write advances the record's version counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VersionBump {
    /// Advance the version: the write supersedes the previous document
    /// (a merge from a re-import).
    Increment,
    /// Keep the version: an in-place field edit between imports.
    Preserve,
}

/// A character record as held by the storage backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoredCharacter {
    /// Storage identifier.
    pub id: RecordId,
    /// Display name, taken from the document at import time.
    pub name: String,
    /// The user who owns the record.
    pub owner: PrincipalId,
    /// Identifier the originating tool embedded in the export, when present.
    /// Re-imports of the same character carry the same source id.
    pub source_id: Option<String>,
    /// Filename of the originally uploaded export.
    pub original_filename: Option<String>,
    /// The current document. This becomes the "local" side of the next
    /// import's merge.
    pub document: Document,
    /// Version counter for optimistic-concurrency writes. Starts at 1.
    pub version: u64,
    /// When the record was first imported.
    pub imported_at: DateTime<Utc>,
    /// When the document was last written.
    pub last_modified: DateTime<Utc>,
}

/// The fields needed to create a record.
#[derive(Clone, Debug)]
pub struct NewCharacter {
    /// Display name.
    pub name: String,
    /// Owning user.
    pub owner: PrincipalId,
    /// Embedded source identifier, when the export carried one.
    pub source_id: Option<String>,
    /// Filename of the uploaded export.
    pub original_filename: Option<String>,
    /// The imported document.
    pub document: Document,
}
