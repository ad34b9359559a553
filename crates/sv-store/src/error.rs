//! Error types for the storage crate.

use sv_types::RecordId;
use thiserror::Error;

/// Errors produced by storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record with the given identifier.
    #[error("record not found: {0}")]
    RecordNotFound(RecordId),

    /// A write raced with another writer: the stored version moved on.
    ///
    /// The caller should reload the record, recompute against the fresh
    /// document, and retry — recomputing a merge is always safe because the
    /// engine is a pure function of its inputs.
    #[error("version conflict: write expected version {expected}, record is at {actual}")]
    VersionConflict { expected: u64, actual: u64 },

    /// Backend failure (I/O, serialization, connection).
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Convenience alias for storage results.
pub type StoreResult<T> = Result<T, StoreError>;
