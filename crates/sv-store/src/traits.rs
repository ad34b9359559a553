use sv_types::{Document, PrincipalId, RecordId};

use crate::error::StoreResult;
use crate::record::{NewCharacter, StoredCharacter, VersionBump};

/// Versioned character-record store.
///
/// All implementations must satisfy these invariants:
/// - A freshly inserted record has version 1.
/// - `update_document` is an optimistic-concurrency write: it fails with
///   `VersionConflict` unless `expected_version` matches the stored version,
///   so a merge computed against a stale document is never written over a
///   newer one.
/// - Reads return deep copies; callers never observe later writes through a
///   previously returned record.
/// - All backend errors are propagated, never silently ignored.
pub trait CharacterStore: Send + Sync {
    /// Read a record by id. Returns `Ok(None)` if it does not exist.
    fn get(&self, id: &RecordId) -> StoreResult<Option<StoredCharacter>>;

    /// Find the record a re-import targets: same embedded source id, same
    /// owner. Returns `Ok(None)` when no such record exists.
    fn find_by_source_id(
        &self,
        source_id: &str,
        owner: &PrincipalId,
    ) -> StoreResult<Option<StoredCharacter>>;

    /// Create a record at version 1 and return it.
    fn insert(&self, new: NewCharacter) -> StoreResult<StoredCharacter>;

    /// Replace a record's document.
    ///
    /// `expected_version` is the version the caller read before computing
    /// the new document; `bump` states whether the counter advances.
    /// Returns the record as stored after the write.
    fn update_document(
        &self,
        id: &RecordId,
        document: Document,
        expected_version: u64,
        bump: VersionBump,
    ) -> StoreResult<StoredCharacter>;

    /// All records owned by `owner`, ordered by name.
    fn list_for_owner(&self, owner: &PrincipalId) -> StoreResult<Vec<StoredCharacter>>;

    /// Delete a record. Returns `true` if it existed.
    fn remove(&self, id: &RecordId) -> StoreResult<bool>;
}
