use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;
use sv_types::{Document, PrincipalId, RecordId};

use crate::error::{StoreError, StoreResult};
use crate::record::{NewCharacter, StoredCharacter, VersionBump};
use crate::traits::CharacterStore;

/// In-memory, HashMap-based character store.
///
/// Intended for tests and embedding. Records are held behind a `RwLock` for
/// safe concurrent access and cloned on read/write.
pub struct InMemoryCharacterStore {
    records: RwLock<HashMap<RecordId, StoredCharacter>>,
}

impl InMemoryCharacterStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Number of records currently stored.
    pub fn len(&self) -> usize {
        self.records.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.records.read().expect("lock poisoned").is_empty()
    }

    /// Remove all records.
    pub fn clear(&self) {
        self.records.write().expect("lock poisoned").clear();
    }
}

impl Default for InMemoryCharacterStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CharacterStore for InMemoryCharacterStore {
    fn get(&self, id: &RecordId) -> StoreResult<Option<StoredCharacter>> {
        let map = self.records.read().expect("lock poisoned");
        Ok(map.get(id).cloned())
    }

    fn find_by_source_id(
        &self,
        source_id: &str,
        owner: &PrincipalId,
    ) -> StoreResult<Option<StoredCharacter>> {
        let map = self.records.read().expect("lock poisoned");
        Ok(map
            .values()
            .find(|record| {
                record.owner == *owner && record.source_id.as_deref() == Some(source_id)
            })
            .cloned())
    }

    fn insert(&self, new: NewCharacter) -> StoreResult<StoredCharacter> {
        let now = Utc::now();
        let record = StoredCharacter {
            id: RecordId::new(),
            name: new.name,
            owner: new.owner,
            source_id: new.source_id,
            original_filename: new.original_filename,
            document: new.document,
            version: 1,
            imported_at: now,
            last_modified: now,
        };
        let mut map = self.records.write().expect("lock poisoned");
        map.insert(record.id, record.clone());
        Ok(record)
    }

    fn update_document(
        &self,
        id: &RecordId,
        document: Document,
        expected_version: u64,
        bump: VersionBump,
    ) -> StoreResult<StoredCharacter> {
        let mut map = self.records.write().expect("lock poisoned");
        let record = map
            .get_mut(id)
            .ok_or(StoreError::RecordNotFound(*id))?;

        if record.version != expected_version {
            return Err(StoreError::VersionConflict {
                expected: expected_version,
                actual: record.version,
            });
        }

        record.document = document;
        record.last_modified = Utc::now();
        if bump == VersionBump::Increment {
            record.version += 1;
        }
        Ok(record.clone())
    }

    fn list_for_owner(&self, owner: &PrincipalId) -> StoreResult<Vec<StoredCharacter>> {
        let map = self.records.read().expect("lock poisoned");
        let mut records: Vec<StoredCharacter> = map
            .values()
            .filter(|record| record.owner == *owner)
            .cloned()
            .collect();
        records.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(records)
    }

    fn remove(&self, id: &RecordId) -> StoreResult<bool> {
        let mut map = self.records.write().expect("lock poisoned");
        Ok(map.remove(id).is_some())
    }
}

impl std::fmt::Debug for InMemoryCharacterStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryCharacterStore")
            .field("record_count", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn new_character(name: &str, owner: PrincipalId, source_id: Option<&str>) -> NewCharacter {
        NewCharacter {
            name: name.to_string(),
            owner,
            source_id: source_id.map(str::to_string),
            original_filename: Some(format!("{name}.json")),
            document: Document::from_value(json!({"name": name})).unwrap(),
        }
    }

    #[test]
    fn insert_assigns_version_one() {
        let store = InMemoryCharacterStore::new();
        let owner = PrincipalId::new();

        let record = store
            .insert(new_character("Nora", owner, Some("Actor.abc")))
            .unwrap();
        assert_eq!(record.version, 1);
        assert_eq!(record.imported_at, record.last_modified);

        let found = store.get(&record.id).unwrap().unwrap();
        assert_eq!(found, record);
    }

    #[test]
    fn find_by_source_id_is_scoped_to_owner() {
        let store = InMemoryCharacterStore::new();
        let alice = PrincipalId::new();
        let bob = PrincipalId::new();

        store
            .insert(new_character("Nora", alice, Some("Actor.abc")))
            .unwrap();

        assert!(store
            .find_by_source_id("Actor.abc", &alice)
            .unwrap()
            .is_some());
        assert!(store
            .find_by_source_id("Actor.abc", &bob)
            .unwrap()
            .is_none());
        assert!(store
            .find_by_source_id("Actor.other", &alice)
            .unwrap()
            .is_none());
    }

    #[test]
    fn increment_advances_the_version() {
        let store = InMemoryCharacterStore::new();
        let record = store
            .insert(new_character("Nora", PrincipalId::new(), None))
            .unwrap();

        let updated = store
            .update_document(
                &record.id,
                Document::from_value(json!({"name": "Nora", "v": 2})).unwrap(),
                1,
                VersionBump::Increment,
            )
            .unwrap();
        assert_eq!(updated.version, 2);
    }

    #[test]
    fn preserve_keeps_the_version() {
        let store = InMemoryCharacterStore::new();
        let record = store
            .insert(new_character("Nora", PrincipalId::new(), None))
            .unwrap();

        let updated = store
            .update_document(
                &record.id,
                Document::from_value(json!({"name": "Nora", "edited": true})).unwrap(),
                1,
                VersionBump::Preserve,
            )
            .unwrap();
        assert_eq!(updated.version, 1);
    }

    #[test]
    fn stale_write_fails_with_version_conflict() {
        let store = InMemoryCharacterStore::new();
        let record = store
            .insert(new_character("Nora", PrincipalId::new(), None))
            .unwrap();

        store
            .update_document(
                &record.id,
                record.document.clone(),
                1,
                VersionBump::Increment,
            )
            .unwrap();

        // A second writer still holding version 1.
        let result = store.update_document(
            &record.id,
            record.document.clone(),
            1,
            VersionBump::Increment,
        );
        assert!(matches!(
            result,
            Err(StoreError::VersionConflict {
                expected: 1,
                actual: 2
            })
        ));
    }

    #[test]
    fn update_missing_record_fails() {
        let store = InMemoryCharacterStore::new();
        let result = store.update_document(
            &RecordId::new(),
            Document::empty(),
            1,
            VersionBump::Increment,
        );
        assert!(matches!(result, Err(StoreError::RecordNotFound(_))));
    }

    #[test]
    fn list_for_owner_sorted_by_name() {
        let store = InMemoryCharacterStore::new();
        let owner = PrincipalId::new();

        store.insert(new_character("Zed", owner, None)).unwrap();
        store.insert(new_character("Ada", owner, None)).unwrap();
        store
            .insert(new_character("Other", PrincipalId::new(), None))
            .unwrap();

        let records = store.list_for_owner(&owner).unwrap();
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Ada", "Zed"]);
    }

    #[test]
    fn remove_reports_existence() {
        let store = InMemoryCharacterStore::new();
        let record = store
            .insert(new_character("Nora", PrincipalId::new(), None))
            .unwrap();

        assert!(store.remove(&record.id).unwrap());
        assert!(!store.remove(&record.id).unwrap());
        assert!(store.is_empty());
    }
}
