use std::sync::RwLock;

use sv_types::RecordId;

use crate::entry::ChangeEntry;
use crate::error::AuditResult;
use crate::traits::AuditLog;

/// In-memory, Vec-backed audit log.
///
/// Intended for tests and embedding. Entries are held behind a `RwLock` and
/// cloned on read.
pub struct InMemoryAuditLog {
    entries: RwLock<Vec<ChangeEntry>>,
}

impl InMemoryAuditLog {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Total number of entries across all records.
    pub fn len(&self) -> usize {
        self.entries.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.read().expect("lock poisoned").is_empty()
    }
}

impl Default for InMemoryAuditLog {
    fn default() -> Self {
        Self::new()
    }
}

impl AuditLog for InMemoryAuditLog {
    fn append(&self, entry: ChangeEntry) -> AuditResult<()> {
        self.entries.write().expect("lock poisoned").push(entry);
        Ok(())
    }

    fn entries_for(&self, record: &RecordId) -> AuditResult<Vec<ChangeEntry>> {
        let entries = self.entries.read().expect("lock poisoned");
        Ok(entries
            .iter()
            .filter(|entry| entry.record == *record)
            .cloned()
            .collect())
    }

    fn clear_record(&self, record: &RecordId) -> AuditResult<usize> {
        let mut entries = self.entries.write().expect("lock poisoned");
        let before = entries.len();
        entries.retain(|entry| entry.record != *record);
        Ok(before - entries.len())
    }
}

impl std::fmt::Debug for InMemoryAuditLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryAuditLog")
            .field("entry_count", &self.len())
            .finish()
    }
}
