use sv_types::RecordId;

use crate::entry::ChangeEntry;
use crate::error::AuditResult;

/// Append-only change log for character records.
///
/// All implementations must satisfy these invariants:
/// - Entries are immutable once appended.
/// - `entries_for` returns a record's entries in append order.
/// - `clear_record` removes only entries for the given record and reports
///   how many it removed.
pub trait AuditLog: Send + Sync {
    /// Append one entry.
    fn append(&self, entry: ChangeEntry) -> AuditResult<()>;

    /// All entries for a record, oldest first.
    fn entries_for(&self, record: &RecordId) -> AuditResult<Vec<ChangeEntry>>;

    /// Drop a record's accumulated entries. Returns the number removed.
    ///
    /// Used when a merge supersedes the per-field history gathered since the
    /// previous import.
    fn clear_record(&self, record: &RecordId) -> AuditResult<usize>;
}
