//! Notification contract: announce persisted document changes to observers.

use sv_types::RecordId;

/// Observer channel for live viewers of a record.
///
/// Called only after persistence succeeds. The merge engine has no knowledge
/// of this channel; it exists entirely at the composition layer.
pub trait Notifier: Send + Sync {
    /// A record's document reached `version`.
    fn document_updated(&self, record: &RecordId, version: u64);
}

/// A notifier that drops every announcement.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn document_updated(&self, _record: &RecordId, _version: u64) {}
}
