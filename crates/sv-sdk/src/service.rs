//! The composition layer: imports, guided merges, and field edits wired to
//! the storage, audit, and notification collaborators.

use std::sync::Arc;

use serde_json::Value;
use sv_audit::{AuditLog, ChangeEntry, ChangeEvent};
use sv_diff::diff_documents;
use sv_merge::MergeOutcome;
use sv_policy::MergePolicy;
use sv_store::{CharacterStore, NewCharacter, StoredCharacter, VersionBump};
use sv_types::{Document, FieldPath, MergeDecision, PrincipalId, RecordId};
use tracing::{debug, info};

use crate::error::{SdkError, SdkResult};
use crate::notify::Notifier;
use crate::report::{ImportOutcome, ImportReport, MergeStrategy};

/// Paths where the originating tool may embed its own identifier, in
/// precedence order.
const SOURCE_ID_PATHS: [&str; 3] = ["_id", "flags.core.sourceId", "_stats.exportSource.uuid"];

/// Read the identifier the originating tool embedded in an export.
pub fn extract_source_id(document: &Document) -> Option<String> {
    SOURCE_ID_PATHS.iter().find_map(|candidate| {
        let path = FieldPath::parse(candidate).ok()?;
        document.get(&path)?.as_str().map(str::to_string)
    })
}

/// Imports, merges, and edits for character records.
///
/// Holds the merge policy and the three collaborator handles. Every operation
/// reads the current record, runs the pure engine (where applicable), writes
/// through the store's optimistic-concurrency check, and only then records
/// audit entries and notifies observers.
pub struct ImportService {
    store: Arc<dyn CharacterStore>,
    audit: Arc<dyn AuditLog>,
    notifier: Arc<dyn Notifier>,
    policy: MergePolicy,
}

impl ImportService {
    /// Create a service with the standard merge policy.
    pub fn new(
        store: Arc<dyn CharacterStore>,
        audit: Arc<dyn AuditLog>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            store,
            audit,
            notifier,
            policy: MergePolicy::standard(),
        }
    }

    /// Replace the merge policy.
    pub fn with_policy(mut self, policy: MergePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The policy in effect.
    pub fn policy(&self) -> &MergePolicy {
        &self.policy
    }

    /// Import an uploaded export.
    ///
    /// When the export's embedded source id matches a record the principal
    /// already owns, nothing is persisted: the result reports whether the
    /// documents are identical or a merge is needed. Otherwise a new record
    /// is created.
    pub fn import(
        &self,
        principal: PrincipalId,
        document: Document,
        filename: Option<&str>,
    ) -> SdkResult<ImportOutcome> {
        let source_id = extract_source_id(&document);

        if let Some(source_id) = &source_id {
            if let Some(existing) = self.store.find_by_source_id(source_id, &principal)? {
                let diff = diff_documents(&existing.document, &document, &self.policy);
                if diff.is_empty() {
                    debug!(record = %existing.id, "re-import identical to stored document");
                    return Ok(ImportOutcome::Unchanged(existing));
                }
                info!(record = %existing.id, summary = %diff.summary(), "re-import needs merge");
                return Ok(ImportOutcome::NeedsMerge {
                    record: existing,
                    divergences: diff.divergences,
                });
            }
        }

        let name = document.name().unwrap_or("Unnamed").to_string();
        let record = self.store.insert(NewCharacter {
            name: name.clone(),
            owner: principal,
            source_id,
            original_filename: filename.map(str::to_string),
            document,
        })?;
        self.audit.append(
            ChangeEntry::new(record.id, principal, ChangeEvent::Created { name })
                .with_note("character imported"),
        )?;
        info!(record = %record.id, "character created from import");
        Ok(ImportOutcome::Created(record))
    }

    /// Merge a re-imported export into a stored record.
    ///
    /// Caller decisions take precedence over auto-resolution. The write goes
    /// through the store's version check; a concurrent merge of the same
    /// record surfaces as a `VersionConflict` store error, and retrying
    /// against the fresh record is always safe because the engine is pure.
    pub fn merge_import(
        &self,
        principal: PrincipalId,
        record_id: RecordId,
        imported: Document,
        decisions: &[MergeDecision],
    ) -> SdkResult<ImportReport> {
        let record = self
            .store
            .get(&record_id)?
            .ok_or(SdkError::RecordNotFound(record_id))?;

        let MergeOutcome {
            merged,
            divergences,
            decided_by_caller,
        } = sv_merge::merge(&record.document, &imported, decisions, &self.policy);
        let updated = self.store.update_document(
            &record_id,
            merged,
            record.version,
            VersionBump::Increment,
        )?;

        // The merged document supersedes the per-field history accumulated
        // since the previous import.
        let cleared = self.audit.clear_record(&record_id)?;
        self.audit.append(
            ChangeEntry::merged(record_id, principal, &divergences, decided_by_caller)
                .with_note(format!(
                    "merged {} changes ({cleared} previous entries cleared)",
                    divergences.len()
                )),
        )?;
        self.notifier.document_updated(&record_id, updated.version);

        let strategy = if decisions.is_empty() {
            MergeStrategy::Automatic
        } else {
            MergeStrategy::UserGuided
        };
        info!(
            record = %record_id,
            changes = divergences.len(),
            %strategy,
            version = updated.version,
            "merge persisted"
        );

        Ok(ImportReport {
            record: record_id,
            changes_detected: divergences.len(),
            changes_applied: decided_by_caller,
            strategy,
            version: updated.version,
        })
    }

    /// Edit one field in place between imports.
    ///
    /// Preserves the record's version: only a merge from a re-import
    /// supersedes the document wholesale.
    pub fn update_field(
        &self,
        principal: PrincipalId,
        record_id: RecordId,
        path: &FieldPath,
        value: Value,
    ) -> SdkResult<StoredCharacter> {
        let record = self
            .store
            .get(&record_id)?
            .ok_or(SdkError::RecordNotFound(record_id))?;

        let old = record.document.get(path).cloned().unwrap_or(Value::Null);
        let mut document = record.document.clone();
        document.set(path, value.clone());

        let updated = self.store.update_document(
            &record_id,
            document,
            record.version,
            VersionBump::Preserve,
        )?;
        self.audit.append(ChangeEntry::new(
            record_id,
            principal,
            ChangeEvent::FieldUpdated {
                path: path.clone(),
                old,
                new: value,
            },
        ))?;
        self.notifier.document_updated(&record_id, updated.version);

        debug!(record = %record_id, %path, "field updated");
        Ok(updated)
    }
}
