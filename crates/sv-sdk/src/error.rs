use sv_types::RecordId;
use thiserror::Error;

/// Errors surfaced by the high-level API.
#[derive(Debug, Error)]
pub enum SdkError {
    /// The targeted record does not exist.
    #[error("record not found: {0}")]
    RecordNotFound(RecordId),

    /// Storage collaborator failure, including version conflicts on
    /// concurrent imports.
    #[error("store error: {0}")]
    Store(#[from] sv_store::StoreError),

    /// Audit collaborator failure.
    #[error("audit error: {0}")]
    Audit(#[from] sv_audit::AuditError),
}

/// Convenience alias for API results.
pub type SdkResult<T> = Result<T, SdkError>;
