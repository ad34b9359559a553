//! Error types for the audit crate.

use thiserror::Error;

/// Errors produced by audit-log operations.
#[derive(Debug, Error)]
pub enum AuditError {
    /// Backend failure (I/O, serialization, connection).
    #[error("audit backend error: {0}")]
    Backend(String),
}

/// Convenience alias for audit results.
pub type AuditResult<T> = Result<T, AuditError>;
