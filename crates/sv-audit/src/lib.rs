//! Audit contract for SheetVault.
//!
//! Every change to a character record — creation, in-place field edits,
//! merges from a re-import — is recorded against the record and the acting
//! principal. Merge entries carry the divergence counts and a bounded sample
//! of the divergence list, not the full list, so entries stay small no matter
//! how large an import is.
//!
//! # Key Types
//!
//! - [`AuditLog`] — The audit trait consumed by the composition layer
//! - [`ChangeEntry`] / [`ChangeEvent`] — One recorded change
//! - [`InMemoryAuditLog`] — Vec-backed implementation for tests and embedding

pub mod entry;
pub mod error;
pub mod memory;
pub mod traits;

pub use entry::{ChangeEntry, ChangeEvent, DIVERGENCE_SAMPLE_LIMIT};
pub use error::{AuditError, AuditResult};
pub use memory::InMemoryAuditLog;
pub use traits::AuditLog;
