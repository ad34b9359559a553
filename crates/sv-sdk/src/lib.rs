//! High-level SheetVault API.
//!
//! `ImportService` wires the pure diff/merge engine to its collaborators:
//! the character store (versioned persistence), the audit log (change
//! history), and the notifier (live observers). The service owns the merge
//! policy; the engine stays a pure function underneath it.
//!
//! # Key Types
//!
//! - [`ImportService`] — Import an export, merge a re-import, edit a field
//! - [`ImportOutcome`] / [`ImportReport`] — Operation results
//! - [`Notifier`] / [`NullNotifier`] — The notification collaborator contract

pub mod error;
pub mod notify;
pub mod report;
pub mod service;

pub use error::{SdkError, SdkResult};
pub use notify::{Notifier, NullNotifier};
pub use report::{ImportOutcome, ImportReport, MergeStrategy};
pub use service::{extract_source_id, ImportService};
