//! Diff engine for SheetVault.
//!
//! Walks a locally stored document and a freshly imported one in lock-step,
//! producing an ordered, path-addressed list of divergences. Each divergence
//! carries a provisional resolution action assigned from the classification
//! policy; content differences are never errors, no matter how the two sides'
//! shapes disagree.
//!
//! # Key Types
//!
//! - [`DocumentDiff`] / [`Divergence`] — The divergence list and its entries
//! - [`diff_documents`] — Compare two documents under a policy

pub mod differ;
pub mod divergence;

pub use differ::diff_documents;
pub use divergence::{Divergence, DocumentDiff};
