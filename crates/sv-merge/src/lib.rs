//! Merge engine for SheetVault.
//!
//! Given a locally stored document and a newly imported one, the engine
//! diffs them, fills in a resolution for every divergence (caller decisions
//! first, policy-driven auto-resolution for the rest), and applies the
//! decisions to produce the merged document. The whole pipeline is a pure,
//! synchronous computation over its inputs: no shared state, no I/O, safe to
//! run concurrently for different document pairs without coordination.
//!
//! # Key Types
//!
//! - [`merge`] / [`MergeOutcome`] — The single entry point collaborators call
//! - [`auto_resolve`] — Rule-based decisions for undecided divergences
//! - [`apply_merge`] — Write `use_imported` decisions into a copy of the local document

pub mod apply;
pub mod orchestrate;
pub mod resolve;

pub use apply::apply_merge;
pub use orchestrate::{merge, MergeOutcome};
pub use resolve::auto_resolve;
