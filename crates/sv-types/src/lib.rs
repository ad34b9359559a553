//! Foundation types for SheetVault.
//!
//! This crate provides the document, path, and resolution types used
//! throughout the SheetVault system. Every other SheetVault crate depends on
//! `sv-types`.
//!
//! # Key Types
//!
//! - [`Document`] — A character record's JSON state tree (object root)
//! - [`FieldPath`] — Dot-delimited address of a location inside a document
//! - [`DivergenceAction`] / [`Resolution`] — Provisional merge actions and final verdicts
//! - [`MergeDecision`] — A caller-supplied verdict for one path
//! - [`RecordId`] / [`PrincipalId`] — Opaque identifiers for records and acting users

pub mod document;
pub mod error;
pub mod ids;
pub mod path;
pub mod resolution;

pub use document::Document;
pub use error::TypeError;
pub use ids::{PrincipalId, RecordId};
pub use path::{FieldPath, PATH_DELIMITER};
pub use resolution::{DivergenceAction, MergeDecision, Resolution};
