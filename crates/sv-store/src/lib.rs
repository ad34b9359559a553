//! Storage contract for SheetVault.
//!
//! A record holds the current document for one character plus a version
//! counter. The engine itself is pure, so concurrent imports against the same
//! record are serialized here: writes carry the version the caller computed
//! against, and a stale write fails instead of clobbering a newer document.
//!
//! # Key Types
//!
//! - [`CharacterStore`] — The storage trait consumed by the composition layer
//! - [`StoredCharacter`] / [`NewCharacter`] / [`VersionBump`] — Record shapes
//! - [`InMemoryCharacterStore`] — HashMap-backed implementation for tests and embedding

pub mod error;
pub mod memory;
pub mod record;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryCharacterStore;
pub use record::{NewCharacter, StoredCharacter, VersionBump};
pub use traits::CharacterStore;
