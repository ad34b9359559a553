use thiserror::Error;

/// Errors produced by foundation type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    /// The root of a candidate document was not a JSON object.
    #[error("invalid document shape: {0}")]
    InvalidDocumentShape(String),

    /// A field path string failed to parse.
    #[error("invalid field path {path:?}: {reason}")]
    InvalidPath { path: String, reason: String },
}
