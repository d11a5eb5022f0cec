//! Error types for store mutations.
//!
//! Nothing here is fatal: a failed mutation leaves the store untouched and
//! the caller surfaces the message. Derivation functions never error; missing
//! optional data reads as zero/empty.

use thiserror::Error;

/// Reasons a store mutation was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// A required field was blank. The add does not proceed.
    #[error("{field} is required")]
    MissingField { field: &'static str },

    /// No record with the given id in the targeted collection.
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    /// The value already exists in a uniqueness-constrained list.
    #[error("{kind} already exists: {value}")]
    Duplicate { kind: &'static str, value: String },
}

impl StoreError {
    pub(crate) fn not_found(kind: &'static str, id: &str) -> Self {
        StoreError::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}
