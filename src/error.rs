//! Error types for the categoria domain model.
//!
//! Every failure is returned to the immediate caller. Nothing is logged or
//! swallowed here, and a failed operation never leaves an aggregate
//! partially modified.

use thiserror::Error;

use crate::category::CategoryNameError;

/// Represents errors that can occur while building, mutating or
/// deserializing a category
#[derive(Debug, Error)]
pub enum Error {
    /// The category name was empty or whitespace-only after trimming
    #[error("Category name is required")]
    NameRequired,

    /// The trimmed category name exceeded the allowed length
    #[error("Category name must be at most {max} characters")]
    NameTooLong { max: usize },

    /// A serialized field was present but had the wrong type
    #[error("Invalid type for field '{field}': expected {expected}")]
    InvalidFieldType {
        field: &'static str,
        expected: &'static str,
    },

    /// A required serialized field was absent
    #[error("Missing required field '{field}'")]
    MissingField { field: &'static str },

    /// A serialized identifier could not be parsed
    #[error("Invalid category id '{value}'")]
    InvalidId {
        value: String,
        #[source]
        source: uuid::Error,
    },

    /// A sequence of events could not be replayed into a category
    #[error("Invalid category history: {reason}")]
    InvalidHistory { reason: String },

    /// Indicates a failure to encode or decode JSON
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl From<CategoryNameError> for Error {
    fn from(error: CategoryNameError) -> Self {
        match error {
            CategoryNameError::NotEmptyViolated => Error::NameRequired,
            CategoryNameError::LenCharMaxViolated => Error::NameTooLong {
                max: crate::category::MAX_NAME_LEN,
            },
        }
    }
}
