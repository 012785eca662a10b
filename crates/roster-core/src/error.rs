//! Error types for directory operations.

use crate::member::MemberId;

/// Errors produced by the directory store.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A submitted record failed the required-field check.
    #[error("Validation error: {message}")]
    Validation {
        /// Field that failed validation, if known
        field: Option<String>,
        /// Description of the validation failure
        message: String,
    },

    /// No record with the given identifier exists.
    #[error("Member not found: {id}")]
    MemberNotFound {
        /// Identifier that matched nothing
        id: MemberId,
    },
}

impl Error {
    /// Creates a validation error with no specific field.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            field: None,
            message: message.into(),
        }
    }

    /// Creates a validation error for a specific field.
    pub fn validation_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: Some(field.into()),
            message: message.into(),
        }
    }

    /// Returns true if this is a validation error.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Returns true if this is a missing-record error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::MemberNotFound { .. })
    }
}

/// Result type alias using our error type.
pub type Result<T> = std::result::Result<T, Error>;
