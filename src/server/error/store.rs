//! Failures reported by the feedback record store.
//!
//! The store classifies its own failures so the service never has to inspect a
//! database error to decide how to answer a request.

use thiserror::Error;

use crate::server::error::AppError;

pub const NOT_FOUND_MESSAGE: &str = "Feedback not found";
pub const INVALID_ID_MESSAGE: &str = "Invalid feedback ID";
pub const VALIDATION_MESSAGE: &str = "Validation error";

#[derive(Error, Debug)]
pub enum StoreError {
    /// The record would violate the feedback schema. Holds one message per violated rule.
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// The identifier is not a well-formed record id.
    #[error("Malformed feedback identifier '{0}'")]
    MalformedIdentifier(String),

    /// No record exists for a well-formed identifier.
    #[error("Feedback record not found")]
    NotFound,

    /// Any other storage failure (connectivity, constraint, driver error).
    #[error(transparent)]
    Other(#[from] sea_orm::DbErr),
}

/// Operation a store call was made for, used to pick the client-facing message
/// when the store fails unexpectedly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOperation {
    Fetch,
    Submit,
    Update,
    Delete,
}

impl StoreOperation {
    pub fn failure_message(self) -> &'static str {
        match self {
            StoreOperation::Fetch => "Server error while fetching feedback",
            StoreOperation::Submit => "Server error while submitting feedback",
            StoreOperation::Update => "Server error while updating feedback",
            StoreOperation::Delete => "Server error while deleting feedback",
        }
    }
}

impl StoreError {
    /// Maps a store failure onto the application error answered to the client.
    ///
    /// # Arguments
    /// - `operation` - Operation that issued the store call
    ///
    /// # Returns
    /// - `AppError::Validation` - For schema violations (400)
    /// - `AppError::BadRequest` - For malformed identifiers (400)
    /// - `AppError::NotFound` - For missing records (404)
    /// - `AppError::StoreFailure` - For everything else (500)
    pub fn into_app_error(self, operation: StoreOperation) -> AppError {
        match self {
            StoreError::Validation(errors) => AppError::Validation(errors),
            StoreError::MalformedIdentifier(_) => {
                AppError::BadRequest(INVALID_ID_MESSAGE.to_string())
            }
            StoreError::NotFound => AppError::NotFound(NOT_FOUND_MESSAGE.to_string()),
            StoreError::Other(source) => AppError::StoreFailure {
                message: operation.failure_message(),
                source,
            },
        }
    }
}
