//! Validation error types

use thiserror::Error;

/// Validation error for request payloads
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A batch operation was called with no items
    #[error("{operation} requires at least one item")]
    EmptyBatch { operation: &'static str },

    /// A creation payload is missing a required field
    #[error("item {index}: missing required field '{field}'")]
    MissingField { index: usize, field: &'static str },

    /// An identifier is not a valid 24-character hex ObjectId
    #[error("invalid document id '{value}'")]
    InvalidId { value: String },
}
