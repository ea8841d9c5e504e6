//! Shared error types for the course management system

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Validation failed: {field} {reason}")]
    ValidationError { field: String, reason: String },

    #[error("Invalid configuration: {field} = {value}")]
    InvalidConfig { field: String, value: String },
}

impl SharedError {
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        SharedError::ValidationError {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

pub type SharedResult<T> = Result<T, SharedError>;
