use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: String,
    pub title: String,
    pub description: String,
}

#[derive(Error, Debug, Serialize)]
pub enum AionError {
    /// Input failed validation; lists every violated field
    #[error("Invalid input: {0:?}")]
    InvalidInput(Vec<FieldError>),

    /// Another user already holds this email
    #[error("Email {0} already registered")]
    EmailAlreadyRegistered(String),

    /// Repository-level failure (connectivity, constraint, ...)
    #[error("Storage error: {0}")]
    StorageError(String),
}
