//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business logic failures. Not-found is not a domain
/// failure here; it surfaces through [`RepoError::NotFound`].
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unsupported media type: {0}")]
    UnsupportedMedia(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,
}

/// Upload-storage errors.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Invalid upload filename: {0}")]
    InvalidFilename(String),

    #[error("Failed to write upload: {0}")]
    Io(String),
}
