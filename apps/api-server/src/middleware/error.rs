//! Error handling middleware - RFC 7807 compliant responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use inkwell_shared::ErrorResponse;
use std::fmt;

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    UnsupportedMedia(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::UnsupportedMedia(msg) => write!(f, "Unsupported media: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::UnsupportedMedia(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(detail) => ErrorResponse::not_found(detail),
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail),
            AppError::UnsupportedMedia(detail) => {
                ErrorResponse::new(400, "Unsupported Media Type").with_detail(detail)
            }
            AppError::Internal(detail) => {
                // Log internal errors; the response stays generic
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

// Conversion from domain errors
impl From<inkwell_core::error::DomainError> for AppError {
    fn from(err: inkwell_core::error::DomainError) -> Self {
        match err {
            inkwell_core::error::DomainError::Validation(msg) => AppError::BadRequest(msg),
            inkwell_core::error::DomainError::UnsupportedMedia(msg) => {
                AppError::UnsupportedMedia(msg)
            }
            inkwell_core::error::DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl From<inkwell_core::error::RepoError> for AppError {
    fn from(err: inkwell_core::error::RepoError) -> Self {
        match err {
            inkwell_core::error::RepoError::NotFound => {
                AppError::NotFound("Blog not found".to_string())
            }
            inkwell_core::error::RepoError::Query(msg) => {
                tracing::error!("Database query error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
