//! # Book Errors
//!
//! Error types for the book store and its HTTP surface.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::model::BookId;

/// Result type for book operations
pub type BookResult<T> = Result<T, BookError>;

/// Book store and request errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookError {
    // ==================
    // Store Errors
    // ==================
    /// No book stored under the requested id
    #[error("Book with ID {0} not found")]
    NotFound(BookId),

    /// Create attempted with an id that is already taken
    #[error("Book ID already exists")]
    AlreadyExists(BookId),

    // ==================
    // Boundary Errors
    // ==================
    /// Request body failed to deserialize into a book
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Path segment is not a valid book id
    #[error("Invalid book id: {0}")]
    InvalidPath(String),

    // ==================
    // Server Errors
    // ==================
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BookError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            BookError::NotFound(_) => StatusCode::NOT_FOUND,
            BookError::AlreadyExists(_) => StatusCode::BAD_REQUEST,
            BookError::InvalidBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
            BookError::InvalidPath(_) => StatusCode::UNPROCESSABLE_ENTITY,
            BookError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl From<BookError> for ErrorResponse {
    fn from(err: BookError) -> Self {
        Self {
            detail: err.to_string(),
        }
    }
}

impl IntoResponse for BookError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}
