//! HTTP error mapping.
//!
//! Every failure leaves the API as `{"error": "<message>"}` with a status chosen per
//! outcome; the message is the underlying error text, unaltered.

use axum::Json;
use axum::extract::rejection::PathRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use super::response::ErrorResponse;
use crate::errors::Error;

/// Result type for HTTP handlers
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Errors returned by HTTP handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed path or body (400)
    #[error("{0}")]
    BadRequest(String),

    /// Body decoded but missing or mistyped fields on create (422)
    #[error("{0}")]
    Unprocessable(String),

    /// Requested section does not exist (404)
    #[error("{0}")]
    NotFound(String),

    /// Section number already taken (409)
    #[error("{0}")]
    Conflict(String),

    /// Storage or other server-side failure (500)
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let message = err.to_string();
        match err {
            Error::SectionNotFound { .. } => Self::NotFound(message),
            Error::DuplicateSectionNumber { .. } => Self::Conflict(message),
            Error::Database(_) | Error::Config { .. } | Error::Io(_) => {
                tracing::error!("Request failed: {}", message);
                Self::Internal(message)
            }
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::new(self.to_string()));
        (status, body).into_response()
    }
}
