//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use firmdir_domain::error::{FirmdirError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps application errors to an HTTP response with appropriate status
/// code.
#[derive(Debug)]
pub enum ApiError {
    /// An error raised by the domain or application layer.
    Domain(FirmdirError),
    /// The caller lacks the capability required by the endpoint.
    Forbidden,
    /// The uploaded byte stream could not be read.
    Upload(String),
}

impl From<FirmdirError> for ApiError {
    fn from(err: FirmdirError) -> Self {
        Self::Domain(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::Domain(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Domain(FirmdirError::Validation(err)) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            Self::Domain(FirmdirError::NotFound(err)) => (StatusCode::NOT_FOUND, err.to_string()),
            Self::Domain(FirmdirError::Storage(err)) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            Self::Forbidden => (StatusCode::FORBIDDEN, "forbidden".to_string()),
            Self::Upload(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Could not upload file: {message}"),
            ),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
