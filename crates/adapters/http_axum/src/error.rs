//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use detailzone_domain::error::{DetailZoneError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`DetailZoneError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(DetailZoneError);

impl From<DetailZoneError> for ApiError {
    fn from(err: DetailZoneError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            DetailZoneError::Validation(err) => {
                tracing::debug!(error = %err, "rejected request");
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            DetailZoneError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
