//! HTTP error response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use stockroom_domain::error::StockroomError;

use crate::json::PrettyJson;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Failure of an API handler, rendered as `{"error": message}`.
#[derive(Debug)]
pub enum ApiError {
    /// The `{id}` path segment is not an integer.
    InvalidId,
    /// The request body could not be decoded into a product.
    InvalidPayload,
    /// Error returned by the application layer.
    Domain(StockroomError),
}

impl From<StockroomError> for ApiError {
    fn from(err: StockroomError) -> Self {
        Self::Domain(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::InvalidId => (StatusCode::BAD_REQUEST, "invalid product ID".to_string()),
            Self::InvalidPayload => (
                StatusCode::BAD_REQUEST,
                "Invalid request payload".to_string(),
            ),
            Self::Domain(StockroomError::NotFound(err)) => {
                (StatusCode::NOT_FOUND, err.to_string())
            }
            Self::Domain(err @ StockroomError::Storage(_)) => {
                tracing::error!(error = %err, "storage error");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        (status, PrettyJson(ErrorBody { error: message })).into_response()
    }
}
