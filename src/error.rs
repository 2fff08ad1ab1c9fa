use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Application-wide error types.
///
/// Every failure a controller can produce maps onto one of these variants;
/// nothing escapes to the transport layer as an unhandled fault.
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing/malformed field, bad encoded array, rejected file.
    #[error("{0}")]
    Validation(String),

    /// Uniform message regardless of which check failed, so the response
    /// does not reveal whether the token was missing, expired or forged.
    #[error("Not authorized")]
    Unauthorized,

    #[error("{0}")]
    NotFound(String),

    /// Singleton resource already exists for this owner.
    #[error("{0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("{0}")]
    Internal(String),
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::Database(err.to_string())
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

/// Converts an `AppError` into the `{status: "error", message}` envelope.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Storage(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = serde_json::json!({
            "status": "error",
            "message": self.to_string(),
        });

        (status, axum::Json(body)).into_response()
    }
}
