use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use salesboard_core::error::CoreError;
use serde_json::json;

use crate::seed::SeedError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds the operational failures
/// of the store and the seed source.
/// Implements [`IntoResponse`] to produce consistent JSON error responses of
/// the form `{"error": message, "code": CODE}`.
///
/// Validation failures map to 400. Every other failure maps to 500 and
/// carries the underlying error message.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `salesboard_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The seed dataset could not be fetched or decoded.
    #[error("Seed error: {0}")]
    Seed(#[from] SeedError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Internal(msg) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg.clone())
                }
            },

            // --- Operational errors ---
            AppError::Database(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "DATABASE_ERROR",
                err.to_string(),
            ),
            AppError::Seed(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "SEED_ERROR",
                err.to_string(),
            ),
        };

        if status.is_server_error() {
            tracing::error!(error = %self, code, "Request failed");
        }

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
