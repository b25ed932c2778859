use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use playbill_core::error::CoreError;
use serde_json::json;

/// Everything a handler can fail with.
///
/// Domain failures arrive as [`CoreError`], storage failures as
/// [`sqlx::Error`]; both convert with `?`. The [`IntoResponse`] impl is
/// the single choke point where errors become JSON bodies of the shape
/// `{"message": "..."}`, so no handler writes an error response by hand.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Domain rule violated or entity missing.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Query or connection failure.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Anything else that should read as a server fault.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Handler return type.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => (StatusCode::NOT_FOUND, core.to_string()),
                CoreError::Validation(msg) => (StatusCode::FORBIDDEN, msg.clone()),
                CoreError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            },

            AppError::Database(err) => map_sqlx_error(err),

            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal_error()
            }
        };

        let body = json!({ "message": message });

        (status, axum::Json(body)).into_response()
    }
}

/// The one response shape for faults the client cannot act on. Detail
/// goes to the log at the call site, never into the body.
fn internal_error() -> (StatusCode, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "An internal error occurred".to_string(),
    )
}

/// Map a sqlx error to a status and a message safe to show a client.
///
/// `RowNotFound` is the only storage failure a caller can act on, so it
/// gets a 404; the rest, constraint violations included, are logged in
/// full and surface as an opaque 500.
fn map_sqlx_error(err: &sqlx::Error) -> (StatusCode, String) {
    if matches!(err, sqlx::Error::RowNotFound) {
        return (StatusCode::NOT_FOUND, "Resource not found".to_string());
    }

    tracing::error!(error = %err, "Database error");
    internal_error()
}
