use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use ceiba_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors plus raw database errors, and
/// implements [`IntoResponse`] to produce the standard
/// `{ success: false, message, errors? }` envelope. Internal details are
/// never leaked to the client; they go to the log instead.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `ceiba_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, errors) = match self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    format!("{entity} with id {id} not found"),
                    None,
                ),
                CoreError::Validation(fields) => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "Validation failed".to_string(),
                    Some(serde_json::to_value(fields).unwrap_or_default()),
                ),
                CoreError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg, None),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "An internal error occurred".to_string(),
                        None,
                    )
                }
            },
            AppError::Database(err) => classify_sqlx_error(err),
        };

        let mut body = json!({
            "success": false,
            "message": message,
        });
        if let Some(errors) = errors {
            body["errors"] = errors;
        }

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status and a sanitized message.
///
/// - `RowNotFound` maps to 404.
/// - Unique violations (23505) map to 409.
/// - FK violations (23503) map to 422 -- handler-level existence checks
///   should catch these first; this is the constraint backstop.
/// - Everything else maps to 500 with a generic message.
fn classify_sqlx_error(err: sqlx::Error) -> (StatusCode, String, Option<serde_json::Value>) {
    match &err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "Resource not found".to_string(),
            None,
        ),
        sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
            Some("23505") => (
                StatusCode::CONFLICT,
                format!(
                    "Duplicate value violates unique constraint: {}",
                    db_err.constraint().unwrap_or("unknown")
                ),
                None,
            ),
            Some("23503") => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "A referenced entity does not exist".to_string(),
                None,
            ),
            _ => {
                tracing::error!(error = %db_err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                    None,
                )
            }
        },
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An internal error occurred".to_string(),
                None,
            )
        }
    }
}
