use std::any::Any;

use abaad_core::error::CoreError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`sqlx::Error`] for store
/// errors. Implements [`IntoResponse`] to produce consistent
/// `{ "error", "code" }` JSON bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `abaad_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

const INTERNAL_MESSAGE: &str = "An internal error occurred";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::Core(core) => core_error_parts(&core),
            AppError::Database(sqlx::Error::RowNotFound) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                "Resource not found".to_string(),
            ),
            AppError::Database(err) => core_error_parts(&classify_sqlx_error(&err)),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// HTTP status, error code and client-facing message for a domain error.
///
/// `Internal` details are logged and replaced by a generic message.
fn core_error_parts(core: &CoreError) -> (StatusCode, &'static str, String) {
    match core {
        CoreError::NotFound { entity, key } => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("{entity} with id {key} not found"),
        ),
        CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
        CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
        CoreError::Internal(msg) => {
            tracing::error!(error = %msg, "Internal error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                INTERNAL_MESSAGE.to_string(),
            )
        }
    }
}

/// Translate a store error into the domain error it represents.
///
/// - Unique (23505) and foreign-key (23503) violations are conflicts.
/// - NOT NULL (23502) and CHECK (23514) violations are validation errors.
/// - Everything else is internal; its text never reaches the client.
pub fn classify_sqlx_error(err: &sqlx::Error) -> CoreError {
    let sqlx::Error::Database(db_err) = err else {
        return CoreError::Internal(format!("Database error: {err}"));
    };
    let constraint = db_err.constraint().unwrap_or("unknown");
    match db_err.code().as_deref() {
        Some("23505") => CoreError::Conflict(format!(
            "Duplicate value violates unique constraint: {constraint}"
        )),
        Some("23503") => CoreError::Conflict(format!(
            "Referenced record is missing or still in use: {constraint}"
        )),
        Some("23502") => CoreError::Validation("A required value is missing".to_string()),
        Some("23514") => {
            CoreError::Validation(format!("Value violates check constraint: {constraint}"))
        }
        _ => CoreError::Internal(format!("Database error: {db_err}")),
    }
}

/// Body for a request whose handler panicked.
///
/// Installed through `CatchPanicLayer::custom`; the panic payload is
/// logged, never returned.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else {
        "non-string panic payload".to_string()
    };
    AppError::Core(CoreError::Internal(format!("Handler panicked: {detail}"))).into_response()
}
