use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use jobtrack_core::error::CoreError;

use crate::views;

/// Notice shown when the store fails underneath a request.
pub const RETRY_NOTICE: &str = "An error occurred. Please try again.";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`sqlx::Error`] for persistence
/// failures. Implements [`IntoResponse`] to render an HTML error page.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `jobtrack_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx. Any open transaction has been rolled back.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// An internal error with a human-readable message (hashing, signing).
    #[error("Internal error: {0}")]
    InternalError(String),

    /// No route or path parameter matches the request.
    #[error("Page not found")]
    PageNotFound,
}

/// Convenience type alias for handler and service return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// The status and user-facing notice to show on the form that caused
    /// this error, or `None` if the request should end with an error page.
    ///
    /// Only a missing or not-owned record ends the request; everything else
    /// is reported next to the submitted form.
    pub fn form_notice(&self) -> Option<(StatusCode, String)> {
        match self {
            AppError::Core(CoreError::NotFound { .. })
            | AppError::Database(sqlx::Error::RowNotFound)
            | AppError::PageNotFound => None,
            AppError::Core(CoreError::Validation(msg)) => {
                Some((StatusCode::BAD_REQUEST, msg.clone()))
            }
            AppError::Core(CoreError::Conflict(msg)) => Some((StatusCode::CONFLICT, msg.clone())),
            AppError::Core(CoreError::Unauthorized(msg)) => {
                Some((StatusCode::UNAUTHORIZED, msg.clone()))
            }
            AppError::Core(CoreError::Internal(msg)) | AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error while handling form");
                Some((StatusCode::INTERNAL_SERVER_ERROR, RETRY_NOTICE.to_string()))
            }
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error while handling form");
                Some((StatusCode::INTERNAL_SERVER_ERROR, RETRY_NOTICE.to_string()))
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, title, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => {
                    tracing::debug!(entity, id, "Record not found or not owned");
                    not_found()
                }
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, "Bad Request", msg.clone()),
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "Conflict", msg.clone()),
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "Unauthorized", msg.clone())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    internal()
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }

            AppError::PageNotFound => not_found(),
        };

        (status, views::errors::error_page(status, title, &message)).into_response()
    }
}

fn not_found() -> (StatusCode, &'static str, String) {
    (
        StatusCode::NOT_FOUND,
        "Not Found",
        "The requested page could not be found.".to_string(),
    )
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Something Went Wrong",
        RETRY_NOTICE.to_string(),
    )
}

/// Classify a sqlx error into an HTTP status, page title, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations (constraint name starting with `uq_`) map to 409.
/// - Everything else maps to 500 with a generic retry notice.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => not_found(),
        sqlx::Error::Database(db_err)
            if db_err.is_unique_violation()
                && db_err.constraint().is_some_and(|c| c.starts_with("uq_")) =>
        {
            (
                StatusCode::CONFLICT,
                "Conflict",
                "That record already exists.".to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            internal()
        }
    }
}
