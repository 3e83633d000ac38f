use std::collections::BTreeMap;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use ksa_core::error::DomainError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`DomainError`] for service outcomes and adds HTTP-specific
/// variants. Implements [`IntoResponse`] to produce the fixed JSON error
/// envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A typed failure from a domain service.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A malformed request body (undecodable JSON/XML).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for handler and service return values.
pub type AppResult<T> = Result<T, AppError>;

/// The fixed JSON error envelope. Null fields are omitted.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    /// ISO-8601 local timestamp, e.g. `2026-08-29T14:03:07.512`.
    timestamp: String,
    status: u16,
    /// Canonical reason phrase of the status, e.g. `Not Found`.
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    validation_errors: Option<BTreeMap<String, String>>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, validation_errors) = match self {
            AppError::Domain(domain) => match domain {
                DomainError::Validation(fields) => (
                    StatusCode::BAD_REQUEST,
                    "Validation failed".to_string(),
                    Some(fields),
                ),
                DomainError::ModelRequired(msg) => (StatusCode::FORBIDDEN, msg, None),
                DomainError::MakerNotFound(msg)
                | DomainError::ComputerNotFound(msg)
                | DomainError::KeyNotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
                DomainError::AlreadyExists(msg)
                | DomainError::InvalidSshKey(msg)
                | DomainError::KeyAlreadyExists(msg) => (StatusCode::BAD_REQUEST, msg, None),
                DomainError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal domain error");
                    internal()
                }
            },

            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                internal()
            }

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),

            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        };

        let body = ErrorBody {
            timestamp: local_timestamp(),
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or("Unknown").to_string(),
            message,
            validation_errors,
        };

        (status, axum::Json(body)).into_response()
    }
}

/// Sanitized 500 triple. The original error is already logged by the caller.
fn internal() -> (StatusCode, String, Option<BTreeMap<String, String>>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "An internal error occurred".to_string(),
        None,
    )
}

/// ISO-8601 local timestamp with millisecond precision.
fn local_timestamp() -> String {
    chrono::Local::now()
        .format("%Y-%m-%dT%H:%M:%S%.3f")
        .to_string()
}
