use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use directory_core::error::CoreError;
use serde_json::json;

/// Message returned for any payload that cannot be decoded.
pub const MALFORMED_BODY_MESSAGE: &str = "Invalid Request Body";

/// Message returned for a query string that cannot be decoded.
pub const MALFORMED_QUERY_MESSAGE: &str = "Invalid query string";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `directory_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The request body could not be parsed into the expected shape.
    #[error("Malformed request body: {0}")]
    MalformedInput(#[from] JsonRejection),

    /// The query string could not be parsed into the expected shape.
    #[error("Malformed query string: {0}")]
    MalformedQuery(#[from] QueryRejection),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut fields = None;

        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => {
                    tracing::debug!(entity = %entity, id = %id, "Lookup missed");
                    (
                        StatusCode::NOT_FOUND,
                        "NOT_FOUND",
                        format!("{entity} not found"),
                    )
                }
                CoreError::InvalidFields(errors) => {
                    fields = Some(errors.clone());
                    (
                        StatusCode::BAD_REQUEST,
                        "VALIDATION_ERROR",
                        "Validation failed".to_string(),
                    )
                }
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Payload decoding ---
            AppError::MalformedInput(rejection) => {
                tracing::debug!(error = %rejection, "Rejected request body");
                (
                    StatusCode::BAD_REQUEST,
                    "MALFORMED_INPUT",
                    MALFORMED_BODY_MESSAGE.to_string(),
                )
            }

            AppError::MalformedQuery(rejection) => {
                tracing::debug!(error = %rejection, "Rejected query string");
                (
                    StatusCode::BAD_REQUEST,
                    "MALFORMED_INPUT",
                    MALFORMED_QUERY_MESSAGE.to_string(),
                )
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let mut body = json!({
            "error": message,
            "code": code,
        });
        if let Some(fields) = fields {
            body["fields"] = json!(fields);
        }

        (status, axum::Json(body)).into_response()
    }
}
