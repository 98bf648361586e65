use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use lms_core::error::CoreError;
use lms_db::StorageError;
use lms_notifications::DeliveryError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps the domain, storage, and delivery errors and implements
/// [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `lms_core` (guard rejections, validation).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The backing store could not be read.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The mail transport failed to take the message.
    #[error(transparent)]
    Delivery(#[from] DeliveryError),

    /// A collaborator the request needs is not configured.
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
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
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
            },

            // --- Storage errors ---
            AppError::Storage(err) => {
                tracing::error!(error = %err, "Storage access failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }

            // --- Delivery errors ---
            // Address and build failures come from the request, not the transport.
            AppError::Delivery(DeliveryError::Address(err)) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                format!("Invalid email address: {err}"),
            ),
            AppError::Delivery(DeliveryError::Build(msg)) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                format!("Invalid email message: {msg}"),
            ),
            AppError::Delivery(err) => {
                tracing::error!(error = %err, "Notification delivery failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "DELIVERY_FAILED",
                    "The notification could not be delivered".to_string(),
                )
            }

            AppError::ServiceUnavailable(msg) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "SERVICE_UNAVAILABLE",
                msg.clone(),
            ),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
