//! Handler for admin-triggered transactional email.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use lms_core::error::CoreError;
use lms_notifications::{EmailMessage, NotificationSender};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Body of `POST /api/v1/admin/notifications/email`.
#[derive(Debug, Deserialize)]
pub struct SendEmailRequest {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl SendEmailRequest {
    fn into_message(self) -> Result<EmailMessage, CoreError> {
        if self.to.trim().is_empty() {
            return Err(CoreError::Validation("Recipient address is required".into()));
        }
        if self.subject.trim().is_empty() {
            return Err(CoreError::Validation("Subject is required".into()));
        }
        Ok(EmailMessage {
            to: self.to.trim().to_string(),
            subject: self.subject,
            body: self.body,
        })
    }
}

/// POST /api/v1/admin/notifications/email
///
/// Sends one email with a single delivery attempt and returns the
/// message id. Fails with 503 when no mailer is configured and 502 when the
/// transport rejects the message.
pub async fn send_email(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<SendEmailRequest>,
) -> AppResult<impl IntoResponse> {
    let message = input.into_message()?;

    let notifier = state
        .notifier
        .as_ref()
        .ok_or_else(|| AppError::ServiceUnavailable("Email delivery is not configured".into()))?;

    let receipt = notifier.send(&message).await?;

    tracing::info!(
        admin_id = %admin.user_id,
        to = %message.to,
        message_id = %receipt.message_id,
        "Admin notification sent",
    );

    Ok(Json(DataResponse { data: receipt }))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn request(to: &str, subject: &str) -> SendEmailRequest {
        SendEmailRequest {
            to: to.to_string(),
            subject: subject.to_string(),
            body: "hello".to_string(),
        }
    }

    #[test]
    fn blank_recipient_is_rejected() {
        assert_matches!(request("  ", "Hi").into_message(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn blank_subject_is_rejected() {
        assert_matches!(request("a@b.c", "").into_message(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn recipient_is_trimmed() {
        let message = request(" a@b.c ", "Hi").into_message().unwrap();
        assert_eq!(message.to, "a@b.c");
    }
}
