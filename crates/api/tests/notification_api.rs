//! HTTP-level tests for admin-triggered email.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{admin_token, body_json, build_test_app, post_json_auth, student_token, RecordingSender};
use lms_db::InMemoryStudentRecords;
use lms_notifications::{EmailConfig, NotificationSender, SmtpSender};
use serde_json::json;

const URI: &str = "/api/v1/admin/notifications/email";

fn payload() -> serde_json::Value {
    json!({ "to": "student@example.com", "subject": "Welcome", "body": "You are enrolled." })
}

#[tokio::test]
async fn admin_sends_email_and_gets_message_id() {
    let sender = Arc::new(RecordingSender::default());
    let notifier: Arc<dyn NotificationSender> = sender.clone();
    let app = build_test_app(Arc::new(InMemoryStudentRecords::new()), Some(notifier));

    let response = post_json_auth(app, URI, payload(), &admin_token()).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["message_id"], "<test-1@lms.local>");

    let sent = sender.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "student@example.com");
    assert_eq!(sent[0].subject, "Welcome");
}

#[tokio::test]
async fn non_admin_cannot_send_email() {
    let sender = Arc::new(RecordingSender::default());
    let notifier: Arc<dyn NotificationSender> = sender.clone();
    let app = build_test_app(Arc::new(InMemoryStudentRecords::new()), Some(notifier));

    let response = post_json_auth(app, URI, payload(), &student_token("s1")).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert!(sender.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn rejected_delivery_is_502_without_retry() {
    let sender = Arc::new(RecordingSender {
        reject: true,
        ..Default::default()
    });
    let notifier: Arc<dyn NotificationSender> = sender.clone();
    let app = build_test_app(Arc::new(InMemoryStudentRecords::new()), Some(notifier));

    let response = post_json_auth(app, URI, payload(), &admin_token()).await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(body_json(response).await["code"], "DELIVERY_FAILED");
    assert_eq!(sender.sent.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn missing_mailer_is_503() {
    let app = build_test_app(Arc::new(InMemoryStudentRecords::new()), None);

    let response = post_json_auth(app, URI, payload(), &admin_token()).await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn blank_subject_is_400() {
    let sender = Arc::new(RecordingSender::default());
    let notifier: Arc<dyn NotificationSender> = sender.clone();
    let app = build_test_app(Arc::new(InMemoryStudentRecords::new()), Some(notifier));

    let body = json!({ "to": "student@example.com", "subject": " ", "body": "" });
    let response = post_json_auth(app, URI, body, &admin_token()).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    assert!(sender.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn malformed_recipient_is_400_before_any_connection() {
    let sender = SmtpSender::new(EmailConfig {
        host: "127.0.0.1".to_string(),
        port: 1,
        username: None,
        password: None,
        from_address: "noreply@lms.local".to_string(),
    })
    .expect("transport should build");
    let notifier: Arc<dyn NotificationSender> = Arc::new(sender);
    let app = build_test_app(Arc::new(InMemoryStudentRecords::new()), Some(notifier));

    let body = json!({ "to": "not-an-email", "subject": "Welcome", "body": "hi" });
    let response = post_json_auth(app, URI, body, &admin_token()).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}
