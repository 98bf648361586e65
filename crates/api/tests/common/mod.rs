#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use lms_api::auth::jwt::{generate_access_token, JwtConfig};
use lms_api::config::ServerConfig;
use lms_api::router::build_app_router;
use lms_api::state::AppState;
use lms_db::InMemoryStudentRecords;
use lms_notifications::{DeliveryError, DeliveryReceipt, EmailMessage, NotificationSender};
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret".to_string(),
            access_token_expiry_mins: 15,
        },
    }
}

/// Build the full application router over the given store and mailer.
pub fn build_test_app(
    records: Arc<InMemoryStudentRecords>,
    notifier: Option<Arc<dyn NotificationSender>>,
) -> Router {
    build_app_router(AppState::new(test_config(), records, notifier))
}

/// Access token for an admin user.
pub fn admin_token() -> String {
    generate_access_token("admin-1", true, &test_config().jwt).expect("token should encode")
}

/// Access token for a regular (non-admin) user.
pub fn student_token(user_id: &str) -> String {
    generate_access_token(user_id, false, &test_config().jwt).expect("token should encode")
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Mailer that records every message and answers with a fixed outcome.
#[derive(Default)]
pub struct RecordingSender {
    pub sent: Mutex<Vec<EmailMessage>>,
    pub reject: bool,
}

#[async_trait]
impl NotificationSender for RecordingSender {
    async fn send(&self, message: &EmailMessage) -> Result<DeliveryReceipt, DeliveryError> {
        self.sent.lock().unwrap().push(message.clone());
        if self.reject {
            return Err(DeliveryError::Rejected("550 mailbox unavailable".into()));
        }
        Ok(DeliveryReceipt {
            message_id: format!("<test-{}@lms.local>", self.sent.lock().unwrap().len()),
        })
    }
}
