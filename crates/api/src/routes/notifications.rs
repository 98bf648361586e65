use axum::routing::post;
use axum::Router;

use crate::handlers::notifications;
use crate::state::AppState;

/// Routes mounted at `/admin/notifications`.
///
/// ```text
/// POST /email   -> send_email
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/email", post(notifications::send_email))
}
