pub mod health;
pub mod notifications;
pub mod students;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /admin/students/{student_id}/enrollments         enrollment view (admin only)
/// /admin/students/{student_id}/progress            progress view (admin only)
/// /admin/notifications/email                       send email (admin only)
///
/// /me/enrollments                                  caller's enrollment view
/// /me/progress                                     caller's progress view
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/admin/students", students::admin_router())
        .nest("/admin/notifications", notifications::router())
        .nest("/me", students::self_router())
}
