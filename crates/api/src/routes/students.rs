//! Route definitions for student enrollment and progress views.

use axum::routing::get;
use axum::Router;

use crate::handlers::students;
use crate::state::AppState;

/// Routes mounted at `/admin/students`. All require the admin capability.
///
/// ```text
/// GET /{student_id}/enrollments   -> get_student_enrollments
/// GET /{student_id}/progress      -> get_student_progress
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route(
            "/{student_id}/enrollments",
            get(students::get_student_enrollments),
        )
        .route("/{student_id}/progress", get(students::get_student_progress))
}

/// Routes mounted at `/me`. All require authentication.
///
/// ```text
/// GET /enrollments   -> get_my_enrollments
/// GET /progress      -> get_my_progress
/// ```
pub fn self_router() -> Router<AppState> {
    Router::new()
        .route("/enrollments", get(students::get_my_enrollments))
        .route("/progress", get(students::get_my_progress))
}
