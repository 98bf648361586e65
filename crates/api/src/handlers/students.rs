//! Handlers for student enrollment and progress views.
//!
//! Admin routes look up any student via [`RequireAdmin`]; the `/me` routes
//! look up the caller via [`RequireAuth`].

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Admin endpoints
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/students/{student_id}/enrollments
pub async fn get_student_enrollments(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    tracing::info!(admin_id = %admin.user_id, %student_id, "Admin enrollment lookup");
    let view = state.enrollments.lookup(&student_id).await?;
    Ok(Json(DataResponse { data: view }))
}

/// GET /api/v1/admin/students/{student_id}/progress
pub async fn get_student_progress(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    tracing::info!(admin_id = %admin.user_id, %student_id, "Admin progress lookup");
    let view = state.progress.lookup(&student_id).await?;
    Ok(Json(DataResponse { data: view }))
}

// ---------------------------------------------------------------------------
// Self-service endpoints
// ---------------------------------------------------------------------------

/// GET /api/v1/me/enrollments
pub async fn get_my_enrollments(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let view = state.enrollments.lookup(&user.user_id).await?;
    Ok(Json(DataResponse { data: view }))
}

/// GET /api/v1/me/progress
pub async fn get_my_progress(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let view = state.progress.lookup(&user.user_id).await?;
    Ok(Json(DataResponse { data: view }))
}
