//! Role extractors.
//!
//! Each extractor resolves the caller identity and runs it through a guard from
//! [`lms_core::guard`]. A rejection ends the request with 401 or 403 before
//! the handler body runs.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use lms_core::guard::{self, AuthenticatedUser};

use super::auth::resolve_identity;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the admin capability. 401 without identity, 403 for non-admins.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(user): RequireAdmin) -> AppResult<Json<()>> {
///     // user.is_admin is guaranteed here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub AuthenticatedUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let identity = resolve_identity(parts, state);
        let user = guard::require_admin(identity)?;
        Ok(RequireAdmin(user))
    }
}

/// Requires any authenticated user. 401 without identity.
pub struct RequireAuth(pub AuthenticatedUser);

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let identity = resolve_identity(parts, state);
        let user = guard::require_authenticated(identity)?;
        Ok(RequireAuth(user))
    }
}
