//! JWT-based identity resolution.

use axum::http::request::Parts;
use lms_core::guard::AuthenticatedUser;

use crate::auth::jwt::validate_token;
use crate::state::AppState;

/// Resolve the caller from the `Authorization: Bearer <token>` header.
///
/// Never fails: a missing, malformed, or expired token resolves to `None`
/// and the guard applied by the [`rbac`](super::rbac) extractors decides
/// what that means for the route.
pub fn resolve_identity(parts: &Parts, state: &AppState) -> Option<AuthenticatedUser> {
    let Some(auth_header) = parts
        .headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
    else {
        tracing::debug!("Request carries no Authorization header");
        return None;
    };

    let Some(token) = auth_header.strip_prefix("Bearer ") else {
        tracing::debug!("Authorization header is not a Bearer token");
        return None;
    };

    match validate_token(token, &state.config.jwt) {
        Ok(claims) => Some(AuthenticatedUser {
            user_id: claims.sub,
            is_admin: claims.is_admin,
        }),
        Err(e) => {
            tracing::debug!(error = %e, "Rejected access token");
            None
        }
    }
}
