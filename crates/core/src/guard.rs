//! Request-time authorization checks.
//!
//! Both checks are pure functions over an optional identity. The HTTP layer
//! resolves the identity (or fails to) and hands the result here; an `Err`
//! halts the request before any handler runs.

use crate::error::CoreError;
use crate::types::StudentId;

/// Identity resolved from the request credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: StudentId,
    pub is_admin: bool,
}

/// Require an identity to be present.
pub fn require_authenticated(
    identity: Option<AuthenticatedUser>,
) -> Result<AuthenticatedUser, CoreError> {
    identity.ok_or_else(|| CoreError::Unauthorized("Authentication required".into()))
}

/// Require an identity carrying the admin capability.
///
/// Presence is checked first, so an anonymous request is always rejected as
/// unauthenticated, never as forbidden.
pub fn require_admin(identity: Option<AuthenticatedUser>) -> Result<AuthenticatedUser, CoreError> {
    let user = require_authenticated(identity)?;
    if !user.is_admin {
        return Err(CoreError::Forbidden("Admin role required".into()));
    }
    Ok(user)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn user(is_admin: bool) -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: "u1".to_string(),
            is_admin,
        }
    }

    #[test]
    fn anonymous_is_unauthorized() {
        assert_matches!(require_admin(None), Err(CoreError::Unauthorized(_)));
        assert_matches!(require_authenticated(None), Err(CoreError::Unauthorized(_)));
    }

    #[test]
    fn non_admin_is_forbidden() {
        assert_matches!(require_admin(Some(user(false))), Err(CoreError::Forbidden(_)));
    }

    #[test]
    fn admin_is_forwarded_unchanged() {
        assert_eq!(require_admin(Some(user(true))).unwrap(), user(true));
    }

    #[test]
    fn non_admin_passes_presence_check() {
        assert_eq!(require_authenticated(Some(user(false))).unwrap(), user(false));
    }
}
