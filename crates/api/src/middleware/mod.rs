//! Authentication and authorization extractors.
//!
//! - [`auth::resolve_identity`] -- Resolves the caller from a JWT Bearer token.
//! - [`rbac::RequireAdmin`] -- Requires an identity with the admin capability.
//! - [`rbac::RequireAuth`] -- Requires any identity.

pub mod auth;
pub mod rbac;
