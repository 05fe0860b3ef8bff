//! Role-based access guards.
//!
//! Authentication happens upstream (the API gateway verifies the caller
//! and injects the resolved role into the [`ROLE_HEADER`] header); this
//! adapter only enforces the capability required by each endpoint. Guards
//! are request-part extractors placed in front of the handler arguments,
//! so the role check runs before any body is read or any domain logic is
//! invoked.

use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::request::Parts;

use crate::error::ApiError;

/// Header carrying the gateway-resolved caller role.
pub const ROLE_HEADER: &str = "x-role";

/// Caller capability, as resolved by the upstream gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Admin,
}

impl Role {
    /// Extract the role from request headers, if present and recognized.
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let raw = headers.get(ROLE_HEADER)?.to_str().ok()?;
        match raw.trim().to_ascii_lowercase().as_str() {
            "user" => Some(Self::User),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }
}

/// Guard for read endpoints: any authenticated role is accepted.
#[derive(Debug, Clone, Copy)]
pub struct RequireUser(pub Role);

/// Guard for mutating endpoints: `admin` only.
#[derive(Debug, Clone, Copy)]
pub struct RequireAdmin;

impl<S> FromRequestParts<S> for RequireUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match Role::from_headers(&parts.headers) {
            Some(role) => Ok(Self(role)),
            None => Err(ApiError::Forbidden),
        }
    }
}

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match Role::from_headers(&parts.headers) {
            Some(Role::Admin) => Ok(Self),
            _ => Err(ApiError::Forbidden),
        }
    }
}
