//! Verified Request Identity
//!
//! [`CurrentUser`] is the identity snapshot attached to a request after
//! token verification. Handlers behind the auth middleware extract it
//! from request extensions.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity snapshot of the authenticated user
///
/// Carries exactly the profile fields embedded in the access token at
/// issue time. It is never re-fetched from the store, so a stale
/// snapshot remains valid until the token expires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub user_id: Uuid,
    pub full_name: String,
    pub email: String,
    pub user_name: String,
}

#[cfg(feature = "axum")]
impl<S> axum::extract::FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = crate::error::app_error::AppError;

    async fn from_request_parts(
        parts: &mut http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or_else(|| crate::error::app_error::AppError::unauthorized("Access Denied"))
    }
}
