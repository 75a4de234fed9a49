//! Auth Middleware
//!
//! Middleware for requiring a valid access token on protected routes.
//!
//! Every failure mode (missing header, malformed token, bad signature,
//! expiry) collapses into the same 401 "Access Denied" response so the
//! client learns nothing about which check failed. The response also
//! deletes the `authToken` cookie so stale browser state is cleared.

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenIssuer;

/// Middleware state
#[derive(Clone)]
pub struct AuthMiddlewareState {
    pub config: Arc<AuthConfig>,
}

/// Middleware that requires a valid bearer token
///
/// On success the verified [`CurrentUser`] snapshot is stored in the
/// request extensions for downstream extractors.
pub async fn require_auth(
    State(state): State<AuthMiddlewareState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let token = match bearer_token(&req) {
        Some(token) => token,
        None => {
            tracing::warn!("protected route hit without authorization header");
            return access_denied(&state.config);
        }
    };

    let issuer = TokenIssuer::new(&state.config);

    match issuer.verify(token) {
        Ok(snapshot) => {
            req.extensions_mut().insert(snapshot);
            next.run(req).await
        }
        Err(e) => {
            tracing::warn!(reason = %e, "token verification failed");
            access_denied(&state.config)
        }
    }
}

/// Read the token from the `authorization` header
///
/// Accepts both a bare token and the `Bearer <token>` scheme.
fn bearer_token(req: &Request<Body>) -> Option<&str> {
    let value = req
        .headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .trim();

    let token = value.strip_prefix("Bearer ").unwrap_or(value).trim();
    (!token.is_empty()).then_some(token)
}

/// The single 401 shape for every verification failure
fn access_denied(config: &AuthConfig) -> Response {
    let clear_cookie = config.token_cookie().build_delete_cookie();

    (
        StatusCode::UNAUTHORIZED,
        [(header::SET_COOKIE, clear_cookie)],
        axum::Json(serde_json::json!({
            "message": "Access Denied",
            "data": {},
            "success": false,
        })),
    )
        .into_response()
}
