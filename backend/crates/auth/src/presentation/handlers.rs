//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use std::sync::Arc;

use kernel::response::ApiResponse;

use crate::application::config::AuthConfig;
use crate::application::{SignInInput, SignInUseCase, SignUpInput, SignUpUseCase};
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{AuthResponse, LoginRequest, SignUpRequest, UserDto};

/// Shared state for auth handlers
pub struct AuthAppState<R> {
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

impl<R> Clone for AuthAppState<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            config: Arc::clone(&self.config),
        }
    }
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /auth/signup
pub async fn sign_up<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<SignUpRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Send + Sync + 'static,
{
    let (full_name, email, user_name, password) =
        match (req.full_name, req.email, req.username, req.password) {
            (Some(f), Some(e), Some(u), Some(p)) => (f, e, u, p),
            _ => return Err(AuthError::MissingFields),
        };

    let use_case = SignUpUseCase::new(state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(SignUpInput {
            full_name,
            email,
            user_name,
            password,
        })
        .await?;

    let cookie = state.config.token_cookie().build_set_cookie(&output.token);

    Ok((
        StatusCode::CREATED,
        [(header::SET_COOKIE, cookie)],
        ApiResponse::new(
            "User registered successfully",
            AuthResponse {
                user: UserDto::from(&output.user),
                token: output.token,
            },
        ),
    ))
}

// ============================================================================
// Login
// ============================================================================

/// POST /auth/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Send + Sync + 'static,
{
    let (identifier, password) = match (req.user, req.password) {
        (Some(u), Some(p)) => (u, p),
        _ => return Err(AuthError::MissingFields),
    };

    let use_case = SignInUseCase::new(state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(SignInInput {
            identifier,
            password,
        })
        .await?;

    let cookie = state.config.token_cookie().build_set_cookie(&output.token);

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        ApiResponse::new(
            "Login successful",
            AuthResponse {
                user: UserDto::from(&output.user),
                token: output.token,
            },
        ),
    ))
}

// ============================================================================
// Logout
// ============================================================================

/// POST /auth/logout
///
/// Stateless: the token stays valid until its natural expiry, this
/// endpoint only tells the client to discard it.
pub async fn logout<R>(State(state): State<AuthAppState<R>>) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Send + Sync + 'static,
{
    let cookie = state.config.token_cookie().build_delete_cookie();

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        ApiResponse::empty("Logged out successfully"),
    ))
}
