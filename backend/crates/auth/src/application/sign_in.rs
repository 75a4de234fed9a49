//! Sign In Use Case
//!
//! Authenticates a user by email or user name and issues an access
//! token on success.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::{TokenIssuer, UserSnapshot};
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_name::UserName, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

/// Sign-in input, already checked for field presence by the handler
#[derive(Debug)]
pub struct SignInInput {
    /// Email or user name; anything containing `@` is treated as an email
    pub identifier: String,
    pub password: String,
}

#[derive(Debug)]
pub struct SignInOutput {
    pub user: User,
    pub token: String,
}

pub struct SignInUseCase<R> {
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R: UserRepository> SignInUseCase<R> {
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        let user = self
            .lookup(&input.identifier)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        // A password that fails the policy can never match a stored
        // hash, so it gets the same answer as a wrong password.
        let raw_password =
            RawPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        let credentials = self
            .repo
            .find_credentials(&user.user_id)
            .await?
            .ok_or_else(|| {
                AuthError::Internal(format!("no credentials stored for user {}", user.user_id))
            })?;

        if !credentials
            .password_hash
            .verify(&raw_password, self.config.pepper())
        {
            return Err(AuthError::InvalidCredentials);
        }

        let snapshot = UserSnapshot::from(&user);
        let token = TokenIssuer::new(&self.config).issue(&snapshot);

        tracing::info!(
            user_id = %user.user_id,
            user_name = %user.user_name.original(),
            "user signed in"
        );

        Ok(SignInOutput { user, token })
    }

    /// Route the identifier to the matching lookup
    ///
    /// An identifier that fails value-object parsing cannot belong to
    /// any stored user, so it resolves to "not found" rather than a
    /// validation error.
    async fn lookup(&self, identifier: &str) -> AuthResult<Option<User>> {
        if identifier.contains('@') {
            match Email::new(identifier) {
                Ok(email) => self.repo.find_by_email(&email).await,
                Err(_) => Ok(None),
            }
        } else {
            match UserName::new(identifier) {
                Ok(user_name) => self.repo.find_by_user_name(&user_name).await,
                Err(_) => Ok(None),
            }
        }
    }
}
