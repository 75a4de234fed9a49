//! Sign Up Use Case
//!
//! Registers a new user: validates input, checks uniqueness, hashes
//! the password and issues an access token for the new account.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::{TokenIssuer, UserSnapshot};
use crate::domain::entity::{credentials::Credentials, user::User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    full_name::FullName,
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Sign-up input, already checked for field presence by the handler
#[derive(Debug)]
pub struct SignUpInput {
    pub full_name: String,
    pub email: String,
    pub user_name: String,
    pub password: String,
}

/// Sign-up result: the created profile plus a token for it
#[derive(Debug)]
pub struct SignUpOutput {
    pub user: User,
    pub token: String,
}

pub struct SignUpUseCase<R> {
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R: UserRepository> SignUpUseCase<R> {
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<SignUpOutput> {
        let full_name = FullName::new(&input.full_name)?;
        let email = Email::new(input.email)?;
        let user_name =
            UserName::new(&input.user_name).map_err(|e| AuthError::Validation(e.to_string()))?;
        let raw_password = RawPassword::new(input.password)?;

        if self
            .repo
            .exists_by_email_or_user_name(&email, &user_name)
            .await?
        {
            return Err(AuthError::EmailOrUserNameTaken);
        }

        let password_hash = UserPassword::from_raw(&raw_password, self.config.pepper())?;

        let user = User::new(full_name, email, user_name);
        let credentials = Credentials::new(user.user_id, password_hash);

        self.repo.create(&user, &credentials).await?;

        // The token is bound to the account just created
        let snapshot = UserSnapshot::from(&user);
        let token = TokenIssuer::new(&self.config).issue(&snapshot);

        tracing::info!(
            user_id = %user.user_id,
            user_name = %user.user_name.original(),
            "user registered"
        );

        Ok(SignUpOutput { user, token })
    }
}
