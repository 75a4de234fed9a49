//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::{credentials::Credentials, user::User};
use crate::domain::value_object::{email::Email, user_id::UserId, user_name::UserName};
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user together with its credentials
    async fn create(&self, user: &User, credentials: &Credentials) -> AuthResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    /// Find user by user name
    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>>;

    /// Find stored credentials for a user
    async fn find_credentials(&self, user_id: &UserId) -> AuthResult<Option<Credentials>>;

    /// Check if either the email or the user name is already registered
    ///
    /// One combined query so signup needs a single round trip.
    async fn exists_by_email_or_user_name(
        &self,
        email: &Email,
        user_name: &UserName,
    ) -> AuthResult<bool>;
}
