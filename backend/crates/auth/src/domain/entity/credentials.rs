//! Credentials Entity
//!
//! Sensitive credential data, kept separate from the User profile so
//! the hash can never leak through user-facing serialization.

use crate::domain::value_object::{user_id::UserId, user_password::UserPassword};

/// Stored credentials for a user
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Owning user
    pub user_id: UserId,
    /// Argon2id hash in PHC string format
    pub password_hash: UserPassword,
}

impl Credentials {
    pub fn new(user_id: UserId, password_hash: UserPassword) -> Self {
        Self {
            user_id,
            password_hash,
        }
    }
}
