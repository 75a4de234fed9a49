//! User Entity
//!
//! Core user profile entity containing non-sensitive user data.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    email::Email, full_name::FullName, user_id::UserId, user_name::UserName,
};

/// User entity
///
/// Contains public user profile information.
/// The password hash lives in the [`super::credentials::Credentials`]
/// view and never passes through this type.
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// Display name
    pub full_name: FullName,
    /// Email address (unique, usable for login)
    pub email: Email,
    /// User name (unique, for login and display)
    pub user_name: UserName,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(full_name: FullName, email: Email, user_name: UserName) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            full_name,
            email,
            user_name,
            created_at: now,
            updated_at: now,
        }
    }
}
