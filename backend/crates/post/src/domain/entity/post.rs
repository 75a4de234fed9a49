//! Post Entity

use auth::domain::value_object::user_id::UserId;
use chrono::{DateTime, Utc};

use crate::domain::value_object::{post_id::PostId, post_title::PostTitle};

/// Post entity
#[derive(Debug, Clone)]
pub struct Post {
    /// Internal UUID identifier
    pub post_id: PostId,
    /// Post title (the only mutable field)
    pub title: PostTitle,
    /// Owning user
    pub created_by: UserId,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post owned by the given user
    pub fn new(title: PostTitle, created_by: UserId) -> Self {
        let now = Utc::now();

        Self {
            post_id: PostId::new(),
            title,
            created_by,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the title and bump the updated timestamp
    pub fn set_title(&mut self, title: PostTitle) {
        self.title = title;
        self.updated_at = Utc::now();
    }
}

/// Post joined with the display fields of its author
///
/// The listing endpoint exposes only the author's name fields, never
/// email or any credential data.
#[derive(Debug, Clone)]
pub struct PostWithAuthor {
    pub post: Post,
    pub author_full_name: String,
    pub author_user_name: String,
}
