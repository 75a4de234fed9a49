//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use auth::domain::value_object::user_id::UserId;

use crate::domain::entity::post::{Post, PostWithAuthor};
use crate::domain::value_object::{post_id::PostId, post_title::PostTitle};
use crate::error::PostResult;

/// Post repository trait
#[trait_variant::make(PostRepository: Send)]
pub trait LocalPostRepository {
    /// Persist a new post
    async fn create(&self, post: &Post) -> PostResult<()>;

    /// List all posts joined with their authors, in insertion order
    async fn list_with_authors(&self) -> PostResult<Vec<PostWithAuthor>>;

    /// Update the title of a post owned by `owner`
    ///
    /// Ownership and existence are matched in one query: `None` means
    /// "no post with this id owned by this user", whichever of the two
    /// conditions failed.
    async fn update_title_owned(
        &self,
        post_id: &PostId,
        owner: &UserId,
        title: &PostTitle,
    ) -> PostResult<Option<Post>>;

    /// Delete a post owned by `owner`; same matching rule as update
    ///
    /// Returns whether a row was removed.
    async fn delete_owned(&self, post_id: &PostId, owner: &UserId) -> PostResult<bool>;
}
