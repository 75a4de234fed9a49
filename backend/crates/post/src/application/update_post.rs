//! Update Post Use Case

use std::sync::Arc;

use auth::domain::value_object::user_id::UserId;

use crate::domain::entity::post::Post;
use crate::domain::repository::PostRepository;
use crate::domain::value_object::{post_id::PostId, post_title::PostTitle};
use crate::error::{PostError, PostResult};

#[derive(Debug)]
pub struct UpdatePostInput {
    pub post_id: PostId,
    pub title: String,
    /// Taken from the verified token, never from the request body
    pub owner: UserId,
}

pub struct UpdatePostUseCase<R> {
    repo: Arc<R>,
}

impl<R: PostRepository> UpdatePostUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// A post owned by someone else answers 404 exactly like a
    /// nonexistent one.
    pub async fn execute(&self, input: UpdatePostInput) -> PostResult<Post> {
        let title = PostTitle::new(&input.title)?;

        let updated = self
            .repo
            .update_title_owned(&input.post_id, &input.owner, &title)
            .await?
            .ok_or(PostError::PostNotFound)?;

        tracing::info!(post_id = %updated.post_id, "post updated");

        Ok(updated)
    }
}
