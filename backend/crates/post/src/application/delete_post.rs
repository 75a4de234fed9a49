//! Delete Post Use Case

use std::sync::Arc;

use auth::domain::value_object::user_id::UserId;

use crate::domain::repository::PostRepository;
use crate::domain::value_object::post_id::PostId;
use crate::error::{PostError, PostResult};

#[derive(Debug)]
pub struct DeletePostInput {
    pub post_id: PostId,
    /// Taken from the verified token, never from the request body
    pub owner: UserId,
}

pub struct DeletePostUseCase<R> {
    repo: Arc<R>,
}

impl<R: PostRepository> DeletePostUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Same ownership rule as update: not-owned and nonexistent posts
    /// are indistinguishable.
    pub async fn execute(&self, input: DeletePostInput) -> PostResult<()> {
        let removed = self.repo.delete_owned(&input.post_id, &input.owner).await?;

        if !removed {
            return Err(PostError::PostNotFound);
        }

        tracing::info!(post_id = %input.post_id, "post deleted");

        Ok(())
    }
}
