//! Create Post Use Case

use std::sync::Arc;

use auth::domain::value_object::user_id::UserId;

use crate::domain::entity::post::Post;
use crate::domain::repository::PostRepository;
use crate::domain::value_object::post_title::PostTitle;
use crate::error::PostResult;

#[derive(Debug)]
pub struct CreatePostInput {
    pub title: String,
    /// Taken from the verified token, never from the request body
    pub created_by: UserId,
}

pub struct CreatePostUseCase<R> {
    repo: Arc<R>,
}

impl<R: PostRepository> CreatePostUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: CreatePostInput) -> PostResult<Post> {
        let title = PostTitle::new(&input.title)?;

        let post = Post::new(title, input.created_by);
        self.repo.create(&post).await?;

        tracing::info!(
            post_id = %post.post_id,
            created_by = %post.created_by,
            "post created"
        );

        Ok(post)
    }
}
