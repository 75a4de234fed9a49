//! List Posts Use Case

use std::sync::Arc;

use crate::domain::entity::post::PostWithAuthor;
use crate::domain::repository::PostRepository;
use crate::error::PostResult;

pub struct ListPostsUseCase<R> {
    repo: Arc<R>,
}

impl<R: PostRepository> ListPostsUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Public listing; an empty store is a valid, empty result
    pub async fn execute(&self) -> PostResult<Vec<PostWithAuthor>> {
        self.repo.list_with_authors().await
    }
}
