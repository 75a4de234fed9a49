//! Post crate integration tests
//!
//! Exercises the use cases end to end against an in-memory repository.

use std::sync::{Arc, Mutex};

use auth::domain::value_object::user_id::UserId;
use kernel::error::kind::ErrorKind;

use crate::application::{
    CreatePostInput, CreatePostUseCase, DeletePostInput, DeletePostUseCase, ListPostsUseCase,
    UpdatePostInput, UpdatePostUseCase,
};
use crate::domain::entity::post::{Post, PostWithAuthor};
use crate::domain::repository::PostRepository;
use crate::domain::value_object::{post_id::PostId, post_title::PostTitle};
use crate::error::{PostError, PostResult};

// ============================================================================
// In-memory repository
// ============================================================================

#[derive(Default)]
struct InMemoryPostRepository {
    posts: Mutex<Vec<Post>>,
}

impl PostRepository for InMemoryPostRepository {
    async fn create(&self, post: &Post) -> PostResult<()> {
        self.posts.lock().unwrap().push(post.clone());
        Ok(())
    }

    async fn list_with_authors(&self) -> PostResult<Vec<PostWithAuthor>> {
        Ok(self
            .posts
            .lock()
            .unwrap()
            .iter()
            .map(|post| PostWithAuthor {
                post: post.clone(),
                author_full_name: "Test Author".to_string(),
                author_user_name: "test.author".to_string(),
            })
            .collect())
    }

    async fn update_title_owned(
        &self,
        post_id: &PostId,
        owner: &UserId,
        title: &PostTitle,
    ) -> PostResult<Option<Post>> {
        let mut posts = self.posts.lock().unwrap();
        let found = posts
            .iter_mut()
            .find(|p| p.post_id == *post_id && p.created_by == *owner);

        Ok(found.map(|post| {
            post.set_title(title.clone());
            post.clone()
        }))
    }

    async fn delete_owned(&self, post_id: &PostId, owner: &UserId) -> PostResult<bool> {
        let mut posts = self.posts.lock().unwrap();
        let before = posts.len();
        posts.retain(|p| !(p.post_id == *post_id && p.created_by == *owner));
        Ok(posts.len() < before)
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn setup() -> Arc<InMemoryPostRepository> {
    Arc::new(InMemoryPostRepository::default())
}

async fn create(repo: &Arc<InMemoryPostRepository>, title: &str, owner: UserId) -> Post {
    CreatePostUseCase::new(repo.clone())
        .execute(CreatePostInput {
            title: title.to_string(),
            created_by: owner,
        })
        .await
        .unwrap()
}

// ============================================================================
// Create
// ============================================================================

mod create_tests {
    use super::*;

    #[tokio::test]
    async fn test_create_sets_owner_from_identity() {
        let repo = setup();
        let owner = UserId::new();

        let post = create(&repo, "Hello", owner).await;

        assert_eq!(post.created_by, owner);
        assert_eq!(post.title.as_str(), "Hello");
    }

    #[tokio::test]
    async fn test_create_empty_title_is_validation_error() {
        let repo = setup();

        let err = CreatePostUseCase::new(repo)
            .execute(CreatePostInput {
                title: "   ".to_string(),
                created_by: UserId::new(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::BadRequest);
    }
}

// ============================================================================
// List
// ============================================================================

mod list_tests {
    use super::*;

    #[tokio::test]
    async fn test_list_empty_store_is_ok() {
        let repo = setup();

        let posts = ListPostsUseCase::new(repo).execute().await.unwrap();

        assert!(posts.is_empty());
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let repo = setup();
        let owner = UserId::new();

        let first = create(&repo, "first", owner).await;
        let second = create(&repo, "second", owner).await;

        let posts = ListPostsUseCase::new(repo.clone()).execute().await.unwrap();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].post.post_id, first.post_id);
        assert_eq!(posts[1].post.post_id, second.post_id);
    }

    #[tokio::test]
    async fn test_list_is_idempotent() {
        let repo = setup();
        let owner = UserId::new();
        create(&repo, "first", owner).await;
        create(&repo, "second", owner).await;

        let use_case = ListPostsUseCase::new(repo.clone());
        let first_listing = use_case.execute().await.unwrap();
        let second_listing = use_case.execute().await.unwrap();

        assert_eq!(first_listing.len(), second_listing.len());
        for (a, b) in first_listing.iter().zip(second_listing.iter()) {
            assert_eq!(a.post.post_id, b.post.post_id);
            assert_eq!(a.post.title, b.post.title);
            assert_eq!(a.author_user_name, b.author_user_name);
        }
    }
}

// ============================================================================
// Update
// ============================================================================

mod update_tests {
    use super::*;

    #[tokio::test]
    async fn test_owner_can_update() {
        let repo = setup();
        let owner = UserId::new();
        let post = create(&repo, "before", owner).await;

        let updated = UpdatePostUseCase::new(repo.clone())
            .execute(UpdatePostInput {
                post_id: post.post_id,
                title: "after".to_string(),
                owner,
            })
            .await
            .unwrap();

        assert_eq!(updated.title.as_str(), "after");
        assert_eq!(updated.post_id, post.post_id);
    }

    #[tokio::test]
    async fn test_non_owner_gets_not_found_not_forbidden() {
        let repo = setup();
        let post = create(&repo, "mine", UserId::new()).await;

        let err = UpdatePostUseCase::new(repo.clone())
            .execute(UpdatePostInput {
                post_id: post.post_id,
                title: "stolen".to_string(),
                owner: UserId::new(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, PostError::PostNotFound));
        assert_eq!(err.kind(), ErrorKind::NotFound);

        // the post itself is untouched
        let posts = ListPostsUseCase::new(repo).execute().await.unwrap();
        assert_eq!(posts[0].post.title.as_str(), "mine");
    }

    #[tokio::test]
    async fn test_unknown_post_is_not_found() {
        let repo = setup();

        let err = UpdatePostUseCase::new(repo)
            .execute(UpdatePostInput {
                post_id: PostId::new(),
                title: "whatever".to_string(),
                owner: UserId::new(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, PostError::PostNotFound));
    }

    #[tokio::test]
    async fn test_empty_title_rejected_before_lookup() {
        let repo = setup();
        let owner = UserId::new();
        let post = create(&repo, "keep me", owner).await;

        let err = UpdatePostUseCase::new(repo.clone())
            .execute(UpdatePostInput {
                post_id: post.post_id,
                title: "".to_string(),
                owner,
            })
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::BadRequest);
    }
}

// ============================================================================
// Delete
// ============================================================================

mod delete_tests {
    use super::*;

    #[tokio::test]
    async fn test_owner_can_delete() {
        let repo = setup();
        let owner = UserId::new();
        let post = create(&repo, "ephemeral", owner).await;

        DeletePostUseCase::new(repo.clone())
            .execute(DeletePostInput {
                post_id: post.post_id,
                owner,
            })
            .await
            .unwrap();

        let posts = ListPostsUseCase::new(repo).execute().await.unwrap();
        assert!(posts.is_empty());
    }

    #[tokio::test]
    async fn test_non_owner_delete_is_not_found() {
        let repo = setup();
        let post = create(&repo, "mine", UserId::new()).await;

        let err = DeletePostUseCase::new(repo.clone())
            .execute(DeletePostInput {
                post_id: post.post_id,
                owner: UserId::new(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, PostError::PostNotFound));

        // still there
        let posts = ListPostsUseCase::new(repo).execute().await.unwrap();
        assert_eq!(posts.len(), 1);
    }
}

// ============================================================================
// DTO / error surface
// ============================================================================

mod presentation_tests {
    use super::*;
    use crate::presentation::dto::{ListedPostDto, PostDto};

    #[tokio::test]
    async fn test_listing_exposes_only_author_display_fields() {
        let repo = setup();
        create(&repo, "Hello", UserId::new()).await;

        let posts = ListPostsUseCase::new(repo).execute().await.unwrap();
        let json = serde_json::to_value(ListedPostDto::from(&posts[0])).unwrap();

        assert_eq!(json["author"]["fullName"], "Test Author");
        assert_eq!(json["author"]["username"], "test.author");
        assert!(json["author"].get("email").is_none());
        assert!(json["author"].get("passwordHash").is_none());
    }

    #[tokio::test]
    async fn test_post_dto_shape() {
        let repo = setup();
        let owner = UserId::new();
        let post = create(&repo, "Hello", owner).await;

        let json = serde_json::to_value(PostDto::from(&post)).unwrap();

        assert_eq!(json["title"], "Hello");
        assert_eq!(json["createdBy"], owner.to_string());
        assert!(json.get("id").is_some());
        assert!(json.get("createdAt").is_some());
    }

    #[test]
    fn test_error_kinds_map_to_spec_statuses() {
        assert_eq!(PostError::MissingFields.kind(), ErrorKind::BadRequest);
        assert_eq!(
            PostError::Validation("bad".to_string()).kind(),
            ErrorKind::BadRequest
        );
        assert_eq!(PostError::PostNotFound.kind(), ErrorKind::NotFound);
    }
}
