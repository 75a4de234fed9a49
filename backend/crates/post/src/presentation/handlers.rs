//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::sync::Arc;
use uuid::Uuid;

use auth::domain::value_object::user_id::UserId;
use kernel::extract::CurrentUser;
use kernel::response::ApiResponse;

use crate::application::{
    CreatePostInput, CreatePostUseCase, DeletePostInput, DeletePostUseCase, ListPostsUseCase,
    UpdatePostInput, UpdatePostUseCase,
};
use crate::domain::repository::PostRepository;
use crate::domain::value_object::post_id::PostId;
use crate::error::{PostError, PostResult};
use crate::presentation::dto::{
    CreatePostRequest, DeletePostRequest, ListedPostDto, PostDto, PostListResponse, PostResponse,
    UpdatePostRequest,
};

/// Shared state for post handlers
pub struct PostAppState<R> {
    pub repo: Arc<R>,
}

impl<R> Clone for PostAppState<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
        }
    }
}

// ============================================================================
// Create
// ============================================================================

/// POST /post/create
pub async fn create_post<R>(
    State(state): State<PostAppState<R>>,
    current_user: CurrentUser,
    Json(req): Json<CreatePostRequest>,
) -> PostResult<impl IntoResponse>
where
    R: PostRepository + Send + Sync + 'static,
{
    let title = req.title.ok_or(PostError::MissingFields)?;

    let post = CreatePostUseCase::new(state.repo.clone())
        .execute(CreatePostInput {
            title,
            created_by: UserId::from_uuid(current_user.user_id),
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        ApiResponse::new(
            "Post created successfully",
            PostResponse {
                post: PostDto::from(&post),
            },
        ),
    ))
}

// ============================================================================
// List
// ============================================================================

/// GET /post/
pub async fn list_posts<R>(
    State(state): State<PostAppState<R>>,
) -> PostResult<impl IntoResponse>
where
    R: PostRepository + Send + Sync + 'static,
{
    let posts = ListPostsUseCase::new(state.repo.clone()).execute().await?;

    Ok(ApiResponse::new(
        "Posts fetched successfully",
        PostListResponse {
            posts: posts.iter().map(ListedPostDto::from).collect(),
        },
    ))
}

// ============================================================================
// Update
// ============================================================================

/// PUT /post/update
pub async fn update_post<R>(
    State(state): State<PostAppState<R>>,
    current_user: CurrentUser,
    Json(req): Json<UpdatePostRequest>,
) -> PostResult<impl IntoResponse>
where
    R: PostRepository + Send + Sync + 'static,
{
    let (post_id, title) = match (req.post_id, req.title) {
        (Some(id), Some(title)) => (id, title),
        _ => return Err(PostError::MissingFields),
    };

    let post = UpdatePostUseCase::new(state.repo.clone())
        .execute(UpdatePostInput {
            post_id: parse_post_id(&post_id)?,
            title,
            owner: UserId::from_uuid(current_user.user_id),
        })
        .await?;

    Ok(ApiResponse::new(
        "Post updated successfully",
        PostResponse {
            post: PostDto::from(&post),
        },
    ))
}

// ============================================================================
// Delete
// ============================================================================

/// POST /post/delete
pub async fn delete_post<R>(
    State(state): State<PostAppState<R>>,
    current_user: CurrentUser,
    Json(req): Json<DeletePostRequest>,
) -> PostResult<impl IntoResponse>
where
    R: PostRepository + Send + Sync + 'static,
{
    let post_id = req.post_id.ok_or(PostError::MissingFields)?;

    DeletePostUseCase::new(state.repo.clone())
        .execute(DeletePostInput {
            post_id: parse_post_id(&post_id)?,
            owner: UserId::from_uuid(current_user.user_id),
        })
        .await?;

    Ok(ApiResponse::empty("Post deleted successfully"))
}

/// A non-UUID id is a malformed request, not a missing post
fn parse_post_id(raw: &str) -> PostResult<PostId> {
    Uuid::parse_str(raw)
        .map(PostId::from_uuid)
        .map_err(|_| PostError::Validation("Invalid post id".to_string()))
}
