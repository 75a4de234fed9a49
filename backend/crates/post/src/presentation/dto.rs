//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entity::post::{Post, PostWithAuthor};

// ============================================================================
// Requests
// ============================================================================

/// Create post request
///
/// Optional at the wire level so a missing field becomes a domain
/// "All fields are required" error instead of a deserialization failure.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub title: Option<String>,
}

/// Update post request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    pub post_id: Option<String>,
    pub title: Option<String>,
}

/// Delete post request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletePostRequest {
    pub post_id: Option<String>,
}

// ============================================================================
// Responses
// ============================================================================

/// Public post representation
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDto {
    pub id: String,
    pub title: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Post> for PostDto {
    fn from(post: &Post) -> Self {
        Self {
            id: post.post_id.to_string(),
            title: post.title.as_str().to_string(),
            created_by: post.created_by.to_string(),
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// Author display fields exposed in listings
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDto {
    pub full_name: String,
    pub username: String,
}

/// Post joined with its author, as returned by the listing endpoint
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListedPostDto {
    #[serde(flatten)]
    pub post: PostDto,
    pub author: AuthorDto,
}

impl From<&PostWithAuthor> for ListedPostDto {
    fn from(entry: &PostWithAuthor) -> Self {
        Self {
            post: PostDto::from(&entry.post),
            author: AuthorDto {
                full_name: entry.author_full_name.clone(),
                username: entry.author_user_name.clone(),
            },
        }
    }
}

/// Payload wrapping a single post
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub post: PostDto,
}

/// Payload wrapping the full listing
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostListResponse {
    pub posts: Vec<ListedPostDto>,
}
