//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use auth::domain::value_object::user_id::UserId;

use crate::domain::entity::post::{Post, PostWithAuthor};
use crate::domain::repository::PostRepository;
use crate::domain::value_object::{post_id::PostId, post_title::PostTitle};
use crate::error::PostResult;

/// PostgreSQL-backed post repository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl PostRepository for PgPostRepository {
    async fn create(&self, post: &Post) -> PostResult<()> {
        sqlx::query(
            r#"
            INSERT INTO posts (
                post_id,
                title,
                created_by,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(post.post_id.as_uuid())
        .bind(post.title.as_str())
        .bind(post.created_by.as_uuid())
        .bind(post.created_at)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_with_authors(&self) -> PostResult<Vec<PostWithAuthor>> {
        let rows = sqlx::query_as::<_, PostWithAuthorRow>(
            r#"
            SELECT
                p.post_id,
                p.title,
                p.created_by,
                p.created_at,
                p.updated_at,
                u.full_name AS author_full_name,
                u.user_name AS author_user_name
            FROM posts p
            JOIN users u ON u.user_id = p.created_by
            ORDER BY p.created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_post_with_author()).collect())
    }

    async fn update_title_owned(
        &self,
        post_id: &PostId,
        owner: &UserId,
        title: &PostTitle,
    ) -> PostResult<Option<Post>> {
        // Ownership and existence in one statement: zero rows means
        // either, and the caller cannot tell which.
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            UPDATE posts SET
                title = $3,
                updated_at = NOW()
            WHERE post_id = $1 AND created_by = $2
            RETURNING post_id, title, created_by, created_at, updated_at
            "#,
        )
        .bind(post_id.as_uuid())
        .bind(owner.as_uuid())
        .bind(title.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_post()))
    }

    async fn delete_owned(&self, post_id: &PostId, owner: &UserId) -> PostResult<bool> {
        let deleted = sqlx::query("DELETE FROM posts WHERE post_id = $1 AND created_by = $2")
            .bind(post_id.as_uuid())
            .bind(owner.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct PostRow {
    post_id: Uuid,
    title: String,
    created_by: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PostRow {
    fn into_post(self) -> Post {
        Post {
            post_id: PostId::from_uuid(self.post_id),
            title: PostTitle::from_db(self.title),
            created_by: UserId::from_uuid(self.created_by),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct PostWithAuthorRow {
    post_id: Uuid,
    title: String,
    created_by: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    author_full_name: String,
    author_user_name: String,
}

impl PostWithAuthorRow {
    fn into_post_with_author(self) -> PostWithAuthor {
        PostWithAuthor {
            post: Post {
                post_id: PostId::from_uuid(self.post_id),
                title: PostTitle::from_db(self.title),
                created_by: UserId::from_uuid(self.created_by),
                created_at: self.created_at,
                updated_at: self.updated_at,
            },
            author_full_name: self.author_full_name,
            author_user_name: self.author_user_name,
        }
    }
}
