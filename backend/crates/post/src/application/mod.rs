//! Application Layer
//!
//! Use cases and application services.

pub mod create_post;
pub mod delete_post;
pub mod list_posts;
pub mod update_post;

// Re-exports
pub use create_post::{CreatePostInput, CreatePostUseCase};
pub use delete_post::{DeletePostInput, DeletePostUseCase};
pub use list_posts::ListPostsUseCase;
pub use update_post::{UpdatePostInput, UpdatePostUseCase};
