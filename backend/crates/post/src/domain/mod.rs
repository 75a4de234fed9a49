//! Domain Layer

pub mod entity;
pub mod repository;
pub mod value_object;

pub use entity::{Post, PostWithAuthor};
pub use repository::PostRepository;
