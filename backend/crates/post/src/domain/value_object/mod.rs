pub mod post_id;
pub mod post_title;

pub use post_id::PostId;
pub use post_title::PostTitle;
