//! Post Title Value Object

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Maximum title length (in characters)
pub const POST_TITLE_MAX_LENGTH: usize = 280;

/// Post title value object
///
/// Free-form text, trimmed, non-empty and bounded in length.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PostTitle(String);

impl PostTitle {
    /// Create a new title with validation
    pub fn new(title: impl AsRef<str>) -> AppResult<Self> {
        let trimmed = title.as_ref().trim().to_string();

        if trimmed.is_empty() {
            return Err(AppError::bad_request("Title cannot be empty"));
        }

        let length = trimmed.chars().count();
        if length > POST_TITLE_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Title must be at most {} characters",
                POST_TITLE_MAX_LENGTH
            )));
        }

        Ok(Self(trimmed))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(title: impl Into<String>) -> Self {
        Self(title.into())
    }

    /// Get the title as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PostTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for PostTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
