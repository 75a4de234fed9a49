//! Full Name Value Object
//!
//! Display name shown alongside posts. Free-form text, only bounded
//! in length and never used for identification.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

/// Maximum full name length (in characters)
pub const FULL_NAME_MAX_LENGTH: usize = 100;

/// Full name value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FullName(String);

impl FullName {
    /// Create a new full name with validation
    ///
    /// Input is NFKC-normalized and trimmed. Must be non-empty and at
    /// most [`FULL_NAME_MAX_LENGTH`] characters.
    pub fn new(name: impl AsRef<str>) -> AppResult<Self> {
        let normalized: String = name.as_ref().nfkc().collect::<String>().trim().to_string();

        if normalized.is_empty() {
            return Err(AppError::bad_request("Full name cannot be empty"));
        }

        let length = normalized.chars().count();
        if length > FULL_NAME_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Full name must be at most {} characters",
                FULL_NAME_MAX_LENGTH
            )));
        }

        if normalized.chars().any(|c| c.is_control()) {
            return Err(AppError::bad_request(
                "Full name contains invalid characters",
            ));
        }

        Ok(Self(normalized))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the full name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FullName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for FullName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
