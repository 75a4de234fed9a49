//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Name of the cookie holding the access token on browser clients
pub const TOKEN_COOKIE_NAME: &str = "authToken";

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Token cookie name
    pub token_cookie_name: String,
    /// Secret key for HMAC-SHA256 token signing (32 bytes)
    pub token_secret: [u8; 32],
    /// Token lifetime (1 day)
    pub token_ttl: Duration,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_cookie_name: TOKEN_COOKIE_NAME.to_string(),
            token_secret: [0u8; 32],
            token_ttl: Duration::from_secs(24 * 3600), // 1 day
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
            password_pepper: None,
        }
    }
}

impl AuthConfig {
    /// Create config with a random token secret (for development)
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self {
            token_secret: secret,
            ..Default::default()
        }
    }

    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::with_random_secret()
        }
    }

    /// Get token TTL in seconds
    pub fn token_ttl_secs(&self) -> i64 {
        self.token_ttl.as_secs() as i64
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }

    /// Cookie settings for the token cookie
    pub fn token_cookie(&self) -> platform::cookie::CookieConfig {
        platform::cookie::CookieConfig {
            name: self.token_cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age_secs: Some(self.token_ttl_secs()),
        }
    }
}
