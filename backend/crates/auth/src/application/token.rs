//! Access Token Issuer / Verifier
//!
//! Stateless signed bearer tokens. The token embeds the user snapshot
//! taken at issue time together with `iat`/`exp` claims, signed with
//! HMAC-SHA256.
//!
//! Wire format: `base64url(JSON claims) . base64url(signature)`
//!
//! ## Staleness contract
//! Verification never consults the store: the snapshot returned is
//! exactly the one issued, so profile changes after issue are not
//! reflected until the token expires (24 hours).

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use thiserror::Error;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;

/// Re-export of the kernel identity snapshot carried inside tokens
pub use kernel::extract::CurrentUser as UserSnapshot;

/// Token verification failures
///
/// The middleware collapses all of these into a single 401 response;
/// the distinction exists for logging only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Signature does not match the payload
    #[error("token signature mismatch")]
    InvalidSignature,

    /// Token is past its expiry time
    #[error("token expired")]
    Expired,

    /// Token is structurally invalid (wrong segment count, bad
    /// base64, undecodable claims)
    #[error("token malformed")]
    Malformed,
}

/// Signed claims carried by a token
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    #[serde(flatten)]
    user: UserSnapshot,
    /// Issued-at (unix seconds)
    iat: i64,
    /// Expiry (unix seconds, `iat + ttl`)
    exp: i64,
}

/// Issues and verifies signed access tokens
pub struct TokenIssuer {
    secret: [u8; 32],
    ttl_secs: i64,
}

impl TokenIssuer {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            secret: config.token_secret,
            ttl_secs: config.token_ttl_secs(),
        }
    }

    /// Issue a token for the given snapshot, valid from now
    pub fn issue(&self, snapshot: &UserSnapshot) -> String {
        self.issue_at(snapshot, chrono::Utc::now().timestamp())
    }

    /// Issue a token with an explicit issued-at timestamp
    pub fn issue_at(&self, snapshot: &UserSnapshot, iat: i64) -> String {
        let claims = Claims {
            user: snapshot.clone(),
            iat,
            exp: iat + self.ttl_secs,
        };

        let payload = URL_SAFE_NO_PAD
            .encode(serde_json::to_vec(&claims).expect("claims serialization cannot fail"));

        format!("{}.{}", payload, self.sign(&payload))
    }

    /// Verify a token against the current time
    pub fn verify(&self, token: &str) -> Result<UserSnapshot, TokenError> {
        self.verify_at(token, chrono::Utc::now().timestamp())
    }

    /// Verify a token against an explicit timestamp
    ///
    /// The signature is checked before the payload is decoded, so a
    /// tampered payload is always `InvalidSignature`, never `Malformed`.
    pub fn verify_at(&self, token: &str, now: i64) -> Result<UserSnapshot, TokenError> {
        let (payload, signature_b64) = token.split_once('.').ok_or(TokenError::Malformed)?;
        if payload.is_empty() || signature_b64.contains('.') {
            return Err(TokenError::Malformed);
        }

        let signature = URL_SAFE_NO_PAD
            .decode(signature_b64)
            .map_err(|_| TokenError::Malformed)?;

        let mut mac = Hmac::<Sha256>::new_from_slice(&self.secret)
            .expect("HMAC can take key of any size");
        mac.update(payload.as_bytes());
        mac.verify_slice(&signature)
            .map_err(|_| TokenError::InvalidSignature)?;

        let claims_bytes = URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|_| TokenError::Malformed)?;
        let claims: Claims =
            serde_json::from_slice(&claims_bytes).map_err(|_| TokenError::Malformed)?;

        if now >= claims.exp {
            return Err(TokenError::Expired);
        }

        Ok(claims.user)
    }

    /// HMAC-SHA256 signature over the payload segment
    fn sign(&self, payload: &str) -> String {
        let mut mac = Hmac::<Sha256>::new_from_slice(&self.secret)
            .expect("HMAC can take key of any size");
        mac.update(payload.as_bytes());
        URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes())
    }
}

impl From<&User> for UserSnapshot {
    fn from(user: &User) -> Self {
        Self {
            user_id: *user.user_id.as_uuid(),
            full_name: user.full_name.as_str().to_string(),
            email: user.email.as_str().to_string(),
            user_name: user.user_name.original().to_string(),
        }
    }
}
