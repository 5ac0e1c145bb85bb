//! Session Tokens
//!
//! Signed bearer-token issuance and verification (HS256 JWT). A token is a
//! 3-part, `.`-joined, URL-safe string: base64url(header).base64url(claims)
//! .base64url(mac). The MAC is recomputed over the first two parts during
//! verification and compared in constant time by the library; claims carry an
//! absolute expiry so verification needs no state besides "now".
//!
//! There is no refresh, rotation, or server-side revocation: a token stays
//! valid until its embedded expiry, and logout is a client-side discard.
//!
//! The signing secret lives in [`AuthConfig`], loaded once at startup and
//! passed into the codec, so the codec itself holds no process-wide state.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Token validity window: 7 days
pub const TOKEN_TTL_SECS: i64 = 7 * 24 * 60 * 60;

/// Signing configuration, initialized once at startup
#[derive(Clone, Debug)]
pub struct AuthConfig {
    /// Shared HMAC signing secret
    pub jwt_secret: String,
    /// Token validity window in seconds
    pub token_ttl_secs: i64,
}

impl AuthConfig {
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            token_ttl_secs: TOKEN_TTL_SECS,
        }
    }

    /// Load the signing secret from `JWT_SECRET`
    ///
    /// Falls back to a development secret with a warning so local runs work
    /// without configuration.
    pub fn from_env() -> Self {
        let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set, using insecure development secret");
            "witti-dev-secret-change-in-production".to_string()
        });
        Self::new(jwt_secret)
    }
}

/// Claims embedded in a session token
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// User id, as a string per JWT convention
    pub sub: String,
    /// Email at issuance time
    pub email: String,
    /// Display name at issuance time
    pub name: String,
    /// Issued-at (seconds since epoch)
    pub iat: u64,
    /// Absolute expiry (seconds since epoch)
    pub exp: u64,
}

impl Claims {
    /// Parse the subject back into a numeric user id
    pub fn user_id(&self) -> Option<i64> {
        self.sub.parse().ok()
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Create a session token for a user
///
/// The expiry is absolute: `now + config.token_ttl_secs`.
pub fn create_token(
    config: &AuthConfig,
    user_id: i64,
    email: &str,
    name: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    create_token_with_ttl(config, user_id, email, name, config.token_ttl_secs)
}

/// Create a session token with an explicit validity window
///
/// A zero or negative `ttl_secs` produces an already-expired token; tests use
/// this to exercise expiry rejection.
pub fn create_token_with_ttl(
    config: &AuthConfig,
    user_id: i64,
    email: &str,
    name: &str,
    ttl_secs: i64,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = unix_now();
    let exp = now.saturating_add_signed(ttl_secs);

    let claims = Claims {
        sub: user_id.to_string(),
        email: email.to_string(),
        name: name.to_string(),
        iat: now,
        exp,
    };

    let key = EncodingKey::from_secret(config.jwt_secret.as_ref());
    encode(&Header::default(), &claims, &key)
}

/// Verify a session token
///
/// Returns `None` for anything other than a well-formed 3-part token whose
/// MAC matches under the configured secret and whose expiry is still in the
/// future. Never panics.
///
/// Expiry boundary: the library's check is `exp < now`, so a token is still
/// accepted during the exact second it expires and rejected from the next
/// second on. With leeway zero that one-second window is the full extent of
/// the grace.
pub fn verify_token(config: &AuthConfig, token: &str) -> Option<Claims> {
    if token.split('.').count() != 3 {
        return None;
    }

    let key = DecodingKey::from_secret(config.jwt_secret.as_ref());
    let mut validation = Validation::new(Algorithm::HS256);
    // Reject the instant the expiry passes; no clock-skew grace.
    validation.leeway = 0;

    decode::<Claims>(token, &key, &validation)
        .map(|data| data.claims)
        .ok()
}
