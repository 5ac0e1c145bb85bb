//! Login Handler
//!
//! Implements POST /api/auth/login.
//!
//! # Authentication Process
//!
//! 1. Reject empty fields with 400
//! 2. Look up the user by normalized email
//! 3. Verify the password against the stored bcrypt digest
//! 4. Issue a 7-day bearer token
//!
//! # Security
//!
//! - "Email not found" and "wrong password" return the identical 401 body,
//!   so responses cannot be used to enumerate accounts
//! - Password verification is constant-time inside bcrypt
//! - Passwords are never logged or echoed

use axum::extract::State;
use axum::response::Json;
use sqlx::PgPool;

use crate::auth::handlers::types::{LoginRequest, LoginResponse, UserResponse};
use crate::auth::password::verify_password;
use crate::auth::tokens::{create_token, AuthConfig};
use crate::auth::users::{find_by_email, normalize_email};
use crate::error::ApiError;

/// Authenticate a user and issue a session token
///
/// # Errors
///
/// * `400 Bad Request` - Missing email or password
/// * `401 Unauthorized` - Unknown email or wrong password (single message)
/// * `500 Internal Server Error` - Store, hashing, or token failure
pub async fn login(
    State(pool): State<PgPool>,
    State(auth): State<AuthConfig>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    if request.email.trim().is_empty() {
        return Err(ApiError::validation("email", "Email is required"));
    }
    if request.password.is_empty() {
        return Err(ApiError::validation("password", "Password is required"));
    }

    let email = normalize_email(&request.email);
    tracing::debug!(%email, "login request");

    let user = find_by_email(&pool, &email)
        .await?
        .ok_or_else(ApiError::bad_credentials)?;

    if !verify_password(&request.password, &user.password_hash)? {
        tracing::debug!(user_id = user.id, "password mismatch");
        return Err(ApiError::bad_credentials());
    }

    let token = create_token(&auth, user.id, &user.email, &user.name)?;

    tracing::info!(user_id = user.id, "user logged in");

    Ok(Json(LoginResponse {
        success: true,
        token,
        user: UserResponse::from(&user),
    }))
}
