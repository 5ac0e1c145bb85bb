//! Signup Handler
//!
//! Implements POST /api/auth/signup.
//!
//! # Registration Process
//!
//! 1. Run all validators (email, password, name, phone) - a failure
//!    short-circuits with 400 and no side effects
//! 2. Normalize the email and pre-check for an existing account (fast 409,
//!    and no hash is computed for a rejected attempt)
//! 3. Hash the password with bcrypt
//! 4. Insert the user; a unique-constraint violation from the insert is the
//!    authoritative duplicate signal, closing the check-then-insert race
//!    under concurrent signups for the same email
//!
//! # Security
//!
//! - Passwords are bcrypt-hashed (per-record salt, DEFAULT_COST) and never
//!   returned or logged
//! - The plaintext is only touched after every validator has passed

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use sqlx::PgPool;

use crate::auth::handlers::types::{SignupRequest, SignupResponse, UserResponse};
use crate::auth::password::hash_password;
use crate::auth::users::{create_user, email_exists, normalize_email};
use crate::auth::validators::{validate_email, validate_name, validate_password, validate_phone};
use crate::error::ApiError;

/// Register a new user
///
/// # Errors
///
/// * `400 Bad Request` - A validator rejected the input; the message names the rule
/// * `409 Conflict` - The email is already registered
/// * `500 Internal Server Error` - Hashing or store failure
pub async fn signup(
    State(pool): State<PgPool>,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, Json<SignupResponse>), ApiError> {
    let check = validate_email(&request.email);
    if !check.valid {
        return Err(ApiError::validation("email", check.message));
    }
    let check = validate_password(&request.password);
    if !check.valid {
        return Err(ApiError::validation("password", check.message));
    }
    let check = validate_name(&request.name);
    if !check.valid {
        return Err(ApiError::validation("name", check.message));
    }
    let check = validate_phone(request.phone.as_deref());
    if !check.valid {
        return Err(ApiError::validation("phone", check.message));
    }

    let email = normalize_email(&request.email);
    tracing::info!(%email, "signup request");

    // Fast path: reject a known duplicate before computing a hash.
    if email_exists(&pool, &email).await? {
        return Err(ApiError::Conflict("Email already registered".to_string()));
    }

    let password_hash = hash_password(&request.password)?;

    let name = request.name.trim();
    let phone = request
        .phone
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty());

    let user = match create_user(&pool, &email, &password_hash, name, phone).await {
        Ok(user) => user,
        // Lost the race: another request inserted this email between the
        // pre-check and our insert. The constraint is the source of truth.
        Err(err) => {
            let api_err = ApiError::from(err);
            if api_err.is_unique_violation() {
                return Err(ApiError::Conflict("Email already registered".to_string()));
            }
            return Err(api_err);
        }
    };

    tracing::info!(user_id = user.id, "user created");

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            success: true,
            user: UserResponse::from(&user),
        }),
    ))
}
