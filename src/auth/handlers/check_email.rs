//! Email Availability Handler
//!
//! Implements POST /api/auth/check-email. Validates the email shape first
//! (400 on a malformed address), then reports whether the normalized address
//! is still unregistered. The result is advisory: the signup insert remains
//! the authoritative uniqueness check.

use axum::extract::State;
use axum::response::Json;
use sqlx::PgPool;

use crate::auth::handlers::types::{CheckEmailRequest, CheckEmailResponse};
use crate::auth::users::{email_exists, normalize_email};
use crate::auth::validators::validate_email;
use crate::error::ApiError;

/// Check whether an email is available for registration
pub async fn check_email(
    State(pool): State<PgPool>,
    Json(request): Json<CheckEmailRequest>,
) -> Result<Json<CheckEmailResponse>, ApiError> {
    let check = validate_email(&request.email);
    if !check.valid {
        return Err(ApiError::validation("email", check.message));
    }

    let email = normalize_email(&request.email);
    let taken = email_exists(&pool, &email).await?;

    Ok(Json(CheckEmailResponse {
        success: true,
        available: !taken,
    }))
}
