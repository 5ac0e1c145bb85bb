//! Current User Handler
//!
//! Implements GET /api/auth/me. The auth middleware has already verified the
//! bearer token; this handler resolves the token's subject to a live user
//! row. A valid token whose user has since been deleted yields 404.

use axum::extract::State;
use axum::response::Json;
use sqlx::PgPool;

use crate::auth::handlers::types::{MeResponse, UserResponse};
use crate::auth::users::find_by_id;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;

/// Return the authenticated user's profile
///
/// # Errors
///
/// * `401 Unauthorized` - Missing/invalid/expired token (from the middleware)
/// * `404 Not Found` - Token is valid but the user row no longer exists
pub async fn get_me(
    State(pool): State<PgPool>,
    AuthUser(auth_user): AuthUser,
) -> Result<Json<MeResponse>, ApiError> {
    let user = find_by_id(&pool, auth_user.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(MeResponse {
        success: true,
        user: UserResponse::from(&user),
    }))
}
