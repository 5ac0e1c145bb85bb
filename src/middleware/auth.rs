//! Authentication Middleware
//!
//! Protects routes that require a logged-in user. It extracts the bearer
//! token from the `Authorization` header, verifies it with the token codec,
//! and attaches the resolved identity to request extensions for handlers.
//!
//! Missing header, malformed header, bad signature, and expired token all
//! produce the same 401 body.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::auth::tokens::verify_token;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Identity extracted from a verified token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: i64,
    pub email: String,
}

fn unauthorized() -> ApiError {
    ApiError::Unauthorized("Authentication required".to_string())
}

/// Bearer-token authentication middleware
///
/// 1. Extract the token from `Authorization: Bearer <token>`
/// 2. Verify signature and expiry via the token codec
/// 3. Attach [`AuthenticatedUser`] to request extensions
///
/// Returns 401 if any step fails.
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::debug!("missing authorization header");
            unauthorized()
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::debug!("authorization header is not a bearer token");
        unauthorized()
    })?;

    let claims = verify_token(&app_state.auth, token).ok_or_else(|| {
        tracing::debug!("token rejected");
        unauthorized()
    })?;

    let user_id = claims.user_id().ok_or_else(|| {
        tracing::warn!(sub = %claims.sub, "non-numeric subject in verified token");
        unauthorized()
    })?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id,
        email: claims.email,
    });

    Ok(next.run(request).await)
}

/// Extractor for the identity attached by [`auth_middleware`]
///
/// Use as a handler parameter on protected routes.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S: Send + Sync> axum::extract::FromRequestParts<S> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser missing from request extensions");
                unauthorized()
            })
    }
}
