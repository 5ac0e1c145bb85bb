//! Application State
//!
//! The central state container shared by all handlers. Only two things live
//! here: the PostgreSQL pool (internally synchronized) and the read-only
//! signing configuration, injected once at startup so the token codec stays
//! testable in isolation. There is no other cross-request mutable state.

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::auth::tokens::AuthConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db_pool: PgPool,
    /// Token signing configuration, read-only after startup
    pub auth: AuthConfig,
}

impl AppState {
    pub fn new(db_pool: PgPool, auth: AuthConfig) -> Self {
        Self { db_pool, auth }
    }
}

/// Lets handlers take `State(pool): State<PgPool>` directly.
impl FromRef<AppState> for PgPool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

/// Lets handlers take `State(auth): State<AuthConfig>` directly.
impl FromRef<AppState> for AuthConfig {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth.clone()
    }
}
