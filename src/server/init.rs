//! Server Initialization
//!
//! Assembles the application: configuration, database pool, state, router.
//!
//! # Initialization Steps
//!
//! 1. Load the signing configuration from the environment
//! 2. Connect to PostgreSQL and run migrations
//! 3. Build [`AppState`] and the router

use axum::Router;

use crate::auth::tokens::AuthConfig;
use crate::routes::router::create_router;
use crate::server::config::load_database;
use crate::server::state::AppState;

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails when the database is not configured or unreachable; the server does
/// not start without its store.
pub async fn create_app() -> Result<Router, sqlx::Error> {
    tracing::info!("initializing WITTI backend server");

    let auth = AuthConfig::from_env();
    let db_pool = load_database().await?;

    let app_state = AppState::new(db_pool, auth);
    Ok(create_router(app_state))
}
