//! Server Configuration
//!
//! Loads the database pool and signing configuration from the environment:
//!
//! - `DATABASE_URL` - PostgreSQL connection string (required)
//! - `JWT_SECRET` - token signing secret (falls back to a dev secret with a
//!   warning; see [`crate::auth::tokens::AuthConfig::from_env`])
//!
//! Unlike optional services, the database is mandatory here: every endpoint
//! touches it, so startup fails fast when it is missing or unreachable.

use sqlx::PgPool;

/// Connect to PostgreSQL and run pending migrations
///
/// # Errors
///
/// Fails when `DATABASE_URL` is unset, the connection cannot be established,
/// or a migration fails to apply.
pub async fn load_database() -> Result<PgPool, sqlx::Error> {
    let database_url = std::env::var("DATABASE_URL")
        .map_err(|_| sqlx::Error::Configuration("DATABASE_URL is not set".into()))?;

    tracing::info!("connecting to database");
    let pool = PgPool::connect(&database_url).await?;

    tracing::info!("running database migrations");
    sqlx::migrate!().run(&pool).await?;

    Ok(pool)
}
