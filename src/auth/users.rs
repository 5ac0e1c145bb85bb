//! User Model and Store Access
//!
//! Credential store access over the `users` table. Emails are stored
//! lowercase; callers normalize at the HTTP boundary before lookup or insert
//! so that registrations differing only by case resolve to one account.
//!
//! Uniqueness is ultimately enforced by the `users.email` UNIQUE constraint.
//! `email_exists` is a fast pre-check for UX; the insert in [`create_user`]
//! is what authoritatively detects a duplicate under concurrent signups.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// User row from the `users` table
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user id
    pub id: i64,
    /// Email, stored lowercase, unique
    pub email: String,
    /// bcrypt digest of the password
    pub password_hash: String,
    /// Display name
    pub name: String,
    /// Optional phone number (digits and hyphens)
    pub phone: Option<String>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Insert a new user row
///
/// Returns the created row. A unique-constraint violation surfaces as
/// `sqlx::Error::Database`; the signup handler maps it to a 409 conflict.
pub async fn create_user(
    pool: &PgPool,
    email: &str,
    password_hash: &str,
    name: &str,
    phone: Option<&str>,
) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (email, password_hash, name, phone)
        VALUES ($1, $2, $3, $4)
        RETURNING id, email, password_hash, name, phone, created_at
        "#,
    )
    .bind(email)
    .bind(password_hash)
    .bind(name)
    .bind(phone)
    .fetch_one(pool)
    .await
}

/// Get a user by email
pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, password_hash, name, phone, created_at
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

/// Get a user by id
pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, password_hash, name, phone, created_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Check whether an email is already registered
pub async fn email_exists(pool: &PgPool, email: &str) -> Result<bool, sqlx::Error> {
    let exists: bool =
        sqlx::query_scalar(r#"SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)"#)
            .bind(email)
            .fetch_one(pool)
            .await?;
    Ok(exists)
}

/// Normalize an email for storage and lookup
///
/// Lowercased and trimmed; applied at the HTTP boundary before any store
/// operation so email identity is case-insensitive.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("T@X.Com"), "t@x.com");
        assert_eq!(normalize_email("  kim@school.kr  "), "kim@school.kr");
        assert_eq!(normalize_email("already@lower.case"), "already@lower.case");
    }
}
